pub mod layout;
pub mod adjacency;
pub mod selection;
pub mod session;
