pub mod seat;
pub mod row;
pub mod price;

pub use seat::{Seat, SeatClass, SeatId, Slot};
pub use row::{hall_is_aligned, Cell, Row, RowSpec, SeatMarker};
pub use price::PriceTable;
