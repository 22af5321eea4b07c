pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod controllers;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::HallConfig;
use crate::error::SeatMapError;
use crate::services::selection::SeatMap;
use crate::services::session::SessionInfo;

// Shared state для всего приложения: одна схема зала на один сеанс
pub struct AppState {
    pub seat_map: Mutex<SeatMap>,
    pub session: SessionInfo,
}

impl AppState {
    pub fn new(hall: &HallConfig) -> Result<Arc<Self>, SeatMapError> {
        let seat_map = SeatMap::from_hall(hall)?;
        let session = SessionInfo::today(&hall.session_times);
        tracing::info!("Session {} {:?}", session.date, session.time);

        Ok(Arc::new(Self {
            seat_map: Mutex::new(seat_map),
            session,
        }))
    }
}
