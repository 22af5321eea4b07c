pub mod seats;
pub mod session;

use axum::{http::StatusCode, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::SeatMapError;
use crate::AppState;

pub const SHAKE_MS: u64 = 300;

pub type ApiError = (StatusCode, Json<Value>);

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(seats::routes())
        .merge(session::routes())
}

/* ---------- helpers ---------- */

fn status_419() -> StatusCode {
    StatusCode::from_u16(419).unwrap_or(StatusCode::CONFLICT)
}

pub(crate) fn bad_request(message: String) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "error": "validation", "message": message })),
    )
}

// Ошибки выбора мест -> HTTP. Разрыв между местами - ожидаемый ответ для пользователя, не сбой
pub(crate) fn seat_error(err: SeatMapError) -> ApiError {
    let message = err.to_string();
    match err {
        SeatMapError::GapConflict(id) => (
            status_419(),
            Json(json!({
                "success": false,
                "error": "gap_conflict",
                "message": "Нельзя оставлять одно свободное место между занятыми",
                "seat": id,
                "shake_ms": SHAKE_MS,
            })),
        ),
        SeatMapError::UnknownSeat(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "unknown_seat", "message": message })),
        ),
        SeatMapError::Occupied(_) => (
            StatusCode::CONFLICT,
            Json(json!({ "success": false, "error": "occupied", "message": message })),
        ),
        SeatMapError::AlreadySelected(_) => (
            StatusCode::CONFLICT,
            Json(json!({ "success": false, "error": "already_selected", "message": message })),
        ),
        SeatMapError::NotSelected(_) => (
            StatusCode::CONFLICT,
            Json(json!({ "success": false, "error": "not_selected", "message": message })),
        ),
        SeatMapError::UnpricedClass(_) => {
            tracing::error!("seat map misconfigured: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "internal", "message": message })),
            )
        }
    }
}
