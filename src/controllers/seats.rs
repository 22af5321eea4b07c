use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use validator::Validate;

use super::{bad_request, seat_error, ApiError};
use crate::models::SeatId;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(get_seats))
        .route("/seats/click", post(click_seat))
        .route("/seats/select", patch(select_seat))
        .route("/seats/release", patch(release_seat))
        .route("/seats/select-all", post(select_all_seats))
        .route("/selection", get(get_selection))
}

#[derive(Debug, Deserialize, Validate)]
pub struct SeatRequest {
    #[validate(range(min = 1, message = "row должен быть > 0"))]
    pub row: u32,
    #[validate(range(min = 1, message = "seat должен быть > 0"))]
    pub seat: u32,
}

// Тело, которое не разобралось (отрицательные, нечисловые, пропущенные поля), тоже 400
fn seat_id(payload: Result<Json<SeatRequest>, JsonRejection>) -> Result<SeatId, ApiError> {
    let Json(req) = payload.map_err(|e| bad_request(e.body_text()))?;
    req.validate().map_err(|e| bad_request(e.to_string()))?;
    Ok(SeatId::new(req.row, req.seat))
}

// GET /api/seats
pub async fn get_seats(State(state): State<Arc<AppState>>) -> Json<Value> {
    let seat_map = state.seat_map.lock().await;
    Json(json!({ "rows": seat_map.view() }))
}

// POST /api/seats/click
pub async fn click_seat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SeatRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = seat_id(payload)?;
    let mut seat_map = state.seat_map.lock().await;
    let result = seat_map.click(id).map_err(seat_error)?;
    Ok(Json(json!({
        "success": true,
        "result": result,
        "selection": seat_map.summary(),
    })))
}

// PATCH /api/seats/select
pub async fn select_seat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SeatRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = seat_id(payload)?;
    let mut seat_map = state.seat_map.lock().await;
    seat_map.select(id).map_err(seat_error)?;
    Ok(Json(json!({ "success": true, "selection": seat_map.summary() })))
}

// PATCH /api/seats/release
pub async fn release_seat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SeatRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = seat_id(payload)?;
    let mut seat_map = state.seat_map.lock().await;
    seat_map.release(id).map_err(seat_error)?;
    Ok(Json(json!({ "success": true, "selection": seat_map.summary() })))
}

// POST /api/seats/select-all - вызывается после подтверждения в модалке
pub async fn select_all_seats(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut seat_map = state.seat_map.lock().await;
    let added = seat_map.select_all();
    Json(json!({ "success": true, "added": added, "selection": seat_map.summary() }))
}

// GET /api/selection
pub async fn get_selection(State(state): State<Arc<AppState>>) -> Json<Value> {
    let seat_map = state.seat_map.lock().await;
    Json(json!(seat_map.summary()))
}
