use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::services::session::SessionInfo;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/session", get(get_session))
}

// GET /api/session
pub async fn get_session(State(state): State<Arc<AppState>>) -> Json<SessionInfo> {
    Json(state.session.clone())
}
