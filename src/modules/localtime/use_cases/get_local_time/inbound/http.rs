use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let current = state.get_local_time.handle();
    tracing::debug!(current_time = %current.current_time, "serving current time");
    (StatusCode::OK, Json(current))
}
