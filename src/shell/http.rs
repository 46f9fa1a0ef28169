use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::localtime::use_cases::get_local_time::inbound::http as get_local_time_http;
use crate::shell::state::AppState;

/// Leading slash, no trailing slash. The root path collapses to an empty string.
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

pub fn router(state: AppState, base_path: &str) -> Router {
    let base = normalize_base_path(base_path);
    let router = if base.is_empty() {
        Router::new().route("/", get(get_local_time_http::handle))
    } else {
        Router::new()
            .route(&base, get(get_local_time_http::handle))
            .route(&format!("{base}/"), get(get_local_time_http::handle))
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
