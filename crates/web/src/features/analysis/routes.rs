use axum::{Router, extract::DefaultBodyLimit, routing::post};

use super::handlers::{analyze, what_if};
use crate::AppState;

pub fn routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/analyze",
            post(analyze).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/whatif", post(what_if))
}
