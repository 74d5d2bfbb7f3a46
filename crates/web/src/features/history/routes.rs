use axum::{Router, routing::get};

use super::handlers::{get_history_record, list_history};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/history", get(list_history))
        .route("/history/:id", get(get_history_record))
}
