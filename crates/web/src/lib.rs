use axum::{Router, extract::FromRef};
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;
pub mod uploads;

use uploads::UploadStore;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::analysis::handlers::analyze,
        features::analysis::handlers::what_if,
        features::history::handlers::list_history,
        features::history::handlers::get_history_record,
    ),
    components(
        schemas(
            storage::dto::analysis::AnalyzeForm,
            storage::dto::analysis::AnalyzeResponse,
            storage::dto::analysis::AnalysisResult,
            storage::dto::analysis::MetricsInput,
            storage::dto::analysis::ScenarioDelta,
            storage::dto::analysis::WhatIfRequest,
            storage::dto::analysis::WhatIfResponse,
            storage::dto::history::HistoryRecordResponse,
            storage::models::RiskProfile,
            storage::models::Routine,
        )
    ),
    tags(
        (name = "analysis", description = "Score lifestyle inputs"),
        (name = "history", description = "Previously recorded analyses"),
    )
)]
pub struct ApiDoc;

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub uploads: UploadStore,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for UploadStore {
    fn from_ref(state: &AppState) -> Self {
        state.uploads.clone()
    }
}

/// Build the full application router.
pub fn app(state: AppState, max_upload_bytes: usize) -> Router {
    let api = features::analysis::routes::routes(max_upload_bytes)
        .merge(features::history::routes::routes());

    Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
