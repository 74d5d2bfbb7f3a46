use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::history::HistoryRecordResponse};

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/history",
    responses(
        (status = 200, description = "All recorded analyses, most recent first", body = Vec<HistoryRecordResponse>)
    ),
    tag = "history"
)]
pub async fn list_history(State(db): State<Database>) -> WebResult<Response> {
    let scans = services::list_history(db.pool()).await?;

    let response: Vec<HistoryRecordResponse> = scans
        .into_iter()
        .map(HistoryRecordResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/history/{id}",
    params(
        ("id" = i64, Path, description = "History record ID")
    ),
    responses(
        (status = 200, description = "History record found", body = HistoryRecordResponse),
        (status = 404, description = "History record not found")
    ),
    tag = "history"
)]
pub async fn get_history_record(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> WebResult<Response> {
    let scan = services::get_history_record(db.pool(), id).await?;

    Ok(Json(HistoryRecordResponse::from(scan)).into_response())
}
