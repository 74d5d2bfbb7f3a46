use axum::{
    Json,
    extract::{Multipart, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::analysis::{AnalyzeForm, AnalyzeResponse, WhatIfRequest, WhatIfResponse},
};
use validator::Validate;

use crate::error::{WebError, WebResult};
use crate::uploads::{UploadStore, UploadedAsset};

use super::services;

const IMAGE_FIELD: &str = "image";

#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body(
        content = AnalyzeForm,
        content_type = "multipart/form-data",
        description = "Lifestyle metrics as numeric strings, plus an optional `image` file"
    ),
    responses(
        (status = 200, description = "Analysis computed and recorded", body = AnalyzeResponse),
        (status = 400, description = "Missing or non-numeric metric"),
        (status = 413, description = "Upload too large")
    ),
    tag = "analysis"
)]
pub async fn analyze(
    State(db): State<Database>,
    State(uploads): State<UploadStore>,
    multipart: Multipart,
) -> WebResult<Response> {
    let (form, image) = read_form(multipart).await?;

    let input = form.to_input()?;
    tracing::debug!(
        skin_goal = form.skin_goal.as_deref(),
        hair_goal = form.hair_goal.as_deref(),
        environment = form.environment.as_deref(),
        "Analysis preferences"
    );

    let mut stored = None;
    if let Some(image) = image {
        stored = uploads.store(&image).await.map_err(|e| {
            WebError::InternalServerError(format!("Failed to store upload: {}", e))
        })?;
        if let Some(path) = &stored {
            tracing::debug!("Stored upload at {}", path.display());
        }
    }

    let response = match services::analyze(db.pool(), &input).await {
        Ok(response) => response,
        Err(e) => {
            // An upload without a history record is unreachable; drop it.
            if let Some(path) = stored
                && let Err(remove_err) = tokio::fs::remove_file(&path).await
            {
                tracing::warn!(
                    "Failed to remove orphaned upload {}: {}",
                    path.display(),
                    remove_err
                );
            }
            return Err(e.into());
        }
    };

    Ok(Json(response).into_response())
}

async fn read_form(mut multipart: Multipart) -> WebResult<(AnalyzeForm, Option<UploadedAsset>)> {
    let mut form = AnalyzeForm::default();
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == IMAGE_FIELD {
            let file_name = field.file_name().map(str::to_owned);
            let bytes = field.bytes().await?;
            if !bytes.is_empty() {
                image = Some(UploadedAsset { file_name, bytes });
            }
        } else {
            let value = field.text().await?;
            form.set_field(&name, value);
        }
    }

    Ok((form, image))
}

#[utoipa::path(
    post,
    path = "/api/whatif",
    request_body = WhatIfRequest,
    responses(
        (status = 200, description = "Base and scenario scores", body = WhatIfResponse),
        (status = 400, description = "Invalid request")
    ),
    tag = "analysis"
)]
pub async fn what_if(payload: Result<Json<WhatIfRequest>, JsonRejection>) -> WebResult<Response> {
    let Json(payload) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;
    payload.validate()?;

    let response = services::what_if(&payload);

    Ok(Json(response).into_response())
}
