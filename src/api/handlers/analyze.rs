use crate::api::error::AppError;
use crate::models::Upload;
use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

/// Multipart body accepted by `/analyze`
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeRequest {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub summary: String,
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    let err_msg = e.to_string();
    if err_msg.contains("length limit exceeded") {
        AppError::PayloadTooLarge("Request body exceeds the maximum allowed limit".to_string())
    } else {
        AppError::BadRequest(err_msg)
    }
}

#[utoipa::path(
    post,
    path = "/analyze",
    request_body(content = AnalyzeRequest, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Text extracted and summarized", body = AnalyzeResponse),
        (status = 400, description = "Malformed upload or unusable filename"),
        (status = 413, description = "Upload too large"),
        (status = 422, description = "No file field in the request"),
        (status = 500, description = "Storage or extraction failure")
    ),
    tag = "analysis"
)]
pub async fn analyze(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "file" {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await.map_err(multipart_error)?;
            upload = Some(Upload::new(filename, data));
        }
    }

    let upload = upload
        .ok_or_else(|| AppError::UnprocessableEntity("Missing multipart field 'file'".to_string()))?;

    info!(
        "📎 Received '{}' ({} bytes)",
        upload.filename,
        upload.data.len()
    );

    let outcome = state.analysis.analyze(upload).await?;

    Ok(Json(AnalyzeResponse {
        summary: outcome.summary,
    }))
}
