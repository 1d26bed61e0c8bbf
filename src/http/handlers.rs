use crate::adapters::staging::UploadedFile;
use crate::domain::context::RequestContext;
use crate::domain::ports::TextExtractor;
use crate::http::response::{success, ApiError, SuccessBody};
use crate::http::state::AppState;
use crate::utils::error::{AnalyzerError, Result};
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use serde::Serialize;

/// Multipart field that carries the PDF.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct AnalyzeData {
    pub file: String,
    pub word_count: usize,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: &'static str,
    pub version: &'static str,
    pub started_at: String,
    pub uptime_seconds: i64,
}

/// `POST /analyze`
///
/// Received -> Staged -> Analyzed -> Responded. The staged file is discarded
/// before the response leaves, whatever the analysis outcome; on a panic the
/// guard's `Drop` removes it instead.
pub async fn analyze<E: TextExtractor + 'static>(
    State(state): State<AppState<E>>,
    Extension(ctx): Extension<RequestContext>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> std::result::Result<Json<SuccessBody<AnalyzeData>>, ApiError> {
    let UploadedFile { file_name, data } = read_upload(multipart)
        .await
        .map_err(|e| ApiError::from_error(&ctx, &e))?;

    let staged = state
        .staging
        .stage(&ctx, &file_name, data)
        .await
        .map_err(|e| ApiError::from_error(&ctx, &e))?;

    let outcome = state.service.analyze(&ctx, staged.path()).await;
    staged.discard();

    let result = outcome.map_err(|e| ApiError::from_error(&ctx, &e))?;

    Ok(success(
        &ctx,
        AnalyzeData {
            file: file_name,
            word_count: result.word_count(),
            status: "completed",
        },
    ))
}

async fn read_upload(
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<UploadedFile> {
    let mut multipart = multipart.map_err(|e| AnalyzerError::bad_request(e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AnalyzerError::bad_request(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| {
                AnalyzerError::bad_request(format!("form field '{}' must be a file", UPLOAD_FIELD))
            })?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AnalyzerError::bad_request(e.to_string()))?;

        if data.is_empty() {
            return Err(AnalyzerError::bad_request("uploaded file is empty"));
        }

        return Ok(UploadedFile {
            file_name,
            data: Vec::from(data),
        });
    }

    Err(AnalyzerError::bad_request(format!(
        "missing form field '{}'",
        UPLOAD_FIELD
    )))
}

/// `GET /health`
pub async fn health<E: TextExtractor + 'static>(
    State(state): State<AppState<E>>,
    Extension(ctx): Extension<RequestContext>,
) -> Json<SuccessBody<HealthData>> {
    let uptime = Utc::now().signed_duration_since(state.started_at);

    success(
        &ctx,
        HealthData {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            started_at: state.started_at.to_rfc3339(),
            uptime_seconds: uptime.num_seconds(),
        },
    )
}

/// Any method other than `POST` on `/analyze`.
pub async fn method_not_allowed(Extension(ctx): Extension<RequestContext>) -> ApiError {
    ApiError::new(&ctx, StatusCode::METHOD_NOT_ALLOWED, "Use POST /analyze")
}

/// Fallback for unknown routes.
pub async fn not_found(Extension(ctx): Extension<RequestContext>) -> ApiError {
    ApiError::new(&ctx, StatusCode::NOT_FOUND, "route not found")
}
