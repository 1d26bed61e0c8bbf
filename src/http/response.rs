use crate::domain::context::RequestContext;
use crate::utils::error::AnalyzerError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SuccessBody<T> {
    pub success: bool,
    pub data: T,
    pub request_id: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub request_id: String,
}

pub fn success<T: Serialize>(ctx: &RequestContext, data: T) -> Json<SuccessBody<T>> {
    Json(SuccessBody {
        success: true,
        data,
        request_id: ctx.request_id().to_string(),
    })
}

/// Error envelope returned by every handler. This is the only place where
/// [`AnalyzerError`] kinds turn into HTTP status codes.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    request_id: String,
}

impl ApiError {
    pub fn new(ctx: &RequestContext, status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            request_id: ctx.request_id().to_string(),
        }
    }

    pub fn from_error(ctx: &RequestContext, err: &AnalyzerError) -> Self {
        let status = status_for(err);
        if status.is_server_error() {
            tracing::error!(request_id = %ctx.request_id(), error = %err, "Request failed");
        } else {
            tracing::warn!(request_id = %ctx.request_id(), error = %err, "Request rejected");
        }
        Self::new(ctx, status, err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.message,
            request_id: self.request_id,
        };
        (self.status, Json(body)).into_response()
    }
}

pub fn status_for(err: &AnalyzerError) -> StatusCode {
    match err {
        AnalyzerError::BadRequest { .. } | AnalyzerError::InvalidInput { .. } => {
            StatusCode::BAD_REQUEST
        }
        AnalyzerError::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        AnalyzerError::StagingError { .. }
        | AnalyzerError::ExtractionError { .. }
        | AnalyzerError::InternalError { .. }
        | AnalyzerError::IoError(_)
        | AnalyzerError::ConfigError { .. }
        | AnalyzerError::InvalidConfigValueError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
