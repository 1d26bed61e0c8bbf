use crate::domain::context::RequestContext;
use crate::http::response::ApiError;
use crate::utils::metrics::Metrics;
use axum::extract::{MatchedPath, Request, State};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assigns a request id, logs the request and turns a panic in any inner
/// handler into a 500 envelope.
pub async fn request_context(mut req: Request, next: Next) -> Response {
    let ctx = RequestContext::new();
    req.extensions_mut().insert(ctx.clone());

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    tracing::info!(request_id = %ctx.request_id(), %method, %path, "Request received");

    let mut response = match AssertUnwindSafe(next.run(req)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            tracing::error!(
                request_id = %ctx.request_id(),
                panic = %panic_message(panic.as_ref()),
                "Handler panicked"
            );
            ApiError::new(
                &ctx,
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error",
            )
            .into_response()
        }
    };

    if let Ok(value) = HeaderValue::from_str(ctx.request_id()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    tracing::info!(
        request_id = %ctx.request_id(),
        %method,
        %path,
        status = response.status().as_u16(),
        duration_ms = started.elapsed().as_millis() as u64,
        "Request completed"
    );

    response
}

/// Records count, errors and latency per method and route template.
pub async fn track_metrics(
    State(metrics): State<Arc<Metrics>>,
    req: Request,
    next: Next,
) -> Response {
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let method = req.method().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    metrics.observe(&method, &path, response.status().as_u16(), started.elapsed());
    response
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
