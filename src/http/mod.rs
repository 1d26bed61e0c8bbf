pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod state;

use crate::domain::context::RequestContext;
use crate::domain::ports::TextExtractor;
use crate::http::response::ApiError;
use crate::utils::metrics;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub use state::AppState;

/// Wires routes and middleware. `max_upload_bytes` bounds the request body of
/// `POST /analyze`.
pub fn build_router<E: TextExtractor + 'static>(
    state: AppState<E>,
    max_upload_bytes: usize,
) -> Router {
    let metrics = Arc::clone(&state.metrics);

    Router::new()
        .route(
            "/analyze",
            post(handlers::analyze::<E>)
                .fallback(handlers::method_not_allowed)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/health", get(handlers::health::<E>))
        .route("/metrics", get(metrics_handler::<E>))
        .route("/docs", get(docs::docs_page))
        .route("/docs/index.html", get(docs::docs_page))
        .route("/docs/openapi.json", get(docs::openapi_json))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::request_context))
        .layer(axum::middleware::from_fn_with_state(
            metrics,
            middleware::track_metrics,
        ))
}

/// Serves until `shutdown` resolves, then drains in-flight requests.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

async fn metrics_handler<E: TextExtractor + 'static>(
    State(state): State<AppState<E>>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<impl IntoResponse, ApiError> {
    let text = state
        .metrics
        .render()
        .map_err(|e| ApiError::from_error(&ctx, &e))?;

    Ok(([(header::CONTENT_TYPE, metrics::CONTENT_TYPE)], text))
}
