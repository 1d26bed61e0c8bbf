use crate::utils::error::{AnalyzerError, Result};
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::time::Duration;

/// Content type of [`Metrics::render`] output.
pub const CONTENT_TYPE: &str = prometheus::TEXT_FORMAT;

const REQUESTS_TOTAL: &str = "http_requests_total";
const ERROR_TOTAL: &str = "http_error_total";
const REQUEST_DURATION: &str = "http_request_duration_seconds";

/// HTTP metrics registered on a caller-supplied [`Registry`]. Owned by the
/// server and handed to the router; nothing is registered globally.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    requests: IntCounterVec,
    errors: IntCounterVec,
    latency: HistogramVec,
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics").finish_non_exhaustive()
    }
}

impl Metrics {
    /// Metrics on a fresh registry.
    pub fn new() -> Result<Self> {
        Self::with_registry(Registry::new())
    }

    /// Registers the HTTP collectors on `registry`. Fails if they are already
    /// registered there.
    pub fn with_registry(registry: Registry) -> Result<Self> {
        let requests = IntCounterVec::new(
            Opts::new(REQUESTS_TOTAL, "Total HTTP requests"),
            &["method", "path"],
        )
        .map_err(registry_error)?;
        let errors = IntCounterVec::new(
            Opts::new(ERROR_TOTAL, "Total number of error responses"),
            &["method", "path", "status"],
        )
        .map_err(registry_error)?;
        let latency = HistogramVec::new(
            HistogramOpts::new(REQUEST_DURATION, "Histogram of request durations"),
            &["method", "path"],
        )
        .map_err(registry_error)?;

        registry
            .register(Box::new(requests.clone()))
            .map_err(registry_error)?;
        registry
            .register(Box::new(errors.clone()))
            .map_err(registry_error)?;
        registry
            .register(Box::new(latency.clone()))
            .map_err(registry_error)?;

        Ok(Self {
            registry,
            requests,
            errors,
            latency,
        })
    }

    pub fn observe(&self, method: &str, path: &str, status: u16, elapsed: Duration) {
        self.requests.with_label_values(&[method, path]).inc();
        self.latency
            .with_label_values(&[method, path])
            .observe(elapsed.as_secs_f64());

        if status >= 400 {
            let status = status.to_string();
            self.errors
                .with_label_values(&[method, path, status.as_str()])
                .inc();
        }
    }

    pub fn requests_total(&self, method: &str, path: &str) -> u64 {
        self.sample(&format!(
            "{}{{method=\"{}\",path=\"{}\"}}",
            REQUESTS_TOTAL, method, path
        ))
    }

    pub fn errors_total(&self, method: &str, path: &str, status: u16) -> u64 {
        self.sample(&format!(
            "{}{{method=\"{}\",path=\"{}\",status=\"{}\"}}",
            ERROR_TOTAL, method, path, status
        ))
    }

    /// Prometheus text exposition format of everything in the registry.
    pub fn render(&self) -> Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(registry_error)?;
        String::from_utf8(buffer)
            .map_err(|e| AnalyzerError::internal(format!("metrics output is not UTF-8: {}", e)))
    }

    /// Reads one series from the exposition output so lookups never create a
    /// series that was not observed.
    fn sample(&self, series: &str) -> u64 {
        self.render()
            .ok()
            .and_then(|text| {
                text.lines().find_map(|line| {
                    line.strip_prefix(series)?
                        .strip_prefix(' ')?
                        .trim()
                        .parse::<f64>()
                        .ok()
                })
            })
            .map_or(0, |value| value as u64)
    }
}

fn registry_error(e: prometheus::Error) -> AnalyzerError {
    AnalyzerError::internal(format!("metrics registry: {}", e))
}
