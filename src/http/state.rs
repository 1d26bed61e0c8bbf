use crate::adapters::staging::StagingArea;
use crate::core::analysis::AnalysisService;
use crate::domain::ports::TextExtractor;
use crate::utils::metrics::Metrics;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Everything a handler needs, shared across requests.
pub struct AppState<E: TextExtractor> {
    pub service: Arc<AnalysisService<E>>,
    pub staging: Arc<StagingArea>,
    pub metrics: Arc<Metrics>,
    pub started_at: DateTime<Utc>,
}

impl<E: TextExtractor> AppState<E> {
    pub fn new(extractor: E, staging: StagingArea, metrics: Arc<Metrics>) -> Self {
        Self {
            service: Arc::new(AnalysisService::new(extractor)),
            staging: Arc::new(staging),
            metrics,
            started_at: Utc::now(),
        }
    }
}

impl<E: TextExtractor> Clone for AppState<E> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            staging: Arc::clone(&self.staging),
            metrics: Arc::clone(&self.metrics),
            started_at: self.started_at,
        }
    }
}
