use crate::domain::ports::TextExtractor;
use crate::utils::error::{AnalyzerError, Result};
use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Test double that ignores the file and answers with a fixed outcome.
#[derive(Debug)]
pub struct CannedExtractor {
    outcome: std::result::Result<String, String>,
    calls: AtomicUsize,
}

impl CannedExtractor {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextExtractor for CannedExtractor {
    async fn extract_text(&self, _path: &Path) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map_err(AnalyzerError::extraction)
    }
}
