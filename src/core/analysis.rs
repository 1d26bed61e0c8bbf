use crate::core::word_count::count_words;
use crate::domain::context::RequestContext;
use crate::domain::model::AnalysisResult;
use crate::domain::ports::TextExtractor;
use crate::utils::error::Result;
use crate::utils::validation::validate_input_path;
use std::path::Path;
use std::time::Instant;

/// Extract, count, validate. One attempt per call, no retries.
pub struct AnalysisService<E: TextExtractor> {
    extractor: E,
}

impl<E: TextExtractor> AnalysisService<E> {
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    pub async fn analyze(&self, ctx: &RequestContext, path: &Path) -> Result<AnalysisResult> {
        validate_input_path("file_path", path)?;

        let started = Instant::now();
        tracing::debug!(
            request_id = %ctx.request_id(),
            path = %path.display(),
            "Extracting text"
        );

        let content = self.extractor.extract_text(path).await.map_err(|e| {
            tracing::warn!(request_id = %ctx.request_id(), error = %e, "Extraction failed");
            e
        })?;

        let word_count = count_words(&content);
        let result = AnalysisResult::new(content, word_count)?;

        tracing::info!(
            request_id = %ctx.request_id(),
            word_count,
            chars = result.content().chars().count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Analysis completed"
        );

        Ok(result)
    }
}
