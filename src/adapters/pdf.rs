use crate::domain::ports::TextExtractor;
use crate::utils::error::{AnalyzerError, Result};
use async_trait::async_trait;
use std::path::Path;

/// [`TextExtractor`] backed by the `pdf-extract` crate.
///
/// Parsing is CPU bound and synchronous, so it runs on the blocking pool. A
/// panic inside the parser is reported as an extraction failure.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for PdfExtractor {
    async fn extract_text(&self, path: &Path) -> Result<String> {
        let owned = path.to_path_buf();

        let joined = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text(&owned).map_err(|e| e.to_string())
        })
        .await;

        match joined {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(message)) => Err(AnalyzerError::extraction(message)),
            Err(e) if e.is_panic() => Err(AnalyzerError::extraction(format!(
                "PDF parser panicked while reading {}",
                path.display()
            ))),
            Err(e) => Err(AnalyzerError::internal(format!(
                "extraction task failed: {}",
                e
            ))),
        }
    }
}
