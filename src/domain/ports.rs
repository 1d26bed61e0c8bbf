use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Turns a document on disk into plain text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, path: &Path) -> Result<String>;
}
