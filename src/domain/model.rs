use crate::utils::error::{AnalyzerError, Result};
use serde::Serialize;

/// Outcome of analyzing one uploaded document.
///
/// Only constructed through [`AnalysisResult::new`], so a value in hand always
/// satisfies the invariants: extracted content is not empty. The word count is
/// unsigned and therefore never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    content: String,
    word_count: usize,
}

impl AnalysisResult {
    pub fn new(content: String, word_count: usize) -> Result<Self> {
        if content.is_empty() {
            return Err(AnalyzerError::validation("analysis content cannot be empty"));
        }

        Ok(Self {
            content,
            word_count,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }
}
