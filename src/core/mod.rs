pub mod analysis;
pub mod word_count;

pub use crate::domain::model::AnalysisResult;
pub use crate::domain::ports::TextExtractor;
pub use crate::utils::error::Result;
