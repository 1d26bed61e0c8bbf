pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

pub use adapters::{CannedExtractor, PdfExtractor, StagingArea};
pub use config::{AppEnv, CliArgs, ServerConfig};
pub use core::{analysis::AnalysisService, word_count::count_words};
pub use domain::{context::RequestContext, model::AnalysisResult, ports::TextExtractor};
pub use http::{build_router, serve, AppState};
pub use utils::error::{AnalyzerError, Result};
pub use utils::metrics::Metrics;
