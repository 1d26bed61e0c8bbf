// Adapters layer: concrete implementations for external systems (PDF library, local disk).

pub mod canned;
pub mod pdf;
pub mod staging;

pub use canned::CannedExtractor;
pub use pdf::PdfExtractor;
pub use staging::{StagedFile, StagingArea, UploadedFile};
