//! Text extraction from stored uploads.
//!
//! Uploads are routed purely by filename: anything ending in `.pdf` goes to
//! [`PdfExtractor`], everything else to [`ImageExtractor`].

mod image;
mod pdf;

pub use self::image::ImageExtractor;
pub use self::pdf::PdfExtractor;

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    #[error("Image decode error: {0}")]
    Image(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type ExtractResult<T> = Result<T, ExtractError>;

/// Which extractor handles an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorKind {
    Pdf,
    Image,
}

impl ExtractorKind {
    /// Exact, case-sensitive `.pdf` suffix match
    pub fn for_filename(filename: &str) -> Self {
        if filename.ends_with(".pdf") {
            Self::Pdf
        } else {
            Self::Image
        }
    }
}

/// Converts a stored file into plain text
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> ExtractResult<String>;

    fn name(&self) -> &'static str;
}
