use bytes::Bytes;
use std::path::PathBuf;

use crate::services::extractor::ExtractorKind;

/// A single uploaded file as received from the client
#[derive(Debug, Clone)]
pub struct Upload {
    /// Filename as supplied by the client, before sanitization
    pub filename: String,
    pub data: Bytes,
}

impl Upload {
    pub fn new(filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub summary: String,
    pub extractor: ExtractorKind,
    pub stored_path: PathBuf,
    pub extracted_chars: usize,
}
