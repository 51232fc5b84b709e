use std::env;
use std::path::PathBuf;

use crate::services::summary::DEFAULT_SUMMARY_LENGTH;

/// Runtime configuration for the analyzer service
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Directory uploads are written to (default: "../data")
    pub data_path: PathBuf,

    /// Maximum upload size in bytes (default: 50 MB)
    pub max_file_size: usize,

    /// Number of characters returned as the summary (default: 800)
    pub summary_length: usize,

    /// OCR engine type: "tesseract" or "noop" (default: "tesseract")
    pub ocr_engine: String,

    /// Tesseract language code (default: "eng")
    pub ocr_language: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("../data"),
            max_file_size: 50 * 1024 * 1024, // 50 MB
            summary_length: DEFAULT_SUMMARY_LENGTH,
            ocr_engine: "tesseract".to_string(),
            ocr_language: "eng".to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            data_path: env::var("DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(default.data_path),

            max_file_size: env::var("MAX_FILE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_file_size),

            summary_length: env::var("SUMMARY_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(default.summary_length),

            ocr_engine: env::var("OCR_ENGINE")
                .map(|v| v.trim().to_lowercase())
                .unwrap_or(default.ocr_engine),

            ocr_language: env::var("OCR_LANGUAGE").unwrap_or(default.ocr_language),
        }
    }

    /// Create config for local development (no OCR binary required)
    pub fn development() -> Self {
        Self {
            ocr_engine: "noop".to_string(),
            ..Self::default()
        }
    }
}
