use image::DynamicImage;
use rusty_tesseract::{Args, Image};
use tracing::warn;

use crate::services::extractor::{ExtractError, ExtractResult};

/// Trait for optical character recognition backends
#[async_trait::async_trait]
pub trait OcrEngine: Send + Sync {
    /// Recognize text in a decoded image. Called from the blocking thread pool.
    fn recognize(&self, image: &DynamicImage) -> ExtractResult<String>;

    /// Check if the engine is available/healthy
    async fn health_check(&self) -> bool;

    fn name(&self) -> &'static str;
}

/// Tesseract OCR via the system `tesseract` binary
///
/// Debian/Ubuntu:
/// ```bash
/// apt-get install tesseract-ocr tesseract-ocr-eng
/// ```
pub struct TesseractOcrEngine {
    language: String,
}

impl TesseractOcrEngine {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

#[async_trait::async_trait]
impl OcrEngine for TesseractOcrEngine {
    fn recognize(&self, image: &DynamicImage) -> ExtractResult<String> {
        let tess_image =
            Image::from_dynamic_image(image).map_err(|e| ExtractError::Ocr(e.to_string()))?;

        let args = Args {
            lang: self.language.clone(),
            ..Args::default()
        };

        rusty_tesseract::image_to_string(&tess_image, &args)
            .map_err(|e| ExtractError::Ocr(e.to_string()))
    }

    async fn health_check(&self) -> bool {
        match tokio::task::spawn_blocking(rusty_tesseract::get_tesseract_version).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                warn!("Tesseract health check failed: {}", e);
                false
            }
            Err(_) => false,
        }
    }

    fn name(&self) -> &'static str {
        "tesseract"
    }
}

/// No-op engine that recognizes nothing (for development/testing)
pub struct NoOpOcrEngine;

#[async_trait::async_trait]
impl OcrEngine for NoOpOcrEngine {
    fn recognize(&self, _image: &DynamicImage) -> ExtractResult<String> {
        Ok(String::new())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}

/// Create an OCR engine from its configured type
pub fn create_ocr_engine(engine_type: &str, language: &str) -> Box<dyn OcrEngine> {
    match engine_type {
        "noop" | "none" | "disabled" => Box::new(NoOpOcrEngine),
        "tesseract" => Box::new(TesseractOcrEngine::new(language)),
        other => {
            warn!("Unknown OCR engine '{}', falling back to tesseract", other);
            Box::new(TesseractOcrEngine::new(language))
        }
    }
}
