use async_trait::async_trait;
use image::ImageReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use super::{ExtractError, ExtractResult, TextExtractor};
use crate::services::ocr::OcrEngine;

/// Image text extractor: decodes the file and hands it to an OCR engine.
pub struct ImageExtractor {
    engine: Arc<dyn OcrEngine>,
}

impl ImageExtractor {
    pub fn new(engine: Arc<dyn OcrEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl TextExtractor for ImageExtractor {
    async fn extract(&self, path: &Path) -> ExtractResult<String> {
        let path: PathBuf = path.to_path_buf();
        let engine = self.engine.clone();

        tokio::task::spawn_blocking(move || {
            // Format comes from the content, not the extension
            let img = ImageReader::open(&path)?
                .with_guessed_format()?
                .decode()
                .map_err(|e| ExtractError::Image(e.to_string()))?;

            debug!(
                "Running {} OCR on {:?} ({}x{})",
                engine.name(),
                path,
                img.width(),
                img.height()
            );
            engine.recognize(&img)
        })
        .await?
    }

    fn name(&self) -> &'static str {
        "ocr"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ocr::NoOpOcrEngine;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    struct FixedOcr(&'static str);

    #[async_trait]
    impl OcrEngine for FixedOcr {
        fn recognize(&self, _image: &DynamicImage) -> ExtractResult<String> {
            Ok(self.0.to_string())
        }

        async fn health_check(&self) -> bool {
            true
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn write_png(path: &Path) {
        let img = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        std::fs::write(path, buf.into_inner()).unwrap();
    }

    #[tokio::test]
    async fn test_passes_decoded_image_to_engine() {
        let dir = tempfile::tempdir().unwrap();
        // Misleading extension: decoding must sniff the content
        let path = dir.path().join("scan.jpg");
        write_png(&path);

        let extractor = ImageExtractor::new(Arc::new(FixedOcr("Hemoglobin 13.5 g/dL")));
        assert_eq!(extractor.extract(&path).await.unwrap(), "Hemoglobin 13.5 g/dL");
    }

    #[tokio::test]
    async fn test_blank_image_yields_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.png");
        write_png(&path);

        let extractor = ImageExtractor::new(Arc::new(NoOpOcrEngine));
        assert_eq!(extractor.extract(&path).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_undecodable_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"plain text is not an image").unwrap();

        let extractor = ImageExtractor::new(Arc::new(NoOpOcrEngine));
        assert!(matches!(
            extractor.extract(&path).await,
            Err(ExtractError::Image(_))
        ));
    }
}
