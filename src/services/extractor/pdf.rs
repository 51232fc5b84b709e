use async_trait::async_trait;
use lopdf::Document;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{ExtractError, ExtractResult, TextExtractor};

/// PDF text extractor backed by lopdf.
///
/// Pages are visited in page-number order and their text concatenated. A page
/// lopdf cannot decode contributes nothing instead of failing the whole file.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_blocking(path: &Path) -> ExtractResult<String> {
        let doc = Document::load(path).map_err(|e| ExtractError::Pdf(e.to_string()))?;
        let pages = doc.get_pages();

        let mut text = String::new();
        for &page_num in pages.keys() {
            match doc.extract_text(&[page_num]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => debug!("Page {} of {:?} yielded no text: {}", page_num, path, e),
            }
        }

        debug!(
            "Extracted {} chars from {} page(s) of {:?}",
            text.chars().count(),
            pages.len(),
            path
        );
        Ok(text)
    }
}

#[async_trait]
impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> ExtractResult<String> {
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::extract_blocking(&path)).await?
    }

    fn name(&self) -> &'static str {
        "lopdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_non_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        std::fs::write(&path, b"definitely not a pdf").unwrap();

        let result = PdfExtractor::new().extract(&path).await;
        assert!(matches!(result, Err(ExtractError::Pdf(_))));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = PdfExtractor::new()
            .extract(Path::new("/nonexistent/healthhero/report.pdf"))
            .await;
        assert!(result.is_err());
    }
}
