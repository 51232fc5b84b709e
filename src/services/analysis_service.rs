use crate::api::error::AppError;
use crate::config::AnalyzerConfig;
use crate::models::{AnalysisOutcome, Upload};
use crate::services::extractor::{ExtractorKind, TextExtractor};
use crate::services::storage::StorageService;
use crate::services::summary::summarize;
use crate::utils::validation::{sanitize_filename, validate_file_size};
use std::sync::Arc;
use tracing::{info, warn};

/// Store an upload, route it to an extractor and summarize the result
pub struct AnalysisService {
    storage: Arc<dyn StorageService>,
    pdf_extractor: Arc<dyn TextExtractor>,
    image_extractor: Arc<dyn TextExtractor>,
    config: AnalyzerConfig,
}

impl AnalysisService {
    pub fn new(
        storage: Arc<dyn StorageService>,
        pdf_extractor: Arc<dyn TextExtractor>,
        image_extractor: Arc<dyn TextExtractor>,
        config: AnalyzerConfig,
    ) -> Self {
        Self {
            storage,
            pdf_extractor,
            image_extractor,
            config,
        }
    }

    fn extractor_for(&self, kind: ExtractorKind) -> &Arc<dyn TextExtractor> {
        match kind {
            ExtractorKind::Pdf => &self.pdf_extractor,
            ExtractorKind::Image => &self.image_extractor,
        }
    }

    pub async fn analyze(&self, upload: Upload) -> Result<AnalysisOutcome, AppError> {
        // 1. Validate
        validate_file_size(upload.data.len(), self.config.max_file_size)
            .map_err(|e| AppError::PayloadTooLarge(e.to_string()))?;
        let filename =
            sanitize_filename(&upload.filename).map_err(|e| AppError::BadRequest(e.to_string()))?;

        // 2. Route by name only; sniffing is informational
        let kind = ExtractorKind::for_filename(&filename);
        let sniffed = infer::get(&upload.data).map(|t| t.mime_type());
        match (kind, sniffed) {
            (ExtractorKind::Pdf, Some(mime)) if mime != "application/pdf" => {
                warn!("'{}' is routed as PDF but content looks like {}", filename, mime)
            }
            (ExtractorKind::Image, Some(mime)) if !mime.starts_with("image/") => {
                warn!("'{}' is routed to OCR but content looks like {}", filename, mime)
            }
            _ => {}
        }

        // 3. Persist
        let stored_path = self.storage.save_file(&filename, &upload.data).await?;
        info!(
            "💾 Stored '{}' ({} bytes) at {:?}",
            filename,
            upload.data.len(),
            stored_path
        );

        // 4. Extract
        let extractor = self.extractor_for(kind);
        let text = extractor.extract(&stored_path).await?;
        let extracted_chars = text.chars().count();
        info!(
            "📄 Extracted {} chars from '{}' via {}",
            extracted_chars,
            filename,
            extractor.name()
        );

        Ok(AnalysisOutcome {
            summary: summarize(&text, self.config.summary_length),
            extractor: kind,
            stored_path,
            extracted_chars,
        })
    }
}
