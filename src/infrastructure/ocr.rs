use crate::config::AnalyzerConfig;
use crate::services::ocr::OcrEngine;
use std::sync::Arc;
use tracing::info;

pub async fn setup_ocr(config: &AnalyzerConfig) -> Arc<dyn OcrEngine> {
    let engine = crate::services::ocr::create_ocr_engine(&config.ocr_engine, &config.ocr_language);

    // Probe the engine once so a missing binary shows up at startup
    if engine.health_check().await {
        info!(
            "🔤 OCR engine '{}' ready (language: {})",
            engine.name(),
            config.ocr_language
        );
    } else {
        tracing::warn!(
            "⚠️  OCR engine '{}' unreachable! Image uploads will fail until it is installed.",
            engine.name()
        );
    }

    engine.into()
}
