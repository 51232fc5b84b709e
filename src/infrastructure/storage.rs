use crate::config::AnalyzerConfig;
use crate::services::storage::{LocalStorageService, StorageService};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn setup_storage(config: &AnalyzerConfig) -> Arc<dyn StorageService> {
    let storage = LocalStorageService::new(config.data_path.clone());

    info!("🗂️  Local Storage: {:?}", config.data_path);

    // Ensure directory exists
    if storage.health_check().await {
        info!("✅ Storage directory {:?} is ready", config.data_path);
    } else {
        warn!(
            "⚠️  Storage directory {:?} is not writable yet; uploads will retry creating it",
            config.data_path
        );
    }

    Arc::new(storage)
}
