use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

#[async_trait]
pub trait StorageService: Send + Sync {
    /// Writes `data` under `filename`, replacing any previous file of that name.
    /// Returns the full path written.
    async fn save_file(&self, filename: &str, data: &[u8]) -> Result<PathBuf>;
    async fn health_check(&self) -> bool;
}

/// Stores uploads as plain files in a single local directory
pub struct LocalStorageService {
    root: PathBuf,
}

impl LocalStorageService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `filename` must already be sanitized to a single path component
    fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }
}

#[async_trait]
impl StorageService for LocalStorageService {
    async fn save_file(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
        // The directory may have been removed since startup
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("Failed to create storage directory {:?}", self.root))?;

        let path = self.path_for(filename);
        tokio::fs::write(&path, data)
            .await
            .with_context(|| format!("Failed to write upload to {:?}", path))?;
        Ok(path)
    }

    async fn health_check(&self) -> bool {
        if tokio::fs::create_dir_all(&self.root).await.is_err() {
            return false;
        }
        match tokio::fs::metadata(&self.root).await {
            Ok(meta) => meta.is_dir() && !meta.permissions().readonly(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorageService::new(dir.path().join("nested").join("data"));

        let path = storage.save_file("report.pdf", b"first").await.unwrap();
        assert_eq!(path, dir.path().join("nested").join("data").join("report.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"first");

        storage.save_file("report.pdf", b"second").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_health_check_creates_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("data");
        let storage = LocalStorageService::new(root.clone());
        assert!(storage.health_check().await);
        assert!(root.is_dir());
    }
}
