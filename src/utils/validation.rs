use anyhow::{Result, anyhow};
use std::path::Path;

/// Maximum filename length in bytes accepted by most filesystems
const MAX_FILENAME_LEN: usize = 255;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub code: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates file size against maximum limit
pub fn validate_file_size(size: usize, max_size: usize) -> Result<()> {
    if size > max_size {
        return Err(anyhow!(ValidationError {
            code: "FILE_TOO_LARGE",
            message: format!(
                "File size {} bytes exceeds maximum allowed {} bytes ({} MB)",
                size,
                max_size,
                max_size / 1024 / 1024
            ),
        }));
    }
    Ok(())
}

/// Sanitizes an uploaded filename so it can be joined onto the storage directory.
/// Only the final path component survives; reserved and control characters become '_'.
pub fn sanitize_filename(filename: &str) -> Result<String> {
    // Normalise Windows separators first so `Path` strips them on every platform
    let normalized = filename.replace('\\', "/");
    let name = Path::new(&normalized)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    if name.is_empty() {
        return Err(anyhow!(ValidationError {
            code: "INVALID_FILENAME",
            message: "Filename cannot be empty".to_string(),
        }));
    }

    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        tracing::warn!("Path traversal attempt detected: {}", filename);
    }

    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_control()
                || c == ':'
                || c == '*'
                || c == '?'
                || c == '"'
                || c == '<'
                || c == '>'
                || c == '|'
            {
                '_'
            } else {
                c
            }
        })
        .collect();

    // Surrounding whitespace stays part of the stored name
    if sanitized.trim().is_empty() || sanitized.chars().all(|c| c == '_' || c == '.') {
        return Err(anyhow!(ValidationError {
            code: "INVALID_FILENAME",
            message: format!("Filename '{}' contains no usable characters", filename),
        }));
    }

    // Hidden files
    if sanitized.starts_with('.') {
        return Err(anyhow!(ValidationError {
            code: "HIDDEN_FILE",
            message: "Hidden files are not allowed".to_string(),
        }));
    }

    if sanitized.len() > MAX_FILENAME_LEN {
        return Err(anyhow!(ValidationError {
            code: "FILENAME_TOO_LONG",
            message: format!("Filename exceeds {} bytes", MAX_FILENAME_LEN),
        }));
    }

    Ok(sanitized)
}
