//! Application Configuration
//!
//! Where uploaded files live and how large they may be.

use std::path::PathBuf;

/// 10 MB
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// A multipart request may carry this many full-size files
pub const MAX_FILES_PER_REQUEST: u64 = 4;

#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Directory files are written to
    pub dir: PathBuf,
    /// URL path the directory is served under
    pub public_prefix: String,
    /// Per-file ceiling
    pub max_file_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("uploads"),
            public_prefix: "/uploads".to_string(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }
}

impl UploadConfig {
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    /// Body limit for the upload endpoint, leaving room for multipart framing
    pub fn max_request_bytes(&self) -> usize {
        let limit = self
            .max_file_bytes
            .saturating_mul(MAX_FILES_PER_REQUEST)
            .saturating_add(64 * 1024);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }

    pub fn max_file_mb(&self) -> u64 {
        self.max_file_bytes.div_ceil(1024 * 1024)
    }

    /// Public URL for a stored file name
    pub fn public_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.public_prefix.trim_end_matches('/'), file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UploadConfig::default();
        assert_eq!(config.max_file_bytes, 10_485_760);
        assert_eq!(config.max_file_mb(), 10);
        assert_eq!(config.public_url("abc.png"), "/uploads/abc.png");
    }

    #[test]
    fn test_request_limit_covers_several_files() {
        let config = UploadConfig::default();
        assert!(config.max_request_bytes() as u64 > config.max_file_bytes * 2);
    }

    #[test]
    fn test_prefix_trailing_slash() {
        let config = UploadConfig {
            public_prefix: "/media/".to_string(),
            ..UploadConfig::default()
        };
        assert_eq!(config.public_url("x.jpg"), "/media/x.jpg");
    }
}
