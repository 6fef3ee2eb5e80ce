//! Upload ingestion configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bounds and staging location for multipart uploads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Upper bound on all multipart bytes of one request
    #[serde(default = "default_max_upload_bytes")]
    pub max_total_bytes: usize,
    /// Maximum number of image parts
    #[serde(default = "default_max_attachments")]
    pub max_attachments: usize,
    /// Upper bound on a single text field
    #[serde(default = "default_max_field_bytes")]
    pub max_field_bytes: usize,
    /// Directory for staged attachments (defaults to the OS temp dir)
    #[serde(default)]
    pub staging_dir: Option<PathBuf>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_total_bytes: default_max_upload_bytes(),
            max_attachments: default_max_attachments(),
            max_field_bytes: default_max_field_bytes(),
            staging_dir: None,
        }
    }
}

impl UploadConfig {
    /// Resolved staging directory
    pub fn staging_dir(&self) -> PathBuf {
        self.staging_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }
}

fn default_max_attachments() -> usize {
    4
}

fn default_max_field_bytes() -> usize {
    16 * 1024
}
