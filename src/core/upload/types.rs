//! Decoded upload types

use bytes::Bytes;
use std::path::Path;

use super::staging::StagedFile;
use crate::core::types::ImageInput;
use crate::utils::error::Result;

/// A decoded multipart request
///
/// Owns its attachments; dropping it removes every staged file.
#[derive(Debug, Default)]
pub struct UploadRequest {
    /// Main instruction, empty when the field was absent
    pub prompt: String,
    pub style: Option<String>,
    pub wishes: Option<String>,
    /// Non-empty image parts in upload order
    pub attachments: Vec<Attachment>,
}

impl UploadRequest {
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Total bytes staged on disk for this request
    pub fn staged_bytes(&self) -> u64 {
        self.attachments.iter().map(Attachment::len).sum()
    }
}

/// An uploaded image, staged on disk
#[derive(Debug)]
pub struct Attachment {
    /// Original filename, always carrying an extension
    pub filename: String,
    pub mime_type: String,
    staged: StagedFile,
}

impl Attachment {
    pub(crate) fn new(filename: String, mime_type: String, staged: StagedFile) -> Self {
        Self {
            filename,
            mime_type,
            staged,
        }
    }

    pub fn len(&self) -> u64 {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.len() == 0
    }

    /// Location of the staged bytes
    pub fn path(&self) -> &Path {
        self.staged.path()
    }

    /// Read the staged bytes back
    pub async fn bytes(&self) -> Result<Bytes> {
        let data = tokio::fs::read(self.staged.path()).await?;
        Ok(Bytes::from(data))
    }

    /// Provider input carrying the original metadata
    pub async fn to_image_input(&self) -> Result<ImageInput> {
        Ok(ImageInput {
            bytes: self.bytes().await?,
            filename: self.filename.clone(),
            mime_type: self.mime_type.clone(),
        })
    }
}
