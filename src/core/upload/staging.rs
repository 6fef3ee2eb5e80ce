//! On-disk staging of uploaded file parts

use std::path::{Path, PathBuf};
use tempfile::TempPath;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

use crate::utils::error::{GatewayError, Result};

/// Directory that receives staged uploads
#[derive(Debug, Clone)]
pub struct StagingArea {
    dir: PathBuf,
}

impl StagingArea {
    /// Use `dir`, creating it if needed
    pub async fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            GatewayError::config(format!(
                "Cannot create staging directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Open a fresh file named `upload-<request_id>-<random>.<extension>`
    ///
    /// The create runs on the blocking pool.
    pub async fn create(&self, request_id: &Uuid, extension: &str) -> Result<StagingWriter> {
        let dir = self.dir.clone();
        let prefix = format!("upload-{}-", request_id);
        let suffix = format!(".{}", extension);

        let named = tokio::task::spawn_blocking(move || {
            tempfile::Builder::new()
                .prefix(&prefix)
                .suffix(&suffix)
                .rand_bytes(8)
                .tempfile_in(&dir)
        })
        .await
        .map_err(|e| GatewayError::internal(format!("Staging task failed: {}", e)))??;

        let (file, path) = named.into_parts();
        debug!(path = %path.display(), "Staging upload");

        Ok(StagingWriter {
            file: File::from_std(file),
            path,
            len: 0,
        })
    }
}

/// Open write handle for one staged file
///
/// Dropping it before [`StagingWriter::finish`] removes the file.
#[derive(Debug)]
pub struct StagingWriter {
    file: File,
    path: TempPath,
    len: u64,
}

impl StagingWriter {
    pub async fn write(&mut self, chunk: &[u8]) -> Result<()> {
        self.file.write_all(chunk).await?;
        self.len += chunk.len() as u64;
        Ok(())
    }

    /// Flush and close the handle, keeping the path alive
    pub async fn finish(mut self) -> Result<StagedFile> {
        self.file.flush().await?;
        self.file.sync_all().await?;
        drop(self.file);

        Ok(StagedFile {
            path: self.path,
            len: self.len,
        })
    }
}

/// A closed staged file, deleted on drop
#[derive(Debug)]
pub struct StagedFile {
    path: TempPath,
    len: u64,
}

impl StagedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
