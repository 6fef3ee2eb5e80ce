//! Multipart decoding into an [`UploadRequest`]

use actix_multipart::{Field, Multipart};
use futures::StreamExt;
use std::path::Path;
use tracing::{debug, warn};
use uuid::Uuid;

use super::staging::StagingArea;
use super::types::{Attachment, UploadRequest};
use crate::config::models::upload::UploadConfig;
use crate::utils::error::{GatewayError, Result};

const IMAGE_FIELD: &str = "image";
const OCTET_STREAM: &str = "application/octet-stream";

/// Decodes multipart bodies, staging image parts to disk
#[derive(Debug, Clone)]
pub struct UploadIngestor {
    config: UploadConfig,
    staging: StagingArea,
}

impl UploadIngestor {
    pub async fn new(config: &UploadConfig) -> Result<Self> {
        let staging = StagingArea::new(config.staging_dir()).await?;
        Ok(Self {
            config: config.clone(),
            staging,
        })
    }

    pub fn staging_dir(&self) -> &Path {
        self.staging.dir()
    }

    /// Consume the whole multipart stream
    ///
    /// On failure every file staged so far is removed with the partial request.
    pub async fn ingest(&self, mut payload: Multipart, request_id: Uuid) -> Result<UploadRequest> {
        let mut request = UploadRequest::default();
        let mut budget = ByteBudget::new(self.config.max_total_bytes);

        while let Some(item) = payload.next().await {
            let mut field = item?;

            let name = field.name().unwrap_or_default().to_string();
            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_string);

            match name.as_str() {
                IMAGE_FIELD => {
                    if let Some(attachment) = self
                        .stage_image(&mut field, filename.as_deref(), request_id, &mut budget)
                        .await?
                    {
                        if request.attachments.len() >= self.config.max_attachments {
                            return Err(GatewayError::payload_too_large(format!(
                                "At most {} images are accepted",
                                self.config.max_attachments
                            )));
                        }
                        request.attachments.push(attachment);
                    }
                }
                "prompt" | "style" | "wishes" if filename.is_none() => {
                    let value = self.read_text(&mut field, &name, &mut budget).await?;
                    match name.as_str() {
                        "prompt" => request.prompt = value,
                        "style" => request.style = Some(value),
                        _ => request.wishes = Some(value),
                    }
                }
                _ => {
                    debug!(field = %name, "Skipping unknown multipart field");
                    drain(&mut field, &mut budget).await?;
                }
            }
        }

        debug!(
            attachments = request.attachments.len(),
            staged_bytes = request.staged_bytes(),
            "Upload decoded"
        );
        Ok(request)
    }

    async fn read_text(
        &self,
        field: &mut Field,
        name: &str,
        budget: &mut ByteBudget,
    ) -> Result<String> {
        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            budget.consume(chunk.len())?;
            if data.len() + chunk.len() > self.config.max_field_bytes {
                return Err(GatewayError::payload_too_large(format!(
                    "Field '{}' exceeds {} bytes",
                    name, self.config.max_field_bytes
                )));
            }
            data.extend_from_slice(&chunk);
        }

        String::from_utf8(data).map_err(|_| {
            GatewayError::malformed_upload(format!("Field '{}' is not valid UTF-8", name))
        })
    }

    /// Stream one image part to disk; zero-length parts yield `None`
    async fn stage_image(
        &self,
        field: &mut Field,
        filename: Option<&str>,
        request_id: Uuid,
        budget: &mut ByteBudget,
    ) -> Result<Option<Attachment>> {
        let declared = field.content_type().map(|mime| mime.essence_str().to_string());
        let (filename, mime_type) = resolve_metadata(filename, declared.as_deref());
        let extension = Path::new(&filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("bin")
            .to_ascii_lowercase();

        let mut writer = self.staging.create(&request_id, &extension).await?;
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            budget.consume(chunk.len())?;
            writer.write(&chunk).await?;
        }

        let staged = writer.finish().await?;
        if staged.is_empty() {
            debug!(filename = %filename, "Discarding empty file part");
            return Ok(None);
        }

        if !mime_type.starts_with("image/") {
            warn!(filename = %filename, mime_type = %mime_type, "Image part has a non-image type");
        }

        Ok(Some(Attachment::new(filename, mime_type, staged)))
    }
}

async fn drain(field: &mut Field, budget: &mut ByteBudget) -> Result<()> {
    while let Some(chunk) = field.next().await {
        budget.consume(chunk?.len())?;
    }
    Ok(())
}

/// Running total of multipart bytes against the request limit
#[derive(Debug)]
struct ByteBudget {
    limit: usize,
    used: usize,
}

impl ByteBudget {
    fn new(limit: usize) -> Self {
        Self { limit, used: 0 }
    }

    fn consume(&mut self, bytes: usize) -> Result<()> {
        self.used = self.used.saturating_add(bytes);
        if self.used > self.limit {
            return Err(GatewayError::payload_too_large(format!(
                "Upload exceeds {} bytes",
                self.limit
            )));
        }
        Ok(())
    }
}

/// Settle the filename and content type of a file part
///
/// Keeps a client filename only when it has an extension, otherwise names the
/// file `upload.<ext>` after its content type. A missing or generic content
/// type is guessed from the filename.
pub fn resolve_metadata(filename: Option<&str>, declared: Option<&str>) -> (String, String) {
    let filename = filename
        .map(base_name)
        .filter(|name| has_extension(name))
        .map(str::to_string);

    let declared = declared
        .map(str::trim)
        .filter(|mime| !mime.is_empty() && !mime.eq_ignore_ascii_case(OCTET_STREAM))
        .map(str::to_ascii_lowercase);

    let mime_type = declared
        .or_else(|| {
            filename
                .as_deref()
                .and_then(|name| mime_guess::from_path(name).first())
                .map(|mime| mime.essence_str().to_string())
        })
        .unwrap_or_else(|| OCTET_STREAM.to_string());

    let filename = filename.unwrap_or_else(|| format!("upload.{}", extension_for(&mime_type)));

    (filename, mime_type)
}

/// Strip any client-side directory components
fn base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name).trim()
}

fn has_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| !ext.is_empty())
}

fn extension_for(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" | "image/jpg" | "image/pjpeg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        other => mime_guess::get_mime_extensions_str(other)
            .and_then(|exts| exts.first().copied())
            .unwrap_or("bin"),
    }
}
