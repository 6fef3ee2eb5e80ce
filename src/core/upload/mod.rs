//! Upload ingestion
//!
//! Decodes `multipart/form-data` bodies into an [`UploadRequest`], streaming
//! image parts to a staging directory.

pub mod ingest;
pub mod staging;
pub mod types;


pub use ingest::UploadIngestor;
pub use staging::{StagedFile, StagingArea};
pub use types::{Attachment, UploadRequest};
