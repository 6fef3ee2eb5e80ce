//! Provider-neutral request and response types

pub mod image;
pub mod text;

pub use image::{ImageData, ImageEditRequest, ImageGenerationRequest, ImageInput, ImageResponse};
pub use text::JsonCompletionRequest;
