//! OpenAI Provider
//!
//! Image edits and generations plus JSON-mode text completions

pub mod client;
pub mod error;
pub mod images;
pub mod responses;

pub use client::OpenAIProvider;
pub use error::OpenAIError;
