//! Upstream provider implementations
//!
//! Every provider maps its failures onto the shared [`ProviderError`].

pub mod openai;
pub mod unified_provider;

pub use openai::OpenAIProvider;
pub use unified_provider::ProviderError;
