//! Core trait definitions

pub mod provider;

pub use provider::{ImageProvider, TextProvider};
