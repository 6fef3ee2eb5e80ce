//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod gateway;
pub mod logging;
pub mod provider;
pub mod redesign;
pub mod server;
pub mod upload;

// Re-export all configuration types
pub use gateway::*;
pub use logging::*;
pub use provider::*;
pub use redesign::*;
pub use server::*;
pub use upload::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default maximum JSON body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default provider timeout in seconds
pub fn default_provider_timeout() -> u64 {
    90
}

/// Default maximum total upload size in bytes
pub fn default_max_upload_bytes() -> usize {
    15 * 1024 * 1024 // 15MB
}
