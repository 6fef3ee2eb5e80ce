//! # redesign-gateway
//!
//! HTTP service that redesigns interior photos with an image model and turns
//! design descriptions into priced shopping lists.
//!
//! ## Endpoints
//!
//! - `POST /api/redesign`: multipart upload (`prompt`, `style`, `wishes`,
//!   `image`) answered with `{ "ok": true, "image": "<data URL or URL>" }`
//! - `POST /api/plan`: `{ "prompt", "budget" }` answered with
//!   `{ "items": [...], "total_cost": n }`
//! - `GET /health`
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use redesign_gateway::{Config, server::ServerBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/gateway.yaml").await?;
//!     ServerBuilder::new().with_config(config).build().await?.start().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::planner::{PlanRequest, ShoppingItem, ShoppingList};
pub use core::providers::{OpenAIProvider, ProviderError};
pub use core::redesign::RedesignOutput;
pub use core::traits::{ImageProvider, TextProvider};
pub use utils::error::{ErrorResponse, GatewayError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: env!("BUILD_TIME"),
        git_hash: env!("GIT_HASH"),
    }
}
