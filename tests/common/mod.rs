//! Common test utilities for redesign-gateway
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{fixtures::MultipartBody, providers::StubImageProvider};
//!
//! let dir = tempfile::TempDir::new().unwrap();
//! let image = StubImageProvider::inline(b"png");
//! let state = common::app_state(&dir, image, StubTextProvider::json("{}"), |_| {}).await;
//! ```

pub mod fixtures;

use redesign_gateway::Config;
use redesign_gateway::server::AppState;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub use fixtures::MultipartBody;
pub use providers::{ImageReply, StubImageProvider, StubTextProvider, TextReply};

/// App state staging into `dir`, with scripted providers
pub async fn app_state(
    dir: &TempDir,
    image: Arc<StubImageProvider>,
    text: Arc<StubTextProvider>,
    configure: impl FnOnce(&mut Config),
) -> AppState {
    let mut config = Config::default();
    config.gateway.upload.staging_dir = Some(dir.path().to_path_buf());
    config.gateway.provider.timeout_seconds = 5;
    configure(&mut config);

    AppState::new(config, image, text)
        .await
        .expect("app state")
}

/// Number of entries left in a staging directory
pub fn staged_files(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}
