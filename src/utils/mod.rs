//! Utility modules for the gateway
//!
//! - **error**: the gateway error type and its HTTP rendering
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use logging::init_logging;
