//! Core functionality for the Gateway
//!
//! Upload decoding, the redesign pipeline, the shopping-list planner and the
//! provider clients they call.

pub mod planner;
pub mod providers;
pub mod redesign;
pub mod traits;
pub mod types;
pub mod upload;
