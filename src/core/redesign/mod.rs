//! Image redesign pipeline

pub mod outcome;
pub mod phase;
pub mod pipeline;
pub mod prompt;
pub mod types;


pub use outcome::ProviderOutcome;
pub use phase::{OperationMode, RequestPhase};
pub use pipeline::RedesignPipeline;
pub use types::RedesignOutput;
