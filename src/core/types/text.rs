//! Text completion request types

/// Ask a text provider for a single JSON object
#[derive(Debug, Clone)]
pub struct JsonCompletionRequest {
    pub input: String,
}
