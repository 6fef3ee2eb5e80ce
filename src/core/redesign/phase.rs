//! Per-request lifecycle

use std::fmt;
use tracing::debug;

/// Operation chosen for an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Edit the first uploaded image
    Edit,
    /// Generate from text alone
    Generate,
}

impl OperationMode {
    /// Edit iff at least one non-empty attachment is present
    pub fn select(has_attachments: bool) -> Self {
        if has_attachments {
            Self::Edit
        } else {
            Self::Generate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Generate => "generate",
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a redesign request currently is
///
/// `Ingesting -> ModeSelected -> AwaitingProvider -> {Succeeded | TimedOut |
/// ProviderFailed | MalformedInput} -> Responded`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Ingesting,
    ModeSelected(OperationMode),
    AwaitingProvider,
    Succeeded,
    TimedOut,
    ProviderFailed,
    MalformedInput,
    Responded,
}

impl RequestPhase {
    /// Record the transition on the current span
    pub fn enter(self) -> Self {
        debug!(phase = %self, "Request phase");
        self
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Succeeded | Self::TimedOut | Self::ProviderFailed | Self::MalformedInput
        )
    }
}

impl fmt::Display for RequestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ingesting => f.write_str("ingesting"),
            Self::ModeSelected(mode) => write!(f, "mode_selected:{}", mode),
            Self::AwaitingProvider => f.write_str("awaiting_provider"),
            Self::Succeeded => f.write_str("succeeded"),
            Self::TimedOut => f.write_str("timed_out"),
            Self::ProviderFailed => f.write_str("provider_failed"),
            Self::MalformedInput => f.write_str("malformed_input"),
            Self::Responded => f.write_str("responded"),
        }
    }
}
