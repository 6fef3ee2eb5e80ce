//! Redesign output contract

use serde::{Deserialize, Serialize};

/// Success body of `/api/redesign`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedesignOutput {
    pub ok: bool,
    /// `data:` URL for inline payloads, the provider's URL otherwise
    pub image: String,
}

impl RedesignOutput {
    pub fn success(image: impl Into<String>) -> Self {
        Self {
            ok: true,
            image: image.into(),
        }
    }
}
