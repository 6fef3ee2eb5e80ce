//! Redesign pipeline and planner configuration

use serde::{Deserialize, Serialize};

/// Redesign pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedesignConfig {
    /// Instruction used in edit mode when the prompt is blank
    #[serde(default = "default_fallback_instruction")]
    pub fallback_instruction: String,
    /// Reject requests without an image instead of generating from text
    #[serde(default)]
    pub require_image: bool,
}

impl Default for RedesignConfig {
    fn default() -> Self {
        Self {
            fallback_instruction: default_fallback_instruction(),
            require_image: false,
        }
    }
}

/// Shopping-list planner settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Currency prices are quoted in
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Market whose stores are suggested
    #[serde(default = "default_market")]
    pub market: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            market: default_market(),
        }
    }
}

fn default_fallback_instruction() -> String {
    "Redesign the interior of this room, keeping its layout, windows and camera perspective"
        .to_string()
}

fn default_currency() -> String {
    "RUB".to_string()
}

fn default_market() -> String {
    "Russia".to_string()
}
