//! Instruction assembly

use super::phase::OperationMode;
use crate::utils::error::{GatewayError, Result};

/// Style and wishes rendered as one clause; blank fields count as missing
pub fn augmentation(style: Option<&str>, wishes: Option<&str>) -> Option<String> {
    let style = style.map(str::trim).filter(|s| !s.is_empty());
    let wishes = wishes.map(str::trim).filter(|s| !s.is_empty());

    match (style, wishes) {
        (Some(style), Some(wishes)) => Some(format!("{} interior, {}", style, wishes)),
        (Some(style), None) => Some(format!("{} interior", style)),
        (None, Some(wishes)) => Some(wishes.to_string()),
        (None, None) => None,
    }
}

/// Final provider prompt
///
/// A blank prompt falls back to `fallback` in edit mode and is rejected in
/// generate mode.
pub fn build_instruction(
    prompt: &str,
    style: Option<&str>,
    wishes: Option<&str>,
    mode: OperationMode,
    fallback: &str,
) -> Result<String> {
    let prompt = prompt.trim();
    let instruction = match (prompt.is_empty(), mode) {
        (false, _) => prompt,
        (true, OperationMode::Edit) => fallback.trim(),
        (true, OperationMode::Generate) => {
            return Err(GatewayError::missing_prompt(
                "A prompt is required when no image is uploaded",
            ));
        }
    };

    Ok(match augmentation(style, wishes) {
        Some(extra) => format!("{}. {}", instruction.trim_end_matches('.'), extra),
        None => instruction.to_string(),
    })
}
