//! Defensive parsing of model-written shopping lists

use super::types::{RawShoppingList, ShoppingList};
use crate::utils::error::{GatewayError, Result};

/// Remove a surrounding markdown code fence, with or without a language tag
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().trim_end_matches("```").trim()
}

/// Outermost `{ ... }` span, for answers wrapped in prose
fn json_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

pub fn parse_shopping_list(text: &str) -> Result<ShoppingList> {
    let body = strip_code_fences(text);
    if body.is_empty() {
        return Err(GatewayError::invalid_provider_output("Completion was empty"));
    }

    let raw: RawShoppingList = match serde_json::from_str(body) {
        Ok(raw) => raw,
        Err(first_error) => json_object_span(body)
            .and_then(|span| serde_json::from_str(span).ok())
            .ok_or_else(|| {
                GatewayError::invalid_provider_output(format!(
                    "Completion is not a shopping list: {}",
                    first_error
                ))
            })?,
    };

    let total_cost = match raw.total_cost {
        Some(total) => total,
        None => round_cents(raw.items.iter().map(|item| item.cost()).sum()),
    };

    Ok(ShoppingList {
        items: raw.items,
        total_cost,
    })
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
