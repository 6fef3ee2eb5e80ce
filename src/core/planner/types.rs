//! Planner request and shopping-list types

use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::error::{GatewayError, Result};

/// Body of `POST /api/plan`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanRequest {
    /// Free-text design description
    #[serde(default)]
    pub prompt: String,
    /// Budget as the client phrased it
    #[serde(default, deserialize_with = "lenient_text")]
    pub budget: Option<String>,
}

impl PlanRequest {
    /// Parse a raw body; an empty body is treated as `{}`
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
            .map_err(|e| GatewayError::invalid_request(format!("Invalid JSON body: {}", e)))
    }
}

/// One line of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    #[serde(deserialize_with = "lenient_number")]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(deserialize_with = "lenient_number")]
    pub unit_price: f64,
    #[serde(default)]
    pub store: String,
}

impl ShoppingItem {
    pub fn cost(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Success body of `POST /api/plan`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub items: Vec<ShoppingItem>,
    pub total_cost: f64,
}

/// Shopping list as the model wrote it, total possibly missing
#[derive(Debug, Deserialize)]
pub(crate) struct RawShoppingList {
    pub items: Vec<ShoppingItem>,
    #[serde(default, deserialize_with = "lenient_optional_number")]
    pub total_cost: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Parse `"1 500,50 ₽"` style numbers
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(text) => parse_number(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("'{}' is not a number", text))),
    }
}

fn lenient_optional_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(text)) => parse_number(&text),
        None => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) => Some(n.to_string()),
        Some(NumberOrText::Text(text)) => Some(text),
        None => None,
    })
}
