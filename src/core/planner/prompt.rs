//! Planning prompt

use crate::config::models::redesign::PlannerConfig;

const RESPONSE_SHAPE: &str = r#"{"items":[{"name","quantity","unit","unit_price","store"}],"total_cost"}"#;

/// Prompt asking for a priced shopping list as a single JSON object
pub fn build_plan_prompt(design: &str, budget: Option<&str>, config: &PlannerConfig) -> String {
    let budget = budget
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .unwrap_or("не указан");

    format!(
        "На основе дизайна: {design}. Бюджет: {budget}. \
         Составь подробный список материалов и мебели с примерными объемами и ориентировочными ценами \
         (валюта: {currency}), используя популярные магазины (рынок: {market}). \
         Числа указывай без единиц измерения и валюты. \
         Ответ верни в JSON формате {shape}.",
        design = design.trim(),
        budget = budget,
        currency = config.currency,
        market = config.market,
        shape = RESPONSE_SHAPE,
    )
}
