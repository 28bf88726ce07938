use anyhow::{anyhow, Result};

use crate::model::budget::BudgetField;
use crate::model::checklist::Period;

const BUDGET_KEYS: [(&str, BudgetField); 8] = [
    ("income", BudgetField::MonthlyIncome),
    ("grocery", BudgetField::GrocerySpending),
    ("utilities", BudgetField::UtilitiesSpending),
    ("activities", BudgetField::ActivitiesSpending),
    ("goal", BudgetField::MonthlySavingsGoal),
    ("savings", BudgetField::SavingsAmount),
    ("debit", BudgetField::DebitAccountAmount),
    ("credit", BudgetField::CreditAmount),
];

/// Resolves an exact key or an unambiguous prefix of one.
pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    let key = key.to_lowercase();

    // 1. Exact match
    if candidates.iter().any(|c| c.to_lowercase() == key) {
        return Ok(key);
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|c| c.to_lowercase().starts_with(&key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_lowercase()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

pub fn budget_field_names() -> Vec<&'static str> {
    BUDGET_KEYS.iter().map(|(name, _)| *name).collect()
}

/// `inc` -> `MonthlyIncome`, `cr` -> `CreditAmount`, ...
pub fn parse_budget_field(input: &str) -> Result<BudgetField> {
    let name = expand_key(input, &budget_field_names())?;
    BUDGET_KEYS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, field)| *field)
        .ok_or_else(|| anyhow!("Unknown budget field: '{}'", input))
}

/// Accepts a 1-based day number or a day label prefix (`mon`, `Thu`).
pub fn parse_day(input: &str, period: &Period) -> Result<usize> {
    if let Ok(n) = input.parse::<usize>() {
        if (1..=period.groups().len()).contains(&n) {
            return Ok(n - 1);
        }
        return Err(anyhow!("Day must be between 1 and {}", period.groups().len()));
    }

    let labels: Vec<&str> = period.groups().iter().map(|g| g.label.as_str()).collect();
    let label = expand_key(input, &labels)?;
    labels
        .iter()
        .position(|l| l.to_lowercase() == label)
        .ok_or_else(|| anyhow!("Unknown day: '{}'", input))
}

/// 1-based item number from the command line to a 0-based index.
pub fn parse_position(input: &str) -> Result<usize> {
    match input.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(anyhow!("Expected a position starting at 1, got '{}'", input)),
    }
}
