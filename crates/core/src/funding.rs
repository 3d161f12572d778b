//! Funding rules: investment limits, tokenization parameters and progress.

use crate::error::CoreError;
use crate::types::Amount;

/// Smallest investment accepted, in USDC.
pub const MIN_INVESTMENT: Amount = 100.0;

/// Tokens issued per USD of funding goal.
pub const TOKENS_PER_USD: f64 = 1.0;

/// Prefix for minted project token symbols.
pub const TOKEN_SYMBOL_PREFIX: &str = "SLR";

/// Validate a project funding goal: finite and strictly positive.
pub fn validate_funding_goal(goal: Amount) -> Result<(), CoreError> {
    if !goal.is_finite() || goal <= 0.0 {
        return Err(CoreError::Validation(format!(
            "Funding goal must be a positive number (got {goal})"
        )));
    }
    Ok(())
}

/// Validate an investor's amount before it reaches the ledger.
pub fn validate_investment_amount(amount: Amount) -> Result<(), CoreError> {
    if !amount.is_finite() {
        return Err(CoreError::Validation(
            "Investment amount must be a number".into(),
        ));
    }
    if amount < MIN_INVESTMENT {
        return Err(CoreError::Validation(format!(
            "Minimum investment is {MIN_INVESTMENT} USDC (got {amount})"
        )));
    }
    Ok(())
}

/// Token symbol minted for a project: `SLR-` plus the last four characters
/// of its id, uppercased.
pub fn token_symbol_for(project_id: &str) -> String {
    let chars: Vec<char> = project_id.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{TOKEN_SYMBOL_PREFIX}-{}", tail.to_uppercase())
}

/// Token supply minted for a project with the given goal.
pub fn token_supply_for(goal: Amount) -> u64 {
    (goal * TOKENS_PER_USD).round().max(0.0) as u64
}

/// Tokens an investor receives for `amount`.
pub fn estimated_tokens(amount: Amount) -> f64 {
    amount * TOKENS_PER_USD
}

/// Amount still needed to reach the goal, never negative.
pub fn remaining_to_goal(current: Amount, goal: Amount) -> Amount {
    (goal - current).max(0.0)
}

/// Funding progress as a percentage clamped to `0..=100`.
pub fn progress_percent(current: Amount, goal: Amount) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (current / goal * 100.0).clamp(0.0, 100.0)
}
