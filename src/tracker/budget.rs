//! Weekly food budget check
//!
//! The budget is entered as free text, parsed the way a browser's `parseFloat`
//! would read it, and compared against a fixed limit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default weekly food budget limit
pub const DEFAULT_BUDGET_LIMIT: f64 = 18000.0;

/// Default currency symbol used in budget messages
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₦";

/// Colour of the budget status message
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusColor {
    red,
    green,
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusColor::red => f.write_str("red"),
            StatusColor::green => f.write_str("green"),
        }
    }
}

/// Result of comparing a budget amount against the limit
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetOutcome {
    /// Not a number, or not strictly positive
    Invalid,
    /// Over the limit by `over`
    Exceeded { amount: f64, over: f64 },
    /// At or under the limit
    WithinLimit { amount: f64 },
}

/// Evaluated status: outcome plus the message and colour to show
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub outcome: BudgetOutcome,
    pub message: String,
    pub color: StatusColor,
}

impl BudgetStatus {
    /// Whether the input was a usable amount (and so may be persisted)
    pub fn is_valid(&self) -> bool {
        !matches!(self.outcome, BudgetOutcome::Invalid)
    }
}

/// Compares budget input against a configured limit
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetChecker {
    limit: f64,
    currency: String,
}

impl Default for BudgetChecker {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET_LIMIT, DEFAULT_CURRENCY_SYMBOL)
    }
}

impl BudgetChecker {
    pub fn new(limit: f64, currency: impl Into<String>) -> Self {
        Self {
            limit,
            currency: currency.into(),
        }
    }

    /// Evaluate raw budget input
    ///
    /// # Arguments
    /// * `input` - Text as typed by the user
    ///
    /// # Returns
    /// The outcome with its user-facing message. An amount exactly at the
    /// limit counts as within it.
    pub fn check(&self, input: &str) -> BudgetStatus {
        let amount = match parse_float_prefix(input) {
            Some(amount) if amount > 0.0 => amount,
            _ => {
                return BudgetStatus {
                    outcome: BudgetOutcome::Invalid,
                    message: "Please enter a valid budget amount.".to_string(),
                    color: StatusColor::red,
                };
            }
        };

        let limit = format_amount(self.limit);
        if amount > self.limit {
            let over = amount - self.limit;
            BudgetStatus {
                outcome: BudgetOutcome::Exceeded { amount, over },
                message: format!(
                    "You have exceeded the {cur}{limit} food budget limit by {cur}{}.",
                    format_amount(over),
                    cur = self.currency,
                ),
                color: StatusColor::red,
            }
        } else {
            BudgetStatus {
                outcome: BudgetOutcome::WithinLimit { amount },
                message: format!(
                    "Good job! Your food budget of {cur}{} is within the {cur}{limit} limit.",
                    format_amount(amount),
                    cur = self.currency,
                ),
                color: StatusColor::green,
            }
        }
    }
}

/// Parse the longest leading decimal number, ignoring leading whitespace
///
/// Mirrors `parseFloat`: `"20000abc"` reads as 20000, `"Infinity"` as +inf,
/// and input without a numeric prefix yields `None`.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        let sign = if s.starts_with('-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Format an amount with thousands separators and at most three decimals
///
/// `2000.0` becomes `"2,000"`, `0.010000000000218` becomes `"0.01"`.
pub fn format_amount(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
