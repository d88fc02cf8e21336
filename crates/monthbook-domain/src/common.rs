//! Shared enums and numeric coercion rules for ledger entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Distinguishes money leaving the ledger from money entering it.
///
/// Doubles as the selector for the two independent category lists a month
/// carries, so a transaction's kind also names the list its category string
/// is expected (but never required) to reference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    Expense,
    Income,
}

impl FlowKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FlowKind::Expense => "expense",
            FlowKind::Income => "income",
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlowKind::Expense => "Expense",
            FlowKind::Income => "Income",
        };
        f.write_str(label)
    }
}

impl FromStr for FlowKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "expense" => Ok(FlowKind::Expense),
            "income" => Ok(FlowKind::Income),
            other => Err(format!("unknown flow kind `{other}`")),
        }
    }
}

/// Strictly parses a raw amount entry. Blank or non-numeric input is `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Leniently coerces a raw amount entry, falling back to zero.
///
/// Matches the write-time coercion rule for budgets and balances: invalid
/// input silently becomes `0.0` rather than an error.
pub fn coerce_amount(raw: &str) -> f64 {
    parse_amount(raw).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_kind_round_trips_through_lowercase_labels() {
        assert_eq!("expense".parse::<FlowKind>().unwrap(), FlowKind::Expense);
        assert_eq!(" Income ".parse::<FlowKind>().unwrap(), FlowKind::Income);
        assert!("transfer".parse::<FlowKind>().is_err());
        assert_eq!(FlowKind::Expense.as_str(), "expense");
    }

    #[test]
    fn parse_amount_rejects_blank_and_garbage() {
        assert_eq!(parse_amount("1184"), Some(1184.0));
        assert_eq!(parse_amount(" 12.50 "), Some(12.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn coerce_amount_defaults_to_zero() {
        assert_eq!(coerce_amount("250"), 250.0);
        assert_eq!(coerce_amount("oops"), 0.0);
        assert_eq!(coerce_amount(""), 0.0);
    }
}
