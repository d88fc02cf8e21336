//! JSON export and merge-on-import of month state documents.

use monthbook_domain::{Category, MonthKey, MonthState, QuickAddSets, Transaction};
use serde::Deserialize;

use crate::CoreError;

/// Suggested file name for an exported month document.
pub fn export_file_name(key: MonthKey) -> String {
    format!("{key}-budget.json")
}

/// Serializes the whole month to a pretty-printed document.
pub fn export_month(state: &MonthState) -> Result<String, CoreError> {
    serde_json::to_string_pretty(state).map_err(|err| CoreError::Serde(err.to_string()))
}

/// Partial month document: only the fields present participate in a merge.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MonthPatch {
    expenses: Option<Vec<Category>>,
    income: Option<Vec<Category>>,
    transactions: Option<Vec<Transaction>>,
    beginning_balance: Option<f64>,
    quick_adds: Option<QuickAddSets>,
}

/// Parses `document` and merges the fields it carries into `state`, leaving
/// absent fields untouched. A parse failure is surfaced to the caller and
/// leaves the state exactly as it was.
pub fn import_month(state: &mut MonthState, document: &str) -> Result<(), CoreError> {
    let patch: MonthPatch =
        serde_json::from_str(document).map_err(|err| CoreError::Serde(err.to_string()))?;
    if let Some(expenses) = patch.expenses {
        state.expenses = expenses;
    }
    if let Some(income) = patch.income {
        state.income = income;
    }
    if let Some(transactions) = patch.transactions {
        state.transactions = transactions;
    }
    if let Some(balance) = patch.beginning_balance {
        state.beginning_balance = balance;
    }
    if let Some(quick_adds) = patch.quick_adds {
        state.quick_adds = quick_adds;
    }
    Ok(())
}
