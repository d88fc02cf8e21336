//! Ledger transactions and their identifiers.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::FlowKind;

/// Creation-time identifier for a transaction, in epoch milliseconds.
///
/// Fresh ids come from the wall clock; [`TransactionId::fresh_after`] bumps
/// past an existing maximum so same-millisecond inserts stay unique within a
/// month.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct TransactionId(pub i64);

impl TransactionId {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns `now_millis` as an id, advanced past `max_existing` if needed.
    pub fn fresh_after(now_millis: i64, max_existing: Option<TransactionId>) -> Self {
        match max_existing {
            Some(TransactionId(max)) if max >= now_millis => Self(max + 1),
            _ => Self(now_millis),
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single dated ledger entry.
///
/// `category` is a plain string reference to a category name, deliberately
/// unenforced: an orphaned transaction keeps its original string and simply
/// stops contributing to any per-category total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: FlowKind,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// Unvalidated user input for a new transaction.
///
/// `amount` stays raw here; the transaction service decides whether the draft
/// is accepted at all.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: FlowKind,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub date: Option<NaiveDate>,
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self {
            kind: FlowKind::Expense,
            category: String::new(),
            description: String::new(),
            amount: String::new(),
            date: None,
        }
    }
}
