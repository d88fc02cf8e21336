//! Month keys and the aggregate per-month ledger state.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::category::{default_expense_categories, default_income_categories, Category};
use crate::common::FlowKind;
use crate::quick_add::QuickAddSets;
use crate::transaction::Transaction;

/// Identifies one independent budget period and its storage partition,
/// rendered as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Steps the key by whole months. Arithmetic is pinned to day 1, so
    /// navigating from a 31-day month can never skip its neighbour.
    pub fn offset(&self, months: i32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 + months;
        Self {
            year: index.div_euclid(12),
            month: (index.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // month is validated on construction, so day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid month key `{value}`, expected YYYY-MM");
        let (year_part, month_part) = value.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        MonthKey::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// The aggregate persisted unit: everything one month owns.
///
/// Serialised field names match the historical on-disk format
/// (`beginningBalance`, `quickAdds`), and every field tolerates absence so
/// partial or hand-edited documents still load. Absent category lists fall
/// back to the seed lists; the remaining fields fall back to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthState {
    #[serde(default = "default_expense_categories")]
    pub expenses: Vec<Category>,
    #[serde(default = "default_income_categories")]
    pub income: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub beginning_balance: f64,
    #[serde(default)]
    pub quick_adds: QuickAddSets,
}

impl MonthState {
    /// The state a month starts with the first time its key is accessed.
    pub fn with_defaults() -> Self {
        Self {
            expenses: default_expense_categories(),
            income: default_income_categories(),
            transactions: Vec::new(),
            beginning_balance: 0.0,
            quick_adds: QuickAddSets::default(),
        }
    }

    pub fn categories(&self, kind: FlowKind) -> &Vec<Category> {
        match kind {
            FlowKind::Expense => &self.expenses,
            FlowKind::Income => &self.income,
        }
    }

    pub fn categories_mut(&mut self, kind: FlowKind) -> &mut Vec<Category> {
        match kind {
            FlowKind::Expense => &mut self.expenses,
            FlowKind::Income => &mut self.income,
        }
    }

    pub fn max_transaction_id(&self) -> Option<crate::transaction::TransactionId> {
        self.transactions.iter().map(|txn| txn.id).max()
    }
}
