//! Budget categories and the default seed lists.

use serde::{Deserialize, Serialize};

use crate::common::FlowKind;

/// A named budget bucket with an assigned monthly amount.
///
/// Names are *not* validated for uniqueness, and transactions reference them
/// by string only. Renaming or deleting a category orphans its prior
/// transactions rather than cascading to them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub budget: f64,
}

impl Category {
    pub fn new(name: impl Into<String>, budget: f64) -> Self {
        Self {
            name: name.into(),
            budget,
        }
    }

    /// The unnamed category appended by "add category" actions.
    pub fn placeholder(kind: FlowKind) -> Self {
        let name = match kind {
            FlowKind::Expense => "New Expense",
            FlowKind::Income => "New Income",
        };
        Self::new(name, 0.0)
    }
}

/// The expense categories seeded into a freshly created month.
pub fn default_expense_categories() -> Vec<Category> {
    [
        ("Groceries/Store", 300.0),
        ("Rent", 1184.0),
        ("Electricity", 250.0),
        ("Gas", 200.0),
        ("Dates & Eating Out", 50.0),
        ("Subscriptions", 46.0),
        ("Tithe", 80.0),
        ("Shopping/Wants", 50.0),
        ("Savings", 0.0),
        ("Unexpected Health", 150.0),
        ("Insurance", 0.0),
        ("Gift/Birthday/Holiday", 50.0),
        ("Other Purchases", 0.0),
    ]
    .into_iter()
    .map(|(name, budget)| Category::new(name, budget))
    .collect()
}

/// The income categories seeded into a freshly created month.
pub fn default_income_categories() -> Vec<Category> {
    [
        ("GSA", 0.0),
        ("Intramurals", 0.0),
        ("Bank Interest", 0.0),
        ("Gifts", 0.0),
        ("Other", 0.0),
    ]
    .into_iter()
    .map(|(name, budget)| Category::new(name, budget))
    .collect()
}
