//! Reusable transaction templates ("quick adds").

use serde::{Deserialize, Serialize};

use crate::common::FlowKind;

/// A stored template that instantiates a transaction dated "today" when
/// applied. The kind is carried by the list it lives in, not the template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickAdd {
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
}

impl QuickAdd {
    pub fn new(category: impl Into<String>, description: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            amount,
        }
    }
}

/// The two per-kind template lists carried by a month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuickAddSets {
    #[serde(default)]
    pub expense: Vec<QuickAdd>,
    #[serde(default)]
    pub income: Vec<QuickAdd>,
}

impl QuickAddSets {
    pub fn list(&self, kind: FlowKind) -> &Vec<QuickAdd> {
        match kind {
            FlowKind::Expense => &self.expense,
            FlowKind::Income => &self.income,
        }
    }

    pub fn list_mut(&mut self, kind: FlowKind) -> &mut Vec<QuickAdd> {
        match kind {
            FlowKind::Expense => &mut self.expense,
            FlowKind::Income => &mut self.income,
        }
    }
}
