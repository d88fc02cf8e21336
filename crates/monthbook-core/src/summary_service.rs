//! Pure derivations: totals and per-category activity.

use std::collections::BTreeMap;

use monthbook_domain::{FlowKind, MonthState};

/// Derived totals for one month, always recomputed from the authoritative
/// state and never cached.
///
/// The per-category maps are keyed by the *live* category names at call
/// time, so a rename immediately orphans the contributions of earlier
/// transactions that still carry the old string.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTotals {
    pub total_expenses: f64,
    pub total_income: f64,
    pub current_balance: f64,
    pub per_category_spent: BTreeMap<String, f64>,
    pub per_category_received: BTreeMap<String, f64>,
}

/// One display row for a category table: its budget next to what actually
/// moved through it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub name: String,
    pub budget: f64,
    pub actual: f64,
}

/// Aggregation helpers over a month's transactions.
pub struct SummaryService;

impl SummaryService {
    pub fn totals(state: &MonthState) -> MonthTotals {
        let total_expenses = Self::flow_total(state, FlowKind::Expense);
        let total_income = Self::flow_total(state, FlowKind::Income);
        MonthTotals {
            total_expenses,
            total_income,
            current_balance: state.beginning_balance + total_income - total_expenses,
            per_category_spent: Self::per_category(state, FlowKind::Expense),
            per_category_received: Self::per_category(state, FlowKind::Income),
        }
    }

    /// Per-category rows in list order, for rendering a budget table.
    pub fn category_rows(state: &MonthState, kind: FlowKind) -> Vec<CategoryRow> {
        state
            .categories(kind)
            .iter()
            .map(|category| CategoryRow {
                name: category.name.clone(),
                budget: category.budget,
                actual: Self::category_actual(state, kind, &category.name),
            })
            .collect()
    }

    fn flow_total(state: &MonthState, kind: FlowKind) -> f64 {
        state
            .transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .map(|txn| txn.amount)
            .sum()
    }

    fn per_category(state: &MonthState, kind: FlowKind) -> BTreeMap<String, f64> {
        state
            .categories(kind)
            .iter()
            .map(|category| {
                (
                    category.name.clone(),
                    Self::category_actual(state, kind, &category.name),
                )
            })
            .collect()
    }

    fn category_actual(state: &MonthState, kind: FlowKind, name: &str) -> f64 {
        state
            .transactions
            .iter()
            .filter(|txn| txn.kind == kind && txn.category == name)
            .map(|txn| txn.amount)
            .sum()
    }
}
