//! Mutation helpers for the per-kind category lists.

use monthbook_domain::{coerce_amount, Category, FlowKind, MonthState};

/// Index-addressed edits over a month's expense or income categories.
///
/// Out-of-range indices are quiet no-ops (`false`). Nothing here touches
/// transactions: renaming or removing a category intentionally orphans any
/// transaction still carrying the old name.
pub struct CategoryService;

impl CategoryService {
    /// Appends the placeholder category for `kind`.
    pub fn add(state: &mut MonthState, kind: FlowKind) {
        state.categories_mut(kind).push(Category::placeholder(kind));
    }

    /// Removes the category at `index`.
    pub fn remove(state: &mut MonthState, kind: FlowKind, index: usize) -> bool {
        let list = state.categories_mut(kind);
        if index < list.len() {
            list.remove(index);
            true
        } else {
            false
        }
    }

    pub fn set_name(state: &mut MonthState, kind: FlowKind, index: usize, name: &str) -> bool {
        match state.categories_mut(kind).get_mut(index) {
            Some(category) => {
                category.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Sets the budget from raw input; invalid input coerces to zero.
    pub fn set_budget(state: &mut MonthState, kind: FlowKind, index: usize, raw: &str) -> bool {
        match state.categories_mut(kind).get_mut(index) {
            Some(category) => {
                category.budget = coerce_amount(raw);
                true
            }
            None => false,
        }
    }
}
