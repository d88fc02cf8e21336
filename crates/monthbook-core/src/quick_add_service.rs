//! Quick-add templates: creation, deletion, and application.

use chrono::NaiveDate;
use monthbook_domain::{
    parse_amount, FlowKind, MonthState, QuickAdd, Transaction, TransactionId,
};

use crate::transaction_service::fresh_id;

/// Unvalidated user input for a new template.
#[derive(Debug, Clone, Default)]
pub struct QuickAddForm {
    pub category: String,
    pub description: String,
    pub amount: String,
}

/// Manages the month's reusable transaction templates.
pub struct QuickAddService;

impl QuickAddService {
    /// Stores a new template under `kind`. Rejects (returns `false`) on a
    /// blank category or unparsable amount; a blank description falls back
    /// to the category name.
    pub fn create(state: &mut MonthState, kind: FlowKind, form: &QuickAddForm) -> bool {
        if form.category.trim().is_empty() {
            return false;
        }
        let Some(amount) = parse_amount(&form.amount) else {
            return false;
        };
        let description = if form.description.trim().is_empty() {
            form.category.clone()
        } else {
            form.description.clone()
        };
        state
            .quick_adds
            .list_mut(kind)
            .push(QuickAdd::new(form.category.clone(), description, amount));
        true
    }

    /// Instantiates the template at `index` as a transaction dated `today`
    /// and prepends it. The matching category's budget is left untouched.
    pub fn apply(
        state: &mut MonthState,
        kind: FlowKind,
        index: usize,
        today: NaiveDate,
    ) -> Option<TransactionId> {
        let template = state.quick_adds.list(kind).get(index)?.clone();
        let id = fresh_id(state);
        state.transactions.insert(
            0,
            Transaction {
                id,
                kind,
                category: template.category,
                description: template.description,
                amount: template.amount,
                date: today,
            },
        );
        Some(id)
    }

    /// Removes the template at `index`. No-op when out of range.
    pub fn remove(state: &mut MonthState, kind: FlowKind, index: usize) -> bool {
        let list = state.quick_adds.list_mut(kind);
        if index < list.len() {
            list.remove(index);
            true
        } else {
            false
        }
    }
}
