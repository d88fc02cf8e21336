//! Transaction mutation and the derived history view.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use monthbook_domain::{
    parse_amount, FlowKind, MonthState, Transaction, TransactionDraft, TransactionId,
};

/// Validated operations over a month's transaction list.
///
/// Mutations follow the ledger's quiet failure semantics: a rejected draft is
/// a no-op signalled through the return value, never an error.
pub struct TransactionService;

impl TransactionService {
    /// Prepends a transaction built from `draft`, dated `today` when the
    /// draft carries no date. Returns `None` without touching the state when
    /// the category is blank or the amount is empty or non-numeric.
    pub fn add(
        state: &mut MonthState,
        draft: &TransactionDraft,
        today: NaiveDate,
    ) -> Option<TransactionId> {
        if draft.category.trim().is_empty() {
            return None;
        }
        let amount = parse_amount(&draft.amount)?;
        let id = fresh_id(state);
        let txn = Transaction {
            id,
            kind: draft.kind,
            category: draft.category.clone(),
            description: draft.description.clone(),
            amount,
            date: draft.date.unwrap_or(today),
        };
        state.transactions.insert(0, txn);
        Some(id)
    }

    /// Removes the transaction with `id`. Returns `false` (no-op) when absent.
    pub fn remove(state: &mut MonthState, id: TransactionId) -> bool {
        let before = state.transactions.len();
        state.transactions.retain(|txn| txn.id != id);
        state.transactions.len() != before
    }

    /// Produces the filtered, sorted history view. Never mutates the state;
    /// ties keep insertion order (newest first) because the sort is stable.
    pub fn filter_sort(state: &MonthState, query: &TransactionQuery) -> Vec<Transaction> {
        let needle = query.search_text.trim().to_lowercase();
        let mut rows: Vec<Transaction> = state
            .transactions
            .iter()
            .filter(|txn| query.filter.matches(txn.kind))
            .filter(|txn| {
                needle.is_empty()
                    || txn.description.to_lowercase().contains(&needle)
                    || txn.category.to_lowercase().contains(&needle)
                    || txn.amount.to_string().contains(&needle)
            })
            .cloned()
            .collect();
        match query.sort_key {
            SortKey::Date => rows.sort_by(|a, b| b.date.cmp(&a.date)),
            SortKey::Amount => rows.sort_by(|a, b| {
                b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal)
            }),
            SortKey::Category => rows.sort_by(|a, b| a.category.cmp(&b.category)),
            SortKey::Description => rows.sort_by(|a, b| a.description.cmp(&b.description)),
        }
        rows
    }
}

/// A creation-time id, pushed past the month's newest id so two inserts in
/// the same millisecond stay distinct.
pub(crate) fn fresh_id(state: &MonthState) -> TransactionId {
    TransactionId::fresh_after(Utc::now().timestamp_millis(), state.max_transaction_id())
}

/// Ordering applied to the history view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first.
    #[default]
    Date,
    /// Largest first.
    Amount,
    /// Lexicographic ascending.
    Category,
    /// Lexicographic ascending.
    Description,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "amount" => Ok(SortKey::Amount),
            "category" => Ok(SortKey::Category),
            "description" => Ok(SortKey::Description),
            other => Err(format!("unknown sort key `{other}`")),
        }
    }
}

/// Restricts the history view to one flow kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowFilter {
    #[default]
    All,
    Expense,
    Income,
}

impl FlowFilter {
    pub fn matches(self, kind: FlowKind) -> bool {
        match self {
            FlowFilter::All => true,
            FlowFilter::Expense => kind == FlowKind::Expense,
            FlowFilter::Income => kind == FlowKind::Income,
        }
    }
}

impl FromStr for FlowFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FlowFilter::All),
            "expense" => Ok(FlowFilter::Expense),
            "income" => Ok(FlowFilter::Income),
            other => Err(format!("unknown filter `{other}`")),
        }
    }
}

/// Parameters for the derived history view.
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Case-insensitive substring match against description, category, and
    /// the amount's string form.
    pub search_text: String,
    pub sort_key: SortKey,
    pub filter: FlowFilter,
}
