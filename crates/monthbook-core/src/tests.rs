use chrono::NaiveDate;

use crate::{
    exchange, CategoryService, KeyValueStore, LedgerStore, MemoryStore, QuickAddForm,
    QuickAddService, SummaryService, TransactionService,
};
use monthbook_domain::{FlowKind, MonthKey, MonthState, TransactionDraft};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

fn key(raw: &str) -> MonthKey {
    raw.parse().unwrap()
}

#[test]
fn a_full_user_session_round_trips_through_storage() {
    let backend = MemoryStore::new();
    let store = LedgerStore::new(backend.clone());
    let march = key("2024-03");

    let mut state = store.load_month(march).unwrap();
    state.beginning_balance = 500.0;
    TransactionService::add(
        &mut state,
        &TransactionDraft {
            kind: FlowKind::Expense,
            category: "Rent".into(),
            description: "March rent".into(),
            amount: "1184".into(),
            date: None,
        },
        today(),
    )
    .unwrap();
    QuickAddService::create(
        &mut state,
        FlowKind::Income,
        &QuickAddForm {
            category: "GSA".into(),
            description: String::new(),
            amount: "900".into(),
        },
    );
    QuickAddService::apply(&mut state, FlowKind::Income, 0, today()).unwrap();
    store.save_month(march, &state).unwrap();
    store.set_last_month(march).unwrap();

    // a later session against the same backend
    let reopened = LedgerStore::new(backend);
    assert_eq!(reopened.last_month().unwrap(), Some(march));
    let reloaded = reopened.load_month(march).unwrap();
    assert_eq!(reloaded, state);

    let totals = SummaryService::totals(&reloaded);
    assert_eq!(totals.total_expenses, 1184.0);
    assert_eq!(totals.total_income, 900.0);
    assert_eq!(totals.current_balance, 500.0 + 900.0 - 1184.0);
    assert_eq!(totals.per_category_spent["Rent"], 1184.0);
    assert_eq!(totals.per_category_received["GSA"], 900.0);
}

#[test]
fn months_are_independent_partitions() {
    let store = LedgerStore::new(MemoryStore::new());
    let january = key("2024-01");
    let february = key("2024-02");

    let mut state = store.load_month(january).unwrap();
    state.beginning_balance = 42.0;
    store.save_month(january, &state).unwrap();

    let other = store.load_month(february).unwrap();
    assert_eq!(other, MonthState::with_defaults());
}

#[test]
fn deleting_a_category_orphans_but_keeps_the_grand_total() {
    let mut state = MonthState::with_defaults();
    TransactionService::add(
        &mut state,
        &TransactionDraft {
            kind: FlowKind::Expense,
            category: "Subscriptions".into(),
            amount: "46".into(),
            ..TransactionDraft::default()
        },
        today(),
    )
    .unwrap();
    let index = state
        .expenses
        .iter()
        .position(|category| category.name == "Subscriptions")
        .unwrap();
    CategoryService::remove(&mut state, FlowKind::Expense, index);

    let totals = SummaryService::totals(&state);
    assert_eq!(totals.total_expenses, 46.0);
    assert!(!totals.per_category_spent.contains_key("Subscriptions"));
    assert_eq!(state.transactions[0].category, "Subscriptions");
}

#[test]
fn exported_document_reimports_into_an_identical_month() {
    let mut state = MonthState::with_defaults();
    TransactionService::add(
        &mut state,
        &TransactionDraft {
            kind: FlowKind::Income,
            category: "Gifts".into(),
            description: "Birthday".into(),
            amount: "50".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 2),
        },
        today(),
    )
    .unwrap();
    state.beginning_balance = -12.25;

    let document = exchange::export_month(&state).unwrap();
    let mut imported = MonthState::with_defaults();
    exchange::import_month(&mut imported, &document).unwrap();
    assert_eq!(imported, state);
}

#[test]
fn partial_documents_load_with_seeded_category_lists() {
    // hand-edited state missing both lists gets the seeds back, while the
    // field that is present survives
    let backend = MemoryStore::new();
    backend.set("2024-01", r#"{"beginningBalance": 5}"#).unwrap();
    let store = LedgerStore::new(backend);
    let state = store.load_month(key("2024-01")).unwrap();
    assert_eq!(state.beginning_balance, 5.0);
    assert!(!state.expenses.is_empty());
    assert!(!state.income.is_empty());
    assert_eq!(state.expenses, MonthState::with_defaults().expenses);
}

#[test]
fn historical_documents_still_parse() {
    // shape written by the original page: numeric ids, `type`, camelCase keys
    let raw = r#"{
        "expenses": [{"name": "Rent", "budget": 1184}],
        "income": [{"name": "GSA", "budget": 0}],
        "transactions": [
            {"id": 1704441600000, "type": "expense", "category": "Rent",
             "description": "", "amount": 1184, "date": "2024-01-05"}
        ],
        "beginningBalance": 0,
        "quickAdds": {"expense": [], "income": []}
    }"#;
    let backend = MemoryStore::new();
    backend.set("2024-01", raw).unwrap();
    let store = LedgerStore::new(backend);
    let state = store.load_month(key("2024-01")).unwrap();
    assert_eq!(state.transactions.len(), 1);
    let totals = SummaryService::totals(&state);
    assert_eq!(totals.current_balance, -1184.0);
    assert_eq!(totals.per_category_spent["Rent"], 1184.0);
}
