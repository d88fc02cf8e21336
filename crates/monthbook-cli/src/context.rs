//! Wiring between the ledger store and the local data directory.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use monthbook_core::{CoreError, LedgerStore};
use monthbook_domain::{MonthKey, MonthState};
use monthbook_storage_json::JsonFileStore;

/// Environment variable overriding the data directory (used by tests).
pub const DATA_DIR_ENV: &str = "MONTHBOOK_DATA_DIR";

/// An opened ledger plus the active month it operates on.
///
/// The active month is whatever was last viewed, falling back to the current
/// calendar month on first run.
pub struct AppContext {
    store: LedgerStore<JsonFileStore>,
    month: MonthKey,
}

impl AppContext {
    pub fn open() -> Result<Self, CoreError> {
        let root = data_dir();
        tracing::debug!(root = %root.display(), "opening ledger");
        let storage = JsonFileStore::new(root)?;
        let store = LedgerStore::new(storage);
        let month = match store.last_month()? {
            Some(key) => key,
            None => MonthKey::from_date(today()),
        };
        Ok(Self { store, month })
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }

    /// Changes the active month and records it for the next session.
    pub fn set_month(&mut self, key: MonthKey) -> Result<(), CoreError> {
        self.month = key;
        self.store.set_last_month(key)
    }

    pub fn load(&self, key: MonthKey) -> Result<MonthState, CoreError> {
        self.store.load_month(key)
    }

    pub fn load_active(&self) -> Result<MonthState, CoreError> {
        self.load(self.month)
    }

    pub fn save_active(&self, state: &MonthState) -> Result<(), CoreError> {
        self.store.save_month(self.month, state)?;
        self.store.set_last_month(self.month)
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn data_dir() -> PathBuf {
    if let Some(custom) = std::env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(custom);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("monthbook")
}
