//! The ledger store: owns persistence of whole-month state.

use monthbook_domain::{MonthKey, MonthState};
use tracing::{debug, warn};

use crate::{storage::KeyValueStore, CoreError};

/// Auxiliary key remembering the last-viewed month across sessions.
pub const LAST_MONTH_KEY: &str = "lastMonth";

/// Loads and saves [`MonthState`] snapshots through an injected
/// [`KeyValueStore`], one entry per month key.
///
/// Loading never fails on bad data: an absent or unparsable entry yields the
/// default seeded state, matching the "ignore and keep going" error posture
/// of the ledger. Saving always rewrites the whole state and is idempotent.
pub struct LedgerStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> LedgerStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn load_month(&self, key: MonthKey) -> Result<MonthState, CoreError> {
        let raw = self.storage.get(&key.to_string())?;
        let Some(raw) = raw else {
            debug!(%key, "no stored state, seeding defaults");
            return Ok(MonthState::with_defaults());
        };
        match serde_json::from_str(&raw) {
            Ok(state) => Ok(state),
            Err(err) => {
                warn!(%key, error = %err, "discarding unparsable month state");
                Ok(MonthState::with_defaults())
            }
        }
    }

    pub fn save_month(&self, key: MonthKey, state: &MonthState) -> Result<(), CoreError> {
        let json = serde_json::to_string(state).map_err(|err| CoreError::Serde(err.to_string()))?;
        self.storage.set(&key.to_string(), &json)?;
        debug!(%key, bytes = json.len(), "saved month state");
        Ok(())
    }

    /// The month the user last had open, if one was recorded and still parses.
    pub fn last_month(&self) -> Result<Option<MonthKey>, CoreError> {
        let Some(raw) = self.storage.get(LAST_MONTH_KEY)? else {
            return Ok(None);
        };
        match raw.parse() {
            Ok(key) => Ok(Some(key)),
            Err(err) => {
                warn!(error = %err, "ignoring unparsable last-month marker");
                Ok(None)
            }
        }
    }

    pub fn set_last_month(&self, key: MonthKey) -> Result<(), CoreError> {
        self.storage.set(LAST_MONTH_KEY, &key.to_string())
    }
}
