//! monthbook-core
//!
//! Ledger store and services for per-month budget state.
//! Depends on monthbook-domain. No CLI, no terminal I/O; persistence goes
//! through the [`storage::KeyValueStore`] abstraction.

pub mod category_service;
pub mod error;
pub mod exchange;
pub mod quick_add_service;
pub mod storage;
pub mod store;
pub mod summary_service;
pub mod transaction_service;

pub use category_service::*;
pub use error::CoreError;
pub use exchange::*;
pub use quick_add_service::*;
pub use storage::*;
pub use store::*;
pub use summary_service::*;
pub use transaction_service::*;

#[cfg(test)]
mod tests;
