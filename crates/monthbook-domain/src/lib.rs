//! monthbook-domain
//!
//! Pure data model for per-month budget ledgers (MonthState, Category,
//! Transaction, QuickAdd). No I/O, no storage. Only data types, the month
//! key, and amount coercion helpers.

pub mod category;
pub mod common;
pub mod month;
pub mod quick_add;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use month::*;
pub use quick_add::*;
pub use transaction::*;
