//! Ledger domain models: transaction records, categories, and budgets.

pub mod budget;
pub mod category;
pub mod common;
pub mod transaction;

pub use budget::Budget;
pub use category::Category;
pub use common::{LedgerView, NamedEntity};
pub use transaction::Transaction;
