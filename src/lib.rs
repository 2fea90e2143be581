#![doc(test(attr(deny(warnings))))]

//! Budget Ledger offers named spending categories with append-only ledgers,
//! plain-text category summaries, and a vertical bar chart of relative spending.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod utils;

pub use errors::LedgerError;
pub use ledger::{Budget, Category, Transaction};
pub use report::{create_spend_chart, SpendChart};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Ledger tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
