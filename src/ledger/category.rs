use std::fmt;

use tracing::{debug, trace};

use super::{
    common::{LedgerView, NamedEntity},
    transaction::Transaction,
};
use crate::{config::ReportSettings, report::render_summary};

/// A named spending bucket with its own append-only ledger.
///
/// The balance is kept in step with the ledger on every mutation rather than
/// recomputed, and only `deposit`, `withdraw` and `transfer` touch either.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    name: String,
    ledger: Vec<Transaction>,
    balance: f64,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ledger: Vec::new(),
            balance: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ledger(&self) -> &[Transaction] {
        &self.ledger
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Same as [`Category::balance`].
    pub fn get_balance(&self) -> f64 {
        self.balance
    }

    /// Records `amount` as given. No sign check is made.
    pub fn deposit(&mut self, amount: f64, description: impl Into<String>) {
        let entry = Transaction::deposit(amount, description);
        trace!(category = %self.name, amount, "deposit recorded");
        self.balance += entry.amount;
        self.ledger.push(entry);
    }

    /// Returns `true` when `amount` does not exceed the current balance.
    pub fn check_funds(&self, amount: f64) -> bool {
        amount <= self.balance
    }

    /// Records a withdrawal when funds allow. Returns whether it took place.
    pub fn withdraw(&mut self, amount: f64, description: impl Into<String>) -> bool {
        if !self.check_funds(amount) {
            debug!(
                category = %self.name,
                amount,
                balance = self.balance,
                "withdrawal declined: insufficient funds"
            );
            return false;
        }
        let entry = Transaction::withdrawal(amount, description);
        trace!(category = %self.name, amount, "withdrawal recorded");
        self.balance += entry.amount;
        self.ledger.push(entry);
        true
    }

    /// Moves `amount` into `target`, writing a withdrawal here and a deposit
    /// there. Either both entries are written or neither is.
    pub fn transfer(&mut self, amount: f64, target: &mut Category) -> bool {
        if !self.check_funds(amount) {
            debug!(
                from = %self.name,
                to = %target.name,
                amount,
                balance = self.balance,
                "transfer declined: insufficient funds"
            );
            return false;
        }
        let withdrawn = self.withdraw(amount, format!("Transfer to {}", target.name));
        debug_assert!(withdrawn, "funds were checked before withdrawing");
        target.deposit(amount, format!("Transfer from {}", self.name));
        debug!(from = %self.name, to = %target.name, amount, "transfer completed");
        true
    }

    /// Sum of every withdrawal in the ledger, transfers out included.
    pub fn total_withdrawals(&self) -> f64 {
        LedgerView::total_withdrawals(self)
    }

    pub fn summary(&self, settings: &ReportSettings) -> String {
        render_summary(self, settings)
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl LedgerView for Category {
    fn entries(&self) -> &[Transaction] {
        &self.ledger
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(&ReportSettings::default()))
    }
}
