use super::transaction::Transaction;

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Read-only view over a named, append-only ledger.
pub trait LedgerView: NamedEntity {
    fn entries(&self) -> &[Transaction];

    /// Sum of every withdrawal entry. Never positive.
    fn total_withdrawals(&self) -> f64 {
        self.entries()
            .iter()
            .filter(|entry| entry.is_withdrawal())
            .map(|entry| entry.amount)
            .sum()
    }
}

impl<T: NamedEntity + ?Sized> NamedEntity for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: LedgerView + ?Sized> LedgerView for &T {
    fn entries(&self) -> &[Transaction] {
        (**self).entries()
    }

    fn total_withdrawals(&self) -> f64 {
        (**self).total_withdrawals()
    }
}
