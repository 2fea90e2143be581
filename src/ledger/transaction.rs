/// A single ledger entry. Deposits carry a positive amount, withdrawals a
/// negative one.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub amount: f64,
    pub description: String,
}

impl Transaction {
    pub fn deposit(amount: f64, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn withdrawal(amount: f64, description: impl Into<String>) -> Self {
        Self {
            amount: -amount,
            description: description.into(),
        }
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn withdrawal_negates_amount() {
        let entry = Transaction::withdrawal(12.5, "lunch");
        assert_eq!(entry.amount, -12.5);
        assert_eq!(entry.description, "lunch");
        assert!(entry.is_withdrawal());
    }

    #[test]
    fn negative_deposit_is_recorded_literally() {
        let entry = Transaction::deposit(-3.0, "refund reversal");
        assert_eq!(entry.amount, -3.0);
        assert!(entry.is_withdrawal());
        assert!(!Transaction::deposit(0.0, "").is_withdrawal());
    }
}
