//! The module contains the `Transaction` type recorded by the ledger.
//!
//! Both expenses and income are represented by the `Transaction` type.
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Amount;

/// An immutable record of one movement: an amount and a free-text label
/// naming the counterparty or reason.
///
/// A transaction is created once per `receive`/`spend` call and never
/// mutated or deleted afterwards. The amount is stored as supplied, so a
/// spend keeps its positive value rather than being negated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: Amount,
    pub label: String,
}

impl Transaction {
    pub fn new(amount: Amount, label: String) -> Self {
        Self { amount, label }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_amount_and_label() {
        let tx = Transaction::new(Amount::new(3995), "meal".to_string());
        assert_eq!(tx.to_string(), "39.95 meal");
    }
}
