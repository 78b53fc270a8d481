//! A minimal personal finance ledger.
//!
//! A [`Ledger`] tracks a running balance and an append-only history of
//! [`Transaction`]s. Amounts are exact decimals backed by integer cents
//! ([`Amount`]), so monetary arithmetic never suffers binary floating-point
//! drift.
//!
//! ```rust
//! use ledger::Ledger;
//!
//! let mut history = Ledger::new(100)?;
//! history.spend("39.95", "meal")?;
//! history.receive("1000.01", "Molly's game")?;
//!
//! assert_eq!(history.balance().to_string(), "1060.06");
//! assert_eq!(history.to_string(), "<Ledger(1060.06): 2 transactions>");
//! # Ok::<(), ledger::LedgerError>(())
//! ```
use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::LedgerError;
pub use money::Amount;
pub use transaction::Transaction;

mod error;
mod money;
mod transaction;

type ResultLedger<T> = Result<T, LedgerError>;

/// A running balance plus the ordered history of movements behind it.
///
/// The ledger is a single mutable object with no internal synchronization;
/// callers that share one across threads must serialize access themselves.
/// The balance invariant `balance == initial + received - spent` is
/// maintained incrementally on every mutation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Ledger {
    balance: Amount,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Creates a ledger with an initial balance and an empty history.
    ///
    /// Accepts anything convertible to an exact decimal: whole units as
    /// `i64`, decimal strings like `"39.95"`, or an [`Amount`]. Use
    /// [`Ledger::default`] for a zero starting balance.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InvalidAmount`] when the value cannot be converted.
    pub fn new<A>(initial: A) -> ResultLedger<Self>
    where
        A: TryInto<Amount>,
        LedgerError: From<A::Error>,
    {
        Ok(Self {
            balance: initial.try_into()?,
            transactions: Vec::new(),
        })
    }

    /// Records income from `source` and increments the balance.
    ///
    /// Negative amounts are accepted and decrease the balance instead; the
    /// ledger performs no sign validation (see the crate tests pinning this
    /// behavior).
    ///
    /// # Errors
    ///
    /// [`LedgerError::InvalidAmount`] when the value cannot be converted;
    /// the ledger is left untouched.
    pub fn receive<A>(&mut self, amount: A, source: impl Into<String>) -> ResultLedger<()>
    where
        A: TryInto<Amount>,
        LedgerError: From<A::Error>,
    {
        let amount = amount.try_into()?;
        self.transactions.push(Transaction::new(amount, source.into()));
        self.balance += amount;
        Ok(())
    }

    /// Records an expense for `reason` and decrements the balance.
    ///
    /// The transaction keeps the positive spend value; only the balance is
    /// decremented. As with [`Ledger::receive`], negative amounts are not
    /// rejected and flip the direction of the movement.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InvalidAmount`] when the value cannot be converted;
    /// the ledger is left untouched.
    pub fn spend<A>(&mut self, amount: A, reason: impl Into<String>) -> ResultLedger<()>
    where
        A: TryInto<Amount>,
        LedgerError: From<A::Error>,
    {
        let amount = amount.try_into()?;
        self.transactions.push(Transaction::new(amount, reason.into()));
        self.balance -= amount;
        Ok(())
    }

    /// Returns the current balance, exact.
    #[must_use]
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Sums the amounts of every transaction whose label equals `label`.
    ///
    /// The history is scanned in insertion order and the match is exact, so
    /// income recorded under the same label counts too. Returns
    /// [`Amount::ZERO`] when nothing matches. Linear in the number of
    /// transactions; no per-label index is kept because the history is
    /// assumed small.
    #[must_use]
    pub fn spent_for(&self, label: &str) -> Amount {
        self.transactions
            .iter()
            .filter(|tx| tx.label == label)
            .fold(Amount::ZERO, |sum, tx| sum + tx.amount)
    }

    /// Returns the recorded transactions in insertion order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

impl fmt::Display for Ledger {
    /// Formats as `<Ledger(60.05): 1 transaction>`, with the balance
    /// rounded to two decimals for display only and singular wording for
    /// exactly one transaction.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.transactions.len();
        let plural = if count == 1 { "" } else { "s" };
        write!(f, "<Ledger({}): {count} transaction{plural}>", self.balance)
    }
}
