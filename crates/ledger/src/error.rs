//! The module contains the error the ledger can throw.
//!
//! There is a single error:
//!
//! - [`InvalidAmount`] thrown when a supplied amount cannot be converted to
//!   an exact decimal.
//!
//! A failed conversion happens before any mutation, so the ledger is never
//! left in an inconsistent state.
//!
//!  [`InvalidAmount`]: LedgerError::InvalidAmount
use std::convert::Infallible;

use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

// Lets already-exact values (an infallible conversion into `Amount`)
// satisfy the `TryInto<Amount>` bound on the ledger operations.
impl From<Infallible> for LedgerError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}
