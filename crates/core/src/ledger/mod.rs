//! Service-day balance tracking and debit validation.
//!
//! This module implements the core ledger functionality:
//! - Derived credit/debit entries of service days
//! - Balance calculation with entry exclusion for revalidation
//! - Span and day-count validation for dated debits
//! - The `BalanceLedger` service invoked from the storage-write path
//!
//! The balance is never cached: every computation re-reads the entries the
//! store derives from current records, so the non-negative invariant cannot
//! drift from the underlying data.

pub mod balance;
pub mod error;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod balance_props;

pub use balance::available_balance;
pub use error::LedgerError;
pub use service::BalanceLedger;
pub use types::{DaySpan, DebitInput, EntryKind, LedgerEntry};
pub use validation::validate_new_debit;
