//! Balance ledger service.
//!
//! The service front end pulls a subject's derived entries through an
//! [`EntrySource`] and runs the pure calculations on them. It is invoked
//! from the storage-write path itself, so the non-negative invariant holds
//! regardless of which caller performs the write.

use garrison_shared::types::{EntryId, SubjectId};

use super::balance;
use super::error::LedgerError;
use super::types::DebitInput;
use super::validation;
use crate::store::EntrySource;

/// Service-day balance ledger over an external entry source.
pub struct BalanceLedger;

impl BalanceLedger {
    /// Computes the subject's available balance from current records.
    ///
    /// `excluding` leaves the named debit entry out of the sum, for
    /// revalidating an edited entry against its own prior contribution.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the entries cannot be derived.
    pub fn available_balance(
        source: &impl EntrySource,
        subject: SubjectId,
        excluding: Option<EntryId>,
    ) -> Result<i64, LedgerError> {
        let entries = source.ledger_entries(subject)?;
        Ok(balance::available_balance(&entries, excluding))
    }

    /// Validates a debit about to be committed for its subject.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSpan`, `InconsistentSpan`, or `BalanceExceeded` when
    /// the debit is rejected, or `Storage` if the entries cannot be derived.
    pub fn validate_new_debit(
        source: &impl EntrySource,
        input: &DebitInput,
    ) -> Result<(), LedgerError> {
        let entries = source.ledger_entries(input.subject)?;
        validation::validate_new_debit(input, &entries)
    }
}
