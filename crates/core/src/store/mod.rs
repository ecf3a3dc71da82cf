//! Store traits and errors consumed by the engines.
//!
//! The core owns no persistence. Every engine computes over records held by
//! the surrounding application's store, reached through the narrow traits
//! defined here:
//!
//! - [`EntrySource`] - derives ledger entries from the records that imply them
//! - [`ReferenceGraph`] - follows one ownership-chain reference hop
//! - [`CounterStore`] - read-modify-write access to login-failure counters
//!
//! Only the failure counter is mutable state owned by this core; ledger
//! entries and ownership references are read-only views.

pub mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::MemoryCounterStore;

use garrison_shared::types::{SourceIdentity, SubjectId};
use uuid::Uuid;

use crate::ledger::LedgerEntry;
use crate::limiter::FailureCounter;
use crate::visibility::Hop;

/// Derives the ledger entries implied by a subject's domain records.
///
/// Entries are never persisted as rows of their own: implementors walk the
/// subject's records and map each ledger-relevant record to an entry using
/// the registry's ledger kind for its record type. Every call reflects the
/// records as currently stored, so the balance cannot drift from the data.
pub trait EntrySource {
    /// Returns all ledger entries for the subject, in any order.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the underlying store cannot be queried.
    fn ledger_entries(&self, subject: SubjectId) -> Result<Vec<LedgerEntry>, StoreError>;
}

/// Follows ownership-chain references between stored rows.
///
/// Given a row and the hop kind declared in the chain, returns the id of the
/// referenced row, or `None` when the reference is unset or dangling.
pub trait ReferenceGraph {
    /// Follows a single reference hop from the given row.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the underlying store cannot be queried.
    fn follow(&self, from: Uuid, hop: Hop) -> Result<Option<Uuid>, StoreError>;
}

/// Read-modify-write access to per-identity login-failure counters.
///
/// Implementations should provide atomic per-row updates; under concurrent
/// failures from one source a lost update is tolerated by the limiter, but
/// a torn row is not.
pub trait CounterStore {
    /// Loads the counter for an identity, if one exists.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the counter cannot be read.
    fn get(&self, identity: &SourceIdentity) -> Result<Option<FailureCounter>, StoreError>;

    /// Inserts or replaces the counter for its identity.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the counter cannot be written.
    fn put(&mut self, counter: FailureCounter) -> Result<(), StoreError>;

    /// Deletes the counter for an identity; deleting a missing counter is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the delete cannot be applied.
    fn delete(&mut self, identity: &SourceIdentity) -> Result<(), StoreError>;
}
