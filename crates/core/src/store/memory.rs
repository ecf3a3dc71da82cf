//! In-memory counter store.
//!
//! Backs the limiter in tests and in embeddings that keep failure counters
//! in process memory rather than in the database.

use std::collections::HashMap;

use garrison_shared::types::SourceIdentity;

use super::{CounterStore, StoreError};
use crate::limiter::FailureCounter;

/// `HashMap`-backed [`CounterStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryCounterStore {
    counters: HashMap<SourceIdentity, FailureCounter>,
}

impl MemoryCounterStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of tracked identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Returns true if no identity is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

impl CounterStore for MemoryCounterStore {
    fn get(&self, identity: &SourceIdentity) -> Result<Option<FailureCounter>, StoreError> {
        Ok(self.counters.get(identity).cloned())
    }

    fn put(&mut self, counter: FailureCounter) -> Result<(), StoreError> {
        self.counters.insert(counter.identity.clone(), counter);
        Ok(())
    }

    fn delete(&mut self, identity: &SourceIdentity) -> Result<(), StoreError> {
        self.counters.remove(identity);
        Ok(())
    }
}
