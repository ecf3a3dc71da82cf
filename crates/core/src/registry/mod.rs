//! Declarative record-type configuration.
//!
//! Each record type declares how it participates in the ledger and which
//! ownership chain scopes it. The engines read this registry instead of
//! carrying per-type code: adding a record kind is a registry entry, not a
//! new filter implementation.

mod defaults;

use std::collections::HashMap;

use garrison_shared::types::RecordType;
use serde::{Deserialize, Serialize};

use crate::visibility::OwnershipChain;

/// How records of a type contribute to the service-day ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerKind {
    /// Records imply credit entries (e.g., leave grants).
    Credit,
    /// Records imply debit entries (e.g., leave taken, absences).
    Debit,
    /// Records carry no ledger contribution.
    None,
}

/// Declared configuration for one record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTypeConfig {
    /// Ledger contribution of the type's records.
    pub ledger_kind: LedgerKind,
    /// Chain from a record to its owning unit.
    pub chain: OwnershipChain,
}

/// Registry of record types known to the engines.
#[derive(Debug, Clone, Default)]
pub struct RecordTypeRegistry {
    types: HashMap<RecordType, RecordTypeConfig>,
}

impl RecordTypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The default roster of the records application (see `defaults`).
    #[must_use]
    pub fn defaults() -> Self {
        defaults::registry()
    }

    /// Declares or replaces a record type.
    pub fn register(
        &mut self,
        record_type: impl Into<RecordType>,
        ledger_kind: LedgerKind,
        chain: OwnershipChain,
    ) {
        self.types
            .insert(record_type.into(), RecordTypeConfig { ledger_kind, chain });
    }

    /// Configuration for a record type, if declared.
    #[must_use]
    pub fn config(&self, record_type: &RecordType) -> Option<&RecordTypeConfig> {
        self.types.get(record_type)
    }

    /// Ledger kind for a record type; undeclared types carry no entries.
    #[must_use]
    pub fn ledger_kind(&self, record_type: &RecordType) -> LedgerKind {
        self.config(record_type)
            .map_or(LedgerKind::None, |config| config.ledger_kind)
    }

    /// Ownership chain for a record type, if declared.
    #[must_use]
    pub fn chain(&self, record_type: &RecordType) -> Option<&OwnershipChain> {
        self.config(record_type).map(|config| &config.chain)
    }

    /// Number of declared record types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no record type is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over declared record types and their configuration.
    pub fn iter(&self) -> impl Iterator<Item = (&RecordType, &RecordTypeConfig)> {
        self.types.iter()
    }
}
