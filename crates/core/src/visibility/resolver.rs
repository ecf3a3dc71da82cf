//! Caller scope resolution and row filtering.

use garrison_shared::types::{RecordId, RecordType, SourceIdentity, UnitId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::chain::OwnershipChain;
use crate::store::{ReferenceGraph, StoreError};

/// Role of the caller for scoping purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Sees every record; scoping is bypassed.
    Privileged,
    /// Sees only records whose chain resolves to the caller's home unit.
    Scoped,
}

/// Caller identity supplied by the surrounding request layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    /// Scoping role.
    pub role: Role,
    /// The caller's assigned organizational unit.
    pub home_unit: UnitId,
    /// Key identifying the caller's source for the login limiter.
    pub source_identity: SourceIdentity,
}

/// Access predicate derived for a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every record is visible.
    Unrestricted,
    /// Only records owned by the given unit are visible.
    Unit(UnitId),
}

/// Per-call-site switch for the legacy "unscoped when empty" behavior.
///
/// The original system silently returned the unfiltered row set whenever the
/// scoped result was empty, which defeats unit isolation. The behavior
/// survives only behind this explicit opt-in and is audited via `tracing`
/// when it engages; the default is `Never`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyScopeFallback {
    /// An empty scoped result stays empty.
    #[default]
    Never,
    /// An empty scoped result falls back to the unfiltered rows.
    AllowUnscoped,
}

/// Derives and applies visibility scopes.
pub struct VisibilityResolver;

impl VisibilityResolver {
    /// Derives the access predicate for a caller.
    #[must_use]
    pub const fn scope(caller: &Caller) -> Scope {
        match caller.role {
            Role::Privileged => Scope::Unrestricted,
            Role::Scoped => Scope::Unit(caller.home_unit),
        }
    }

    /// Filters fetched rows down to the caller's scope.
    ///
    /// `id_of` extracts each row's record id for the chain walk. An empty
    /// result is valid; with `EmptyScopeFallback::AllowUnscoped` it is
    /// replaced by the unfiltered rows and a warning is emitted.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if a chain hop cannot be queried.
    pub fn filter<T, F>(
        scope: Scope,
        record_type: &RecordType,
        chain: &OwnershipChain,
        graph: &impl ReferenceGraph,
        rows: Vec<T>,
        id_of: F,
        fallback: EmptyScopeFallback,
    ) -> Result<Vec<T>, StoreError>
    where
        F: Fn(&T) -> RecordId,
    {
        if scope.is_unrestricted() {
            return Ok(rows);
        }

        let mut scoped = Vec::new();
        let mut rejected = Vec::new();
        for row in rows {
            if scope.permits(id_of(&row), chain, graph)? {
                scoped.push(row);
            } else {
                rejected.push(row);
            }
        }

        if scoped.is_empty()
            && !rejected.is_empty()
            && fallback == EmptyScopeFallback::AllowUnscoped
        {
            tracing::warn!(
                record_type = %record_type,
                rows = rejected.len(),
                "empty scoped result replaced by unscoped rows at an opted-in call site"
            );
            return Ok(rejected);
        }

        Ok(scoped)
    }
}

impl Scope {
    /// Returns true if every record is visible.
    #[must_use]
    pub const fn is_unrestricted(self) -> bool {
        matches!(self, Self::Unrestricted)
    }

    /// Tests whether a single record falls inside the scope.
    ///
    /// A dangling reference anywhere along the chain resolves to "not
    /// visible" rather than an error.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if a chain hop cannot be queried.
    pub fn permits(
        self,
        record: RecordId,
        chain: &OwnershipChain,
        graph: &impl ReferenceGraph,
    ) -> Result<bool, StoreError> {
        match self {
            Self::Unrestricted => Ok(true),
            Self::Unit(home_unit) => {
                Ok(Self::owning_unit(record, chain, graph)? == Some(home_unit))
            }
        }
    }

    /// Walks the chain from a record to the unit that owns it.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if a chain hop cannot be queried.
    pub fn owning_unit(
        record: RecordId,
        chain: &OwnershipChain,
        graph: &impl ReferenceGraph,
    ) -> Result<Option<UnitId>, StoreError> {
        let mut current: Uuid = record.into_inner();
        for hop in chain.hops() {
            match graph.follow(current, *hop)? {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        Ok(Some(UnitId::from_uuid(current)))
    }
}
