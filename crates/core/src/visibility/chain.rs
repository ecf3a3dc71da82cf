//! Ownership chains as declared data.
//!
//! A chain is the ordered list of reference hops from a record to the
//! organizational unit that owns it. Every record type in the system reuses
//! one of three shapes: a direct unit reference, one hop through a location,
//! or two hops through a subject and its location.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One reference hop in an ownership chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hop {
    /// Follow the row's subject reference.
    Subject,
    /// Follow the row's location reference.
    Location,
    /// Follow the row's unit reference; always the terminal hop.
    Unit,
}

/// Errors raised when declaring a malformed chain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    /// A chain must contain at least one hop.
    #[error("Ownership chain must contain at least one hop")]
    Empty,

    /// The last hop of a chain must reach the owning unit.
    #[error("Ownership chain must terminate at a unit reference")]
    NotTerminated,

    /// A unit reference ends the chain and cannot appear earlier.
    #[error("Unit reference may only appear as the terminal hop")]
    EarlyUnit,
}

/// Ordered reference hops terminating at an organizational unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipChain {
    hops: Vec<Hop>,
}

impl OwnershipChain {
    /// Declares a chain from explicit hops.
    ///
    /// # Errors
    ///
    /// Returns a `ChainError` unless the hops are non-empty and exactly the
    /// final hop is a unit reference.
    pub fn new(hops: Vec<Hop>) -> Result<Self, ChainError> {
        match hops.split_last() {
            None => Err(ChainError::Empty),
            Some((last, _)) if *last != Hop::Unit => Err(ChainError::NotTerminated),
            Some((_, rest)) if rest.contains(&Hop::Unit) => Err(ChainError::EarlyUnit),
            _ => Ok(Self { hops }),
        }
    }

    /// Record references its unit directly.
    #[must_use]
    pub fn direct() -> Self {
        Self { hops: vec![Hop::Unit] }
    }

    /// Record references a location, which references the unit.
    #[must_use]
    pub fn via_location() -> Self {
        Self {
            hops: vec![Hop::Location, Hop::Unit],
        }
    }

    /// Record references a subject, whose location references the unit.
    #[must_use]
    pub fn via_subject() -> Self {
        Self {
            hops: vec![Hop::Subject, Hop::Location, Hop::Unit],
        }
    }

    /// The hops in walking order.
    #[must_use]
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }
}
