//! Domain types for the login-failure limiter.

use chrono::{DateTime, TimeDelta, Utc};
use garrison_shared::types::SourceIdentity;
use serde::{Deserialize, Serialize};

/// Per-identity failure counter.
///
/// Created on an identity's first failure, incremented on each subsequent
/// failure, deleted on success. The absence of a counter is the `Clean`
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureCounter {
    /// Source the failures came from.
    pub identity: SourceIdentity,
    /// Number of consecutive recorded failures.
    pub try_count: u32,
    /// Time of the most recent failure.
    pub last_try_at: DateTime<Utc>,
}

impl FailureCounter {
    /// Creates the counter for an identity's first failure.
    #[must_use]
    pub const fn first(identity: SourceIdentity, now: DateTime<Utc>) -> Self {
        Self {
            identity,
            try_count: 1,
            last_try_at: now,
        }
    }

    /// Records another failure.
    pub const fn record_failure(&mut self, now: DateTime<Utc>) {
        self.try_count += 1;
        self.last_try_at = now;
    }

    /// The state this counter puts its identity in, for a given limit.
    #[must_use]
    pub const fn state(&self, limit: u32) -> CounterState {
        if self.try_count > limit {
            CounterState::Cooldown
        } else {
            CounterState::Tracking
        }
    }
}

/// Limiter state of an identity. `Clean` is the absence of a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterState {
    /// Failures recorded, still within the limit.
    Tracking,
    /// Past the limit; access depends on the cooldown clock.
    Cooldown,
}

/// Outcome of an access check.
///
/// A denial is a value carrying a retry-after signal, not an error; store
/// failures surface separately so infrastructure trouble is never mistaken
/// for a lockout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The attempt may proceed.
    Allow,
    /// The identity is cooling down for the given remaining time.
    Deny {
        /// Time left until the next attempt is admitted.
        remaining: TimeDelta,
    },
}

impl AccessDecision {
    /// Returns true for `Allow`.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}
