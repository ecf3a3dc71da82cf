//! Login attempt limiter service.

use chrono::{DateTime, TimeDelta, Utc};
use garrison_shared::config::LimiterConfig;
use garrison_shared::types::SourceIdentity;

use super::error::LimiterError;
use super::types::{AccessDecision, FailureCounter};
use crate::store::CounterStore;

/// Tracks per-identity login failures and issues allow/deny decisions.
///
/// The limiter itself is stateless between calls: every decision is a pure
/// function of `(try_count, last_try_at, now)` and the configured tunables,
/// with the counter row as the only persisted state.
#[derive(Debug, Clone)]
pub struct LoginAttemptLimiter {
    limit: u32,
    cooldown_base: TimeDelta,
}

impl LoginAttemptLimiter {
    /// Creates a limiter from configuration.
    #[must_use]
    pub fn new(config: &LimiterConfig) -> Self {
        Self::with_tunables(config.failure_limit, config.cooldown_base_secs)
    }

    /// Creates a limiter from explicit tunables.
    #[must_use]
    pub fn with_tunables(limit: u32, cooldown_base_secs: u64) -> Self {
        Self {
            limit,
            cooldown_base: TimeDelta::seconds(i64::try_from(cooldown_base_secs).unwrap_or(i64::MAX)),
        }
    }

    /// Records a failed attempt: creates the counter at one try or
    /// increments it, stamping the failure time. Returns the new try count.
    ///
    /// # Errors
    ///
    /// Returns `LimiterError::Storage` if the counter cannot be read or
    /// written.
    pub fn on_failure(
        &self,
        store: &mut impl CounterStore,
        identity: &SourceIdentity,
        now: DateTime<Utc>,
    ) -> Result<u32, LimiterError> {
        let counter = match store.get(identity)? {
            Some(mut counter) => {
                counter.record_failure(now);
                counter
            }
            None => FailureCounter::first(identity.clone(), now),
        };
        let tries = counter.try_count;
        store.put(counter)?;
        Ok(tries)
    }

    /// Records a successful attempt: the identity returns to `Clean`.
    ///
    /// # Errors
    ///
    /// Returns `LimiterError::Storage` if the counter cannot be deleted.
    pub fn on_success(
        &self,
        store: &mut impl CounterStore,
        identity: &SourceIdentity,
    ) -> Result<(), LimiterError> {
        store.delete(identity)?;
        Ok(())
    }

    /// Decides whether an attempt from the identity may proceed.
    ///
    /// Identities at or below the failure limit are always admitted. Past
    /// the limit, the cooldown window scales with the overshoot; once the
    /// window has elapsed, exactly one check is admitted and the counter is
    /// decremented by one — a gradual decay, never a reset.
    ///
    /// # Errors
    ///
    /// Returns `LimiterError::Storage` if the counter cannot be read or
    /// the decayed count cannot be written.
    pub fn check_access(
        &self,
        store: &mut impl CounterStore,
        identity: &SourceIdentity,
        now: DateTime<Utc>,
    ) -> Result<AccessDecision, LimiterError> {
        let Some(mut counter) = store.get(identity)? else {
            return Ok(AccessDecision::Allow);
        };
        if counter.try_count <= self.limit {
            return Ok(AccessDecision::Allow);
        }

        let cooldown_until = self.cooldown_until(&counter);
        if now < cooldown_until {
            let remaining = cooldown_until - now;
            tracing::debug!(
                identity = %identity,
                tries = counter.try_count,
                remaining_secs = remaining.num_seconds(),
                "login attempt denied during cooldown"
            );
            return Ok(AccessDecision::Deny { remaining });
        }

        // Window elapsed: admit this check and decay the counter one step.
        counter.try_count -= 1;
        store.put(counter)?;
        Ok(AccessDecision::Allow)
    }

    /// End of the cooldown window implied by a counter past the limit.
    ///
    /// The window is `(try_count - limit) * cooldown_base` after the last
    /// failure; for counters at or below the limit this is just
    /// `last_try_at`.
    #[must_use]
    pub fn cooldown_until(&self, counter: &FailureCounter) -> DateTime<Utc> {
        let overshoot = i64::from(counter.try_count.saturating_sub(self.limit));
        counter.last_try_at + self.cooldown_base * i32::try_from(overshoot).unwrap_or(i32::MAX)
    }
}
