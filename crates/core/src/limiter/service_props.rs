//! Property tests for the cooldown decision function.

use chrono::{TimeDelta, TimeZone, Utc};
use garrison_shared::types::SourceIdentity;
use proptest::prelude::*;

use super::service::LoginAttemptLimiter;
use super::types::FailureCounter;
use crate::store::{CounterStore, MemoryCounterStore};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The cooldown window scales linearly with the overshoot past the
    /// limit and is zero at or below it.
    #[test]
    fn prop_cooldown_window_is_linear_in_overshoot(
        limit in 1u32..20,
        base_secs in 1u64..3600,
        tries in 1u32..40,
    ) {
        let limiter = LoginAttemptLimiter::with_tunables(limit, base_secs);
        let last_try = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let counter = FailureCounter {
            identity: SourceIdentity::from("192.0.2.77"),
            try_count: tries,
            last_try_at: last_try,
        };

        let overshoot = i64::from(tries.saturating_sub(limit));
        let expected = last_try
            + TimeDelta::seconds(overshoot * i64::try_from(base_secs).unwrap());
        prop_assert_eq!(limiter.cooldown_until(&counter), expected);
    }

    /// Before the window ends the check denies with the exact remainder;
    /// at or past the end it allows and decrements by exactly one.
    #[test]
    fn prop_check_is_a_pure_function_of_the_clock(
        limit in 1u32..10,
        base_secs in 1u64..600,
        overshoot in 1u32..10,
        elapsed_secs in 0i64..10_000,
    ) {
        let limiter = LoginAttemptLimiter::with_tunables(limit, base_secs);
        let last_try = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let tries = limit + overshoot;
        let identity = SourceIdentity::from("192.0.2.78");

        let mut store = MemoryCounterStore::new();
        store
            .put(FailureCounter {
                identity: identity.clone(),
                try_count: tries,
                last_try_at: last_try,
            })
            .unwrap();

        let window = i64::from(overshoot) * i64::try_from(base_secs).unwrap();
        let now = last_try + TimeDelta::seconds(elapsed_secs);
        let decision = limiter.check_access(&mut store, &identity, now).unwrap();

        if elapsed_secs < window {
            prop_assert_eq!(
                decision,
                super::types::AccessDecision::Deny {
                    remaining: TimeDelta::seconds(window - elapsed_secs)
                }
            );
            prop_assert_eq!(store.get(&identity).unwrap().unwrap().try_count, tries);
        } else {
            prop_assert!(decision.is_allowed());
            prop_assert_eq!(store.get(&identity).unwrap().unwrap().try_count, tries - 1);
        }
    }

    /// However many failures accrue, a success always clears the counter.
    #[test]
    fn prop_success_always_clears(tries in 1u32..50) {
        let limiter = LoginAttemptLimiter::with_tunables(5, 60);
        let identity = SourceIdentity::from("192.0.2.79");
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        let mut store = MemoryCounterStore::new();
        for _ in 0..tries {
            limiter.on_failure(&mut store, &identity, now).unwrap();
        }
        limiter.on_success(&mut store, &identity).unwrap();
        prop_assert!(store.get(&identity).unwrap().is_none());
    }
}
