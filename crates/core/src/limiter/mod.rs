//! Login-failure tracking with escalating cooldown.
//!
//! Each source identity moves through `Clean` (no counter) into
//! `Tracking` on failures and `Cooldown` once the failure limit is passed.
//! The cooldown decays lazily: there is no timer or background job, only a
//! computed `cooldown_until` compared against the clock at check time, with
//! a single grace admission (and counter decrement) per elapsed window.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::LimiterError;
pub use service::LoginAttemptLimiter;
pub use types::{AccessDecision, CounterState, FailureCounter};
