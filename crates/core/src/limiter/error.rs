//! Limiter error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while tracking login failures.
///
/// A cooldown denial is not an error (see `AccessDecision`); the only
/// failure mode here is the counter store itself.
#[derive(Debug, Error)]
pub enum LimiterError {
    /// The counter could not be read or written.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<LimiterError> for garrison_shared::AppError {
    fn from(err: LimiterError) -> Self {
        match err {
            LimiterError::Storage(store) => store.into(),
        }
    }
}
