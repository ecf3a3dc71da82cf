//! Store error types.

use thiserror::Error;

/// Errors surfaced by the store traits.
///
/// Store failures are propagated unchanged and never retried inside the
/// core: neither the ledger nor the limiter can tell whether a partially
/// applied write already took effect.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A read query failed.
    #[error("store query failed: {0}")]
    Query(String),

    /// A write could not be applied.
    #[error("store write failed: {0}")]
    Write(String),
}

impl StoreError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(reason: impl Into<String>) -> Self {
        Self::Query(reason.into())
    }

    /// Creates a write error.
    #[must_use]
    pub fn write(reason: impl Into<String>) -> Self {
        Self::Write(reason.into())
    }
}

impl From<StoreError> for garrison_shared::AppError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garrison_shared::AppError;

    #[test]
    fn test_display() {
        assert_eq!(
            StoreError::query("counter table missing").to_string(),
            "store query failed: counter table missing"
        );
        assert_eq!(
            StoreError::unavailable("connection refused").to_string(),
            "store unavailable: connection refused"
        );
    }

    #[test]
    fn test_maps_to_app_storage_error() {
        let app: AppError = StoreError::write("disk full").into();
        assert_eq!(app.error_code(), "STORAGE_ERROR");
        assert_eq!(app.status_code(), 500);
    }
}
