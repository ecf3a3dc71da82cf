//! Ledger error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while validating or computing ledger entries.
///
/// The validation variants are always recoverable: they surface as a
/// rejected write with a specific reason. `Storage` is propagated unchanged
/// so an infrastructure failure is never mistaken for a failed validation.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The span's start date does not precede its end date.
    #[error("Span start {start} must precede end {end}")]
    InvalidSpan {
        /// First day of the span.
        start: NaiveDate,
        /// Last day of the span.
        end: NaiveDate,
    },

    /// The span covers a different number of days than the entry claims.
    #[error("Span covers {span_days} days but the entry claims {amount}")]
    InconsistentSpan {
        /// Days covered by the span, counting both endpoints.
        span_days: i64,
        /// Day count carried by the entry.
        amount: u32,
    },

    /// The debit would drive the subject's balance negative.
    #[error("Debit of {requested} days exceeds available balance of {available}")]
    BalanceExceeded {
        /// Requested day count.
        requested: u32,
        /// Balance available at validation time.
        available: i64,
    },

    /// Store failure while deriving entries.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSpan { .. } => "INVALID_SPAN",
            Self::InconsistentSpan { .. } => "INCONSISTENT_SPAN",
            Self::BalanceExceeded { .. } => "BALANCE_EXCEEDED",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Returns true if the error is a rejected validation rather than an
    /// infrastructure failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidSpan { .. } | Self::InconsistentSpan { .. } | Self::BalanceExceeded { .. }
        )
    }
}

impl From<LedgerError> for garrison_shared::AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidSpan { .. } | LedgerError::InconsistentSpan { .. } => {
                Self::Validation(err.to_string())
            }
            LedgerError::BalanceExceeded { .. } => Self::BusinessRule(err.to_string()),
            LedgerError::Storage(store) => store.into(),
        }
    }
}
