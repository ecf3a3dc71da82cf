//! Domain types for the service-day ledger.

use chrono::NaiveDate;
use garrison_shared::types::{EntryId, SubjectId};
use serde::{Deserialize, Serialize};

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Adds service days to the subject's balance (e.g., earned leave).
    Credit,
    /// Consumes service days (e.g., leave taken, unauthorized absence).
    Debit,
}

/// Inclusive date range carried by a dated entry.
///
/// Both endpoints are counted: a span from the 2nd to the 6th covers five
/// days. `start == end` is rejected as a span, so a one-day entry carries a
/// bare day count instead of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySpan {
    /// First day covered.
    pub start: NaiveDate,
    /// Last day covered.
    pub end: NaiveDate,
}

impl DaySpan {
    /// Creates a span; endpoints are not validated here (see `validation`).
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of days covered, counting both endpoints.
    #[must_use]
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// A derived credit or debit of service days.
///
/// Entries are computed on demand from the domain records that imply them
/// (leave grants, leave taken, absences, detentions, extra duty) and are
/// never stored as rows of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Identifier of the originating record.
    pub id: EntryId,
    /// Subject whose balance this entry affects.
    pub subject: SubjectId,
    /// Credit or debit.
    pub kind: EntryKind,
    /// Day count, at least 1.
    pub amount: u32,
    /// Date range for entries that carry one.
    pub span: Option<DaySpan>,
    /// Date the originating record was registered.
    pub recorded_at: NaiveDate,
}

impl LedgerEntry {
    /// Creates a credit entry without a date range.
    #[must_use]
    pub const fn credit(
        id: EntryId,
        subject: SubjectId,
        amount: u32,
        recorded_at: NaiveDate,
    ) -> Self {
        Self {
            id,
            subject,
            kind: EntryKind::Credit,
            amount,
            span: None,
            recorded_at,
        }
    }

    /// Creates a debit entry without a date range.
    #[must_use]
    pub const fn debit(
        id: EntryId,
        subject: SubjectId,
        amount: u32,
        recorded_at: NaiveDate,
    ) -> Self {
        Self {
            id,
            subject,
            kind: EntryKind::Debit,
            amount,
            span: None,
            recorded_at,
        }
    }

    /// Attaches a date range to the entry.
    #[must_use]
    pub const fn with_span(mut self, span: DaySpan) -> Self {
        self.span = Some(span);
        self
    }
}

/// A debit about to be committed or revalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebitInput {
    /// Subject whose balance the debit draws on.
    pub subject: SubjectId,
    /// Requested day count, at least 1.
    pub amount: u32,
    /// Date range, when the debit expresses one.
    pub span: Option<DaySpan>,
    /// When revalidating an edited entry, its id; the entry's own prior
    /// contribution is excluded from the balance so it is not double-counted.
    pub excluding: Option<EntryId>,
}
