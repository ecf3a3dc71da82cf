//! Debit validation rules.
//!
//! The three checks are independent and must all pass. `InvalidSpan` is
//! evaluated first, since a malformed span makes the span-derived day count
//! meaningless; which error is reported first is the only thing the order
//! affects.

use super::balance::available_balance;
use super::error::LedgerError;
use super::types::{DaySpan, DebitInput, LedgerEntry};

/// Checks that a span's start strictly precedes its end.
///
/// # Errors
///
/// Returns `InvalidSpan` when `start >= end`.
pub fn validate_span(span: DaySpan) -> Result<(), LedgerError> {
    if span.start >= span.end {
        return Err(LedgerError::InvalidSpan {
            start: span.start,
            end: span.end,
        });
    }
    Ok(())
}

/// Checks that a span covers exactly the claimed number of days, counting
/// both endpoints.
///
/// # Errors
///
/// Returns `InconsistentSpan` when `end - start + 1 != amount`.
pub fn validate_day_count(span: DaySpan, amount: u32) -> Result<(), LedgerError> {
    let span_days = span.day_count();
    if span_days != i64::from(amount) {
        return Err(LedgerError::InconsistentSpan { span_days, amount });
    }
    Ok(())
}

/// Validates a debit against the subject's current entries.
///
/// Runs the span checks when the debit carries a range, then the balance
/// check. `input.excluding` keeps an edited entry's own prior contribution
/// out of the balance it is validated against.
///
/// # Errors
///
/// Returns `InvalidSpan`, `InconsistentSpan`, or `BalanceExceeded` in that
/// order of evaluation.
pub fn validate_new_debit(input: &DebitInput, entries: &[LedgerEntry]) -> Result<(), LedgerError> {
    if let Some(span) = input.span {
        validate_span(span)?;
        validate_day_count(span, input.amount)?;
    }

    let available = available_balance(entries, input.excluding);
    if i64::from(input.amount) > available {
        return Err(LedgerError::BalanceExceeded {
            requested: input.amount,
            available,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use garrison_shared::types::{EntryId, SubjectId};
    use rstest::rstest;

    use crate::ledger::types::LedgerEntry;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    fn debit_input(amount: u32, span: Option<DaySpan>) -> DebitInput {
        DebitInput {
            subject: SubjectId::new(),
            amount,
            span,
            excluding: None,
        }
    }

    #[test]
    fn test_span_start_must_precede_end() {
        assert!(matches!(
            validate_span(DaySpan::new(day(5), day(5))),
            Err(LedgerError::InvalidSpan { .. })
        ));
        assert!(matches!(
            validate_span(DaySpan::new(day(6), day(2))),
            Err(LedgerError::InvalidSpan { .. })
        ));
        assert!(validate_span(DaySpan::new(day(2), day(6))).is_ok());
    }

    #[rstest]
    #[case(3, false)] // 5-day span, claims 3
    #[case(4, false)]
    #[case(5, true)] // inclusive range: day 1 through day 5 is 5 days
    #[case(6, false)]
    fn test_day_count_inclusive(#[case] amount: u32, #[case] ok: bool) {
        let span = DaySpan::new(day(1), day(5));
        let result = validate_day_count(span, amount);
        if ok {
            assert!(result.is_ok());
        } else {
            assert!(matches!(result, Err(LedgerError::InconsistentSpan { .. })));
        }
    }

    #[test]
    fn test_debit_at_exact_balance_succeeds() {
        let entries = vec![LedgerEntry::credit(EntryId::new(), SubjectId::new(), 5, day(1))];
        assert!(validate_new_debit(&debit_input(5, None), &entries).is_ok());
    }

    #[test]
    fn test_debit_one_over_balance_fails() {
        let entries = vec![LedgerEntry::credit(EntryId::new(), SubjectId::new(), 5, day(1))];
        assert!(matches!(
            validate_new_debit(&debit_input(6, None), &entries),
            Err(LedgerError::BalanceExceeded { requested: 6, available: 5 })
        ));
    }

    #[test]
    fn test_invalid_span_reported_before_balance() {
        // Amount also exceeds the (empty) balance, but the span error wins.
        let input = debit_input(4, Some(DaySpan::new(day(9), day(3))));
        assert!(matches!(
            validate_new_debit(&input, &[]),
            Err(LedgerError::InvalidSpan { .. })
        ));
    }

    #[test]
    fn test_inconsistent_span_reported_before_balance() {
        let input = debit_input(4, Some(DaySpan::new(day(1), day(3))));
        assert!(matches!(
            validate_new_debit(&input, &[]),
            Err(LedgerError::InconsistentSpan { span_days: 3, amount: 4 })
        ));
    }

    #[test]
    fn test_spanless_debit_skips_span_checks() {
        let entries = vec![LedgerEntry::credit(EntryId::new(), SubjectId::new(), 2, day(1))];
        assert!(validate_new_debit(&debit_input(1, None), &entries).is_ok());
    }

    #[test]
    fn test_revalidating_edit_excludes_own_contribution() {
        let existing = LedgerEntry::debit(EntryId::new(), SubjectId::new(), 5, day(1));
        let editing = existing.id;
        let entries = vec![
            LedgerEntry::credit(EntryId::new(), SubjectId::new(), 5, day(1)),
            existing,
        ];

        // Without exclusion the edit would double-count itself and fail.
        let mut input = debit_input(5, None);
        assert!(matches!(
            validate_new_debit(&input, &entries),
            Err(LedgerError::BalanceExceeded { .. })
        ));

        input.excluding = Some(editing);
        assert!(validate_new_debit(&input, &entries).is_ok());
    }
}
