//! Display-calendar date augmentation for search literals.
//!
//! When a search literal parses as a date in the organization's display
//! calendar, the search additionally matches rows whose creation or update
//! timestamp, rendered in that calendar, equals the literal. The
//! augmentation runs over rows already reduced to the caller's scope, so it
//! never widens access; a literal that fails to parse silently falls
//! through to ordinary text matching.

use chrono::{DateTime, Utc};

/// Calendar hooks supplied by the surrounding formatting layer.
///
/// Calendar-system conversion is an external collaborator; the resolver
/// only compares rendered strings for equality.
pub trait DisplayCalendar {
    /// Returns true if the literal is a well-formed date in the display
    /// format.
    fn is_date_literal(&self, literal: &str) -> bool;

    /// Renders a timestamp as a date string in the display format.
    fn render(&self, at: DateTime<Utc>) -> String;
}

/// Applies a search literal over scope-filtered rows.
///
/// `matches_text` is the surrounding layer's ordinary substring match;
/// `timestamps` yields each row's creation and optional update time. A row
/// is kept when the text matches, or — for date literals — when either
/// rendered timestamp equals the literal.
pub fn augment_matches<T, C, M, G>(
    rows: Vec<T>,
    literal: &str,
    calendar: &C,
    matches_text: M,
    timestamps: G,
) -> Vec<T>
where
    C: DisplayCalendar,
    M: Fn(&T, &str) -> bool,
    G: Fn(&T) -> (DateTime<Utc>, Option<DateTime<Utc>>),
{
    let is_date = calendar.is_date_literal(literal);

    rows.into_iter()
        .filter(|row| {
            if matches_text(row, literal) {
                return true;
            }
            if !is_date {
                return false;
            }
            let (recorded_at, updated_at) = timestamps(row);
            calendar.render(recorded_at) == literal
                || updated_at.is_some_and(|at| calendar.render(at) == literal)
        })
        .collect()
}
