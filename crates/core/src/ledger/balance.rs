//! Service-day balance calculation.

use garrison_shared::types::EntryId;

use super::types::{EntryKind, LedgerEntry};

/// Sums credits minus debits over a subject's derived entries.
///
/// `excluding` names a debit entry to leave out of the sum: when an edited
/// entry is revalidated, its own prior contribution must not count against
/// the requested amount. The result can be read as "days still available".
///
/// The sum is order-independent and recomputed from scratch on every call;
/// nothing is cached, so the result always reflects current records.
#[must_use]
pub fn available_balance(entries: &[LedgerEntry], excluding: Option<EntryId>) -> i64 {
    let mut balance: i64 = 0;
    for entry in entries {
        match entry.kind {
            EntryKind::Credit => balance += i64::from(entry.amount),
            EntryKind::Debit => {
                if excluding != Some(entry.id) {
                    balance -= i64::from(entry.amount);
                }
            }
        }
    }
    balance
}
