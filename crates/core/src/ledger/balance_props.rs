//! Property tests for the balance calculation.

use chrono::NaiveDate;
use garrison_shared::types::{EntryId, SubjectId};
use proptest::prelude::*;

use super::balance::available_balance;
use super::types::{EntryKind, LedgerEntry};

fn entry_strategy() -> impl Strategy<Value = LedgerEntry> {
    (any::<bool>(), 1u32..=365).prop_map(|(is_credit, amount)| {
        let recorded_at = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        if is_credit {
            LedgerEntry::credit(EntryId::new(), SubjectId::new(), amount, recorded_at)
        } else {
            LedgerEntry::debit(EntryId::new(), SubjectId::new(), amount, recorded_at)
        }
    })
}

fn entries_strategy(max_len: usize) -> impl Strategy<Value = Vec<LedgerEntry>> {
    prop::collection::vec(entry_strategy(), 0..=max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The balance equals sum(credits) - sum(debits) however the entries
    /// are arranged.
    #[test]
    fn prop_balance_is_credits_minus_debits(entries in entries_strategy(30)) {
        let credits: i64 = entries
            .iter()
            .filter(|e| e.kind == EntryKind::Credit)
            .map(|e| i64::from(e.amount))
            .sum();
        let debits: i64 = entries
            .iter()
            .filter(|e| e.kind == EntryKind::Debit)
            .map(|e| i64::from(e.amount))
            .sum();

        prop_assert_eq!(available_balance(&entries, None), credits - debits);
    }

    /// Insertion order never changes the balance.
    #[test]
    fn prop_balance_is_order_independent(entries in entries_strategy(30)) {
        let forward = available_balance(&entries, None);

        let mut reversed = entries.clone();
        reversed.reverse();
        prop_assert_eq!(available_balance(&reversed, None), forward);

        let mut by_amount = entries;
        by_amount.sort_by_key(|e| e.amount);
        prop_assert_eq!(available_balance(&by_amount, None), forward);
    }

    /// Excluding a debit adds back exactly that entry's amount; excluding
    /// an id that is not a debit changes nothing.
    #[test]
    fn prop_excluding_adds_back_one_debit(entries in entries_strategy(30), pick in any::<prop::sample::Index>()) {
        prop_assume!(!entries.is_empty());
        let picked = &entries[pick.index(entries.len())];
        let base = available_balance(&entries, None);
        let excluded = available_balance(&entries, Some(picked.id));

        match picked.kind {
            EntryKind::Debit => prop_assert_eq!(excluded, base + i64::from(picked.amount)),
            EntryKind::Credit => prop_assert_eq!(excluded, base),
        }
    }
}
