//! Default roster of the records application.
//!
//! Every type reuses one of the three chain shapes; the ledger kinds mark
//! the five record kinds that imply service-day entries.

use super::{LedgerKind, RecordTypeRegistry};
use crate::visibility::OwnershipChain;

/// Builds the default registry.
pub(super) fn registry() -> RecordTypeRegistry {
    let mut registry = RecordTypeRegistry::new();

    // Rows that reference their unit directly.
    for record_type in ["location", "environs_information", "accountable_officer", "guard_roster", "depot"] {
        registry.register(record_type, LedgerKind::None, OwnershipChain::direct());
    }

    // Rows that reference a location inside the unit.
    for record_type in ["soldier", "personnel", "event", "equipment", "equipment_history", "guard_post", "seizure_report"] {
        registry.register(record_type, LedgerKind::None, OwnershipChain::via_location());
    }

    // Rows owned by a subject; scoped through the subject's location.
    registry.register("leave_grant", LedgerKind::Credit, OwnershipChain::via_subject());
    for record_type in ["leave_taken", "unauthorized_absence", "desertion", "detention", "extra_duty"] {
        registry.register(record_type, LedgerKind::Debit, OwnershipChain::via_subject());
    }
    for record_type in [
        "service_reduction",
        "contraband_carriage",
        "service_card",
        "training_course",
        "reprimand",
        "guard_shift",
    ] {
        registry.register(record_type, LedgerKind::None, OwnershipChain::via_subject());
    }

    registry
}

#[cfg(test)]
mod tests {
    use garrison_shared::types::RecordType;

    use super::*;
    use crate::visibility::Hop;

    #[test]
    fn test_roster_covers_the_record_types() {
        let registry = RecordTypeRegistry::defaults();
        assert!(registry.len() >= 18);
    }

    #[test]
    fn test_ledger_kinds_of_the_five_entry_sources() {
        let registry = RecordTypeRegistry::defaults();
        assert_eq!(
            registry.ledger_kind(&RecordType::from("leave_grant")),
            LedgerKind::Credit
        );
        for debit in ["leave_taken", "unauthorized_absence", "desertion", "detention", "extra_duty"] {
            assert_eq!(
                registry.ledger_kind(&RecordType::from(debit)),
                LedgerKind::Debit,
                "{debit} should imply debit entries"
            );
        }
        assert_eq!(
            registry.ledger_kind(&RecordType::from("event")),
            LedgerKind::None
        );
    }

    #[test]
    fn test_every_chain_is_one_of_the_three_shapes() {
        let registry = RecordTypeRegistry::defaults();
        for (record_type, config) in registry.iter() {
            let hops = config.chain.hops();
            assert!(
                hops == [Hop::Unit]
                    || hops == [Hop::Location, Hop::Unit]
                    || hops == [Hop::Subject, Hop::Location, Hop::Unit],
                "unexpected chain shape for {record_type}"
            );
        }
    }
}
