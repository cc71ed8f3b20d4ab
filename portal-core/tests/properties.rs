//! Property harness for the decision engines
//!
//! The enumerations are closed, so most "fuzzing" is exhaustive iteration;
//! proptest drives the open inputs (raw strings, company ids).

use portal_core::{
    BrokerStatus, CompanyId, Permission, Principal, Role, ShipmentStatus, authorize,
    can_access_company, can_transition, can_transition_broker, is_valid_status, normalize_status,
    valid_broker_transitions, valid_transitions,
};
use proptest::prelude::*;

#[test]
fn transition_check_is_total_over_both_enumerations() {
    // Exhaustive pairwise sweep: every pair answers, none panics.
    for from in ShipmentStatus::ALL {
        for to in ShipmentStatus::ALL {
            let allowed = can_transition(from, to);
            assert_eq!(allowed, valid_transitions(from).contains(&to));
        }
    }
    for from in BrokerStatus::ALL {
        for to in BrokerStatus::ALL {
            let allowed = can_transition_broker(from, to);
            assert_eq!(allowed, valid_broker_transitions(from).contains(&to));
        }
    }
}

#[test]
fn transition_tables_form_a_dag() {
    // No cycles: repeated stepping through any path must terminate. With 9
    // statuses a simple path longer than the enumeration implies a cycle.
    fn longest_path(from: ShipmentStatus, depth: usize) -> usize {
        assert!(depth <= ShipmentStatus::ALL.len(), "cycle reached via {from}");
        valid_transitions(from)
            .iter()
            .map(|&next| longest_path(next, depth + 1))
            .max()
            .unwrap_or(depth)
    }
    for status in ShipmentStatus::ALL {
        longest_path(status, 0);
    }

    fn longest_broker_path(from: BrokerStatus, depth: usize) -> usize {
        // NEED_MORE_INFO <-> IN_PROGRESS is a deliberate two-cycle in the
        // broker table; cap the walk there instead of asserting acyclicity.
        if depth > BrokerStatus::ALL.len() {
            return depth;
        }
        valid_broker_transitions(from)
            .iter()
            .map(|&next| longest_broker_path(next, depth + 1))
            .max()
            .unwrap_or(depth)
    }
    for status in BrokerStatus::ALL {
        longest_broker_path(status, 0);
    }
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in ".{0,64}") {
        let once = normalize_status(Some(&raw));
        let twice = normalize_status(Some(&once));
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn normalized_output_never_contains_whitespace_or_uppercase(raw in ".{0,64}") {
        let normalized = normalize_status(Some(&raw));
        prop_assert!(!normalized.chars().any(|c| c.is_whitespace()));
        prop_assert!(!normalized.chars().any(|c| c.is_uppercase()));
    }

    #[test]
    fn validity_implies_canonical_form(raw in ".{0,32}") {
        // is_valid_status is case-sensitive: whatever it accepts must
        // already be fixed under normalization.
        if is_valid_status(&raw) {
            prop_assert_eq!(normalize_status(Some(&raw)), raw);
        }
    }

    #[test]
    fn admin_scope_is_unbounded(company in "[a-z0-9-]{1,40}") {
        let admin = Principal::nts_user("admin-1", Role::Admin, []);
        let super_admin = Principal::nts_user("root-1", Role::SuperAdmin, []);
        let id = CompanyId::new(company);
        prop_assert!(can_access_company(&admin, &id));
        prop_assert!(can_access_company(&super_admin, &id));
    }

    #[test]
    fn rep_scope_admits_only_assignments(
        assigned in prop::collection::hash_set("[a-z]{1,12}", 0..5),
        probe in "[a-z]{1,12}",
    ) {
        let rep = Principal::nts_user(
            "rep-1",
            Role::SalesRep,
            assigned.iter().map(|c| CompanyId::new(c.clone())),
        );
        let expected = assigned.contains(&probe);
        prop_assert_eq!(can_access_company(&rep, &CompanyId::new(probe)), expected);
    }

    #[test]
    fn authorize_is_deterministic(
        role_idx in 0usize..6,
        perm_idx in 0usize..3,
        same_company in any::<bool>(),
    ) {
        let roles = [
            Role::Shipper,
            Role::SalesRep,
            Role::Manager,
            Role::Admin,
            Role::SuperAdmin,
            Role::Unknown,
        ];
        let perms = [
            Permission::ViewQuotes,
            Permission::EditQuotes,
            Permission::DatabaseAccess,
        ];
        let principal = Principal::nts_user("u-1", roles[role_idx], [CompanyId::from("a")]);
        let company = CompanyId::from(if same_company { "a" } else { "b" });

        let first = authorize(&principal, perms[perm_idx], Some(&company));
        let second = authorize(&principal, perms[perm_idx], Some(&company));
        prop_assert_eq!(first, second);
    }
}
