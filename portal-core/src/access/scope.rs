//! Company scope derivation
//!
//! The set of companies a principal may act upon. Always derived from the
//! principal at call time, never stored: rep/company assignments change
//! between requests and arrive fresh in each `Principal`.

use serde::{Deserialize, Serialize};
use shared::{CompanyId, Principal, Role, UserType};
use std::collections::HashSet;

/// Companies a principal may act upon
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "company_ids", rename_all = "snake_case")]
pub enum CompanyScope {
    /// Unbounded: admin-level principals see every company.
    /// Represented as a marker, not an enumerated list.
    Any,
    /// Explicit company id set (possibly empty)
    Companies(HashSet<CompanyId>),
}

impl CompanyScope {
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn contains(&self, company_id: &CompanyId) -> bool {
        match self {
            Self::Any => true,
            Self::Companies(ids) => ids.contains(company_id),
        }
    }
}

/// Derive the company scope for a principal.
///
/// - `admin` / `super_admin`: unbounded
/// - shipper-type: the home company, or empty if none is set
/// - staff-type (`sales_rep` / `manager`): the assigned company set
pub fn accessible_company_ids(principal: &Principal) -> CompanyScope {
    match principal.role {
        Role::Admin | Role::SuperAdmin => CompanyScope::Any,
        _ => match principal.user_type {
            UserType::Shipper => {
                CompanyScope::Companies(principal.company_id.iter().cloned().collect())
            }
            UserType::NtsUser => {
                CompanyScope::Companies(principal.assigned_company_ids.clone())
            }
        },
    }
}

/// True iff `company_id` falls inside the principal's scope
pub fn can_access_company(principal: &Principal, company_id: &CompanyId) -> bool {
    accessible_company_ids(principal).contains(company_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_scope_is_unbounded() {
        let admin = Principal::nts_user("admin-1", Role::Admin, []);
        assert!(accessible_company_ids(&admin).is_any());
        assert!(can_access_company(&admin, &CompanyId::from("anything")));
    }

    #[test]
    fn test_shipper_scope_is_home_company() {
        let shipper = Principal::shipper("s-1", Some(CompanyId::from("company-a")));
        assert!(can_access_company(&shipper, &CompanyId::from("company-a")));
        assert!(!can_access_company(&shipper, &CompanyId::from("company-b")));
    }

    #[test]
    fn test_shipper_without_company_has_empty_scope() {
        let shipper = Principal::shipper("s-2", None);
        let scope = accessible_company_ids(&shipper);
        assert_eq!(scope, CompanyScope::Companies(HashSet::new()));
        assert!(!can_access_company(&shipper, &CompanyId::from("company-a")));
    }

    #[test]
    fn test_rep_scope_is_assignment_set() {
        let rep = Principal::nts_user(
            "rep-1",
            Role::SalesRep,
            [CompanyId::from("a"), CompanyId::from("b")],
        );
        assert!(can_access_company(&rep, &CompanyId::from("a")));
        assert!(can_access_company(&rep, &CompanyId::from("b")));
        assert!(!can_access_company(&rep, &CompanyId::from("c")));
    }

    #[test]
    fn test_scope_keys_on_role_not_user_type() {
        // An admin whose row happens to carry assignments is still unbounded.
        let admin = Principal::nts_user("admin-2", Role::SuperAdmin, [CompanyId::from("a")]);
        assert!(can_access_company(&admin, &CompanyId::from("zzz")));
    }
}
