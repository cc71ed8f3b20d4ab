//! Permission Definitions
//!
//! Role → permission grants for the portal. Each role's set is spelled out
//! literally, matching the rows the admin migration seeds: there is no
//! inheritance between roles, and a grant exists only if it appears in the
//! slice for that role.

use shared::{Permission, Principal, Role};

/// Shipper (company-side) permissions: work their own quotes and orders
pub const SHIPPER_PERMISSIONS: &[Permission] = &[
    Permission::ViewQuotes,
    Permission::CreateQuotes,
    Permission::EditQuotes,
    Permission::ViewOrders,
];

/// Sales rep permissions: price and work quotes for assigned companies
pub const SALES_REP_PERMISSIONS: &[Permission] = &[
    Permission::ViewQuotes,
    Permission::CreateQuotes,
    Permission::EditQuotes,
    Permission::DeleteQuotes,
    Permission::ViewOrders,
    Permission::EditOrders,
    Permission::ViewCompanies,
];

/// Manager permissions: everything a rep has, plus company and rep management
pub const MANAGER_PERMISSIONS: &[Permission] = &[
    Permission::ViewQuotes,
    Permission::CreateQuotes,
    Permission::EditQuotes,
    Permission::DeleteQuotes,
    Permission::ViewOrders,
    Permission::EditOrders,
    Permission::ViewCompanies,
    Permission::EditCompanies,
    Permission::AssignSalesUsers,
    Permission::ViewUsers,
    Permission::ViewAuditLogs,
];

/// Admin permissions: portal administration over every company
pub const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::ViewQuotes,
    Permission::CreateQuotes,
    Permission::EditQuotes,
    Permission::DeleteQuotes,
    Permission::ViewOrders,
    Permission::EditOrders,
    Permission::ViewCompanies,
    Permission::EditCompanies,
    Permission::AssignSalesUsers,
    Permission::ViewUsers,
    Permission::EditUsers,
    Permission::ManageRoles,
    Permission::ViewAuditLogs,
    Permission::SystemConfig,
];

/// Super admin permissions: admin plus direct database access
pub const SUPER_ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::ViewQuotes,
    Permission::CreateQuotes,
    Permission::EditQuotes,
    Permission::DeleteQuotes,
    Permission::ViewOrders,
    Permission::EditOrders,
    Permission::ViewCompanies,
    Permission::EditCompanies,
    Permission::AssignSalesUsers,
    Permission::ViewUsers,
    Permission::EditUsers,
    Permission::ManageRoles,
    Permission::ViewAuditLogs,
    Permission::SystemConfig,
    Permission::DatabaseAccess,
];

/// Grant set for a role. [`Role::Unknown`] gets the empty set (fail closed).
pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::Shipper => SHIPPER_PERMISSIONS,
        Role::SalesRep => SALES_REP_PERMISSIONS,
        Role::Manager => MANAGER_PERMISSIONS,
        Role::Admin => ADMIN_PERMISSIONS,
        Role::SuperAdmin => SUPER_ADMIN_PERMISSIONS,
        Role::Unknown => &[],
    }
}

/// True iff the principal's role grants `permission`
pub fn has_permission(principal: &Principal, permission: Permission) -> bool {
    permissions_for(principal.role).contains(&permission)
}

/// True iff the role grants at least one of `permissions`
pub fn has_any_permission(principal: &Principal, permissions: &[Permission]) -> bool {
    permissions
        .iter()
        .any(|p| has_permission(principal, *p))
}

/// True iff the role grants every one of `permissions`
pub fn has_all_permissions(principal: &Principal, permissions: &[Permission]) -> bool {
    permissions
        .iter()
        .all(|p| has_permission(principal, *p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CompanyId;

    fn principal_with_role(role: Role) -> Principal {
        Principal::nts_user("user-1", role, [CompanyId::from("a")])
    }

    #[test]
    fn test_seed_grants() {
        assert!(has_permission(
            &principal_with_role(Role::SuperAdmin),
            Permission::DatabaseAccess
        ));
        assert!(!has_permission(
            &Principal::shipper("s-1", Some(CompanyId::from("a"))),
            Permission::DatabaseAccess
        ));
        assert!(!has_permission(
            &principal_with_role(Role::Admin),
            Permission::DatabaseAccess
        ));
        assert!(has_permission(
            &principal_with_role(Role::SalesRep),
            Permission::EditQuotes
        ));
        assert!(!has_permission(
            &principal_with_role(Role::SalesRep),
            Permission::ManageRoles
        ));
    }

    #[test]
    fn test_unknown_role_has_no_grants() {
        let principal = principal_with_role(Role::Unknown);
        assert!(permissions_for(Role::Unknown).is_empty());
        for permission in SUPER_ADMIN_PERMISSIONS {
            assert!(!has_permission(&principal, *permission));
        }
    }

    #[test]
    fn test_grant_lists_have_no_duplicates() {
        for role in [
            Role::Shipper,
            Role::SalesRep,
            Role::Manager,
            Role::Admin,
            Role::SuperAdmin,
        ] {
            let grants = permissions_for(role);
            for (i, p) in grants.iter().enumerate() {
                assert!(!grants[i + 1..].contains(p), "{role}: duplicate {p}");
            }
        }
    }

    #[test]
    fn test_any_and_all_combinators() {
        let rep = principal_with_role(Role::SalesRep);
        assert!(has_any_permission(
            &rep,
            &[Permission::ManageRoles, Permission::ViewQuotes]
        ));
        assert!(!has_all_permissions(
            &rep,
            &[Permission::ManageRoles, Permission::ViewQuotes]
        ));
        assert!(has_all_permissions(
            &rep,
            &[Permission::ViewQuotes, Permission::EditQuotes]
        ));
        assert!(!has_any_permission(&rep, &[]));
        assert!(has_all_permissions(&rep, &[]));
    }
}
