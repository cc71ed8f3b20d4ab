//! Access control
//!
//! Role → permission grants and company-scoped visibility, combined behind
//! [`authorize`]. The two checks stay separate on purpose: a rep can hold
//! `EDIT_QUOTES` in the abstract yet lack scope over one company's quote,
//! and the audit trail must distinguish the two denials.
//!
//! Stateless per call. Every "may this button render / may this endpoint
//! run" decision in the portal goes through this table, never an ad hoc
//! role comparison.

mod permissions;
mod scope;

pub use permissions::{
    ADMIN_PERMISSIONS, MANAGER_PERMISSIONS, SALES_REP_PERMISSIONS, SHIPPER_PERMISSIONS,
    SUPER_ADMIN_PERMISSIONS, has_all_permissions, has_any_permission, has_permission,
    permissions_for,
};
pub use scope::{CompanyScope, accessible_company_ids, can_access_company};

use shared::{AuthzError, CompanyId, Permission, Principal};

/// Composite authorization check.
///
/// Requires the permission first; if `resource_company_id` is supplied,
/// additionally requires company scope over it. Returns
/// [`AuthzError::Forbidden`] or [`AuthzError::CompanyScopeViolation`] as
/// distinct kinds; the HTTP layer maps both to 403, the audit sink does not.
pub fn authorize(
    principal: &Principal,
    permission: Permission,
    resource_company_id: Option<&CompanyId>,
) -> Result<(), AuthzError> {
    if !has_permission(principal, permission) {
        crate::security_log!(
            "WARN",
            "permission_denied",
            principal_id = principal.id.as_str(),
            role = principal.role.as_str(),
            required_permission = permission.to_string()
        );
        return Err(AuthzError::Forbidden {
            required: permission,
        });
    }

    if let Some(company_id) = resource_company_id {
        if !can_access_company(principal, company_id) {
            crate::security_log!(
                "WARN",
                "company_scope_violation",
                principal_id = principal.id.as_str(),
                role = principal.role.as_str(),
                required_permission = permission.to_string(),
                company_id = company_id.as_str()
            );
            return Err(AuthzError::CompanyScopeViolation {
                required: permission,
                company_id: company_id.clone(),
            });
        }
    }

    Ok(())
}
