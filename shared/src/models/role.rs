//! Role and Permission Model
//!
//! Both enumerations are closed: permissions are atomic capability tokens
//! with no wildcard or hierarchy, and every role's grant set is spelled out
//! explicitly in `portal-core` (no inheritance between roles).

use serde::{Deserialize, Serialize};

/// Portal role (RBAC)
///
/// Unrecognized role strings from the identity provider deserialize to
/// [`Role::Unknown`], which is granted no permissions (fail closed) instead
/// of failing the request pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Company-side user who requests quotes
    #[default]
    Shipper,
    /// Broker staff pricing and working quotes
    SalesRep,
    /// Broker staff managing reps and company assignments
    Manager,
    /// Portal administrator
    Admin,
    /// Unrestricted administrator
    SuperAdmin,
    /// Catch-all for role strings this build does not know
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shipper => "shipper",
            Self::SalesRep => "sales_rep",
            Self::Manager => "manager",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Atomic capability token
///
/// Serialized in SCREAMING_SNAKE_CASE to match the permission rows stored by
/// the admin panel (e.g. `"VIEW_QUOTES"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    // === Quotes ===
    ViewQuotes,
    CreateQuotes,
    EditQuotes,
    DeleteQuotes,

    // === Orders ===
    ViewOrders,
    EditOrders,

    // === Companies ===
    ViewCompanies,
    EditCompanies,
    AssignSalesUsers,

    // === Users & roles ===
    ViewUsers,
    EditUsers,
    ManageRoles,

    // === System ===
    ViewAuditLogs,
    SystemConfig,
    DatabaseAccess,
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ViewQuotes => "VIEW_QUOTES",
            Self::CreateQuotes => "CREATE_QUOTES",
            Self::EditQuotes => "EDIT_QUOTES",
            Self::DeleteQuotes => "DELETE_QUOTES",
            Self::ViewOrders => "VIEW_ORDERS",
            Self::EditOrders => "EDIT_ORDERS",
            Self::ViewCompanies => "VIEW_COMPANIES",
            Self::EditCompanies => "EDIT_COMPANIES",
            Self::AssignSalesUsers => "ASSIGN_SALES_USERS",
            Self::ViewUsers => "VIEW_USERS",
            Self::EditUsers => "EDIT_USERS",
            Self::ManageRoles => "MANAGE_ROLES",
            Self::ViewAuditLogs => "VIEW_AUDIT_LOGS",
            Self::SystemConfig => "SYSTEM_CONFIG",
            Self::DatabaseAccess => "DATABASE_ACCESS",
        };
        write!(f, "{}", s)
    }
}
