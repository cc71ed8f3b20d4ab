//! Principal Model
//!
//! The authenticated actor as materialized by the session layer. Role and
//! company assignments are loaded fresh per request (reps can be reassigned
//! between requests), so the core treats a `Principal` as immutable for the
//! life of one call and never caches it.

use crate::models::role::Role;
use crate::types::CompanyId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// User population a principal belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// Company-side user
    Shipper,
    /// Broker/staff user
    NtsUser,
}

/// Authenticated actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub user_type: UserType,
    pub role: Role,
    /// Home company (shipper-type principals)
    pub company_id: Option<CompanyId>,
    /// Companies explicitly assigned to this principal
    /// (staff with restricted scope; loaded from the company/sales join)
    pub assigned_company_ids: HashSet<CompanyId>,
}

impl Principal {
    /// Shipper-type principal bound to its home company
    pub fn shipper(id: impl Into<String>, company_id: Option<CompanyId>) -> Self {
        Self {
            id: id.into(),
            user_type: UserType::Shipper,
            role: Role::Shipper,
            company_id,
            assigned_company_ids: HashSet::new(),
        }
    }

    /// Staff-type principal with an explicit company assignment set
    pub fn nts_user(
        id: impl Into<String>,
        role: Role,
        assigned_company_ids: impl IntoIterator<Item = CompanyId>,
    ) -> Self {
        Self {
            id: id.into(),
            user_type: UserType::NtsUser,
            role,
            company_id: None,
            assigned_company_ids: assigned_company_ids.into_iter().collect(),
        }
    }
}
