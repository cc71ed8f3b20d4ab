//! Unified error types for the portal core
//!
//! The core is a set of pure decision functions, so "no" is a normal answer:
//! every error here is a recoverable result value, never a panic. Disposition
//! (HTTP status mapping, user messaging, audit persistence) belongs to the
//! caller.
//!
//! # Error Code Ranges
//!
//! Codes follow the platform convention:
//! - E2xxx: permission errors
//! - E4xxx: quote/order status errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::role::Permission;
use crate::types::CompanyId;

/// Status transition failure
///
/// `from`/`to` carry the canonical lowercase form so one error type serves
/// both status tracks and serializes without extra mapping.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransitionError {
    /// Value is not a member of the status enumeration.
    /// Indicates a bug or tampering upstream, not a business rejection.
    #[error("unknown status value: {value:?}")]
    InvalidStatus { value: String },

    /// Well-formed target, but the edge is not in the transition table
    #[error("illegal status transition: {from} -> {to}")]
    IllegalTransition { from: String, to: String },
}

impl TransitionError {
    /// Stable error code for audit/telemetry tagging
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidStatus { .. } => "E4001",
            Self::IllegalTransition { .. } => "E4002",
        }
    }
}

/// Authorization failure
///
/// The two kinds are deliberately distinct: a rep can hold `EDIT_QUOTES` in
/// the abstract yet lack scope over one company's quote, and the audit trail
/// must say which of the two happened.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuthzError {
    /// Principal's role does not grant the required permission
    #[error("permission denied: {required}")]
    Forbidden { required: Permission },

    /// Permission held, but the resource's company is outside the
    /// principal's scope
    #[error("company scope violation: {required} on company {company_id}")]
    CompanyScopeViolation {
        required: Permission,
        company_id: CompanyId,
    },
}

impl AuthzError {
    /// Stable error code for audit/telemetry tagging
    pub fn code(&self) -> &'static str {
        match self {
            Self::Forbidden { .. } => "E2001",
            Self::CompanyScopeViolation { .. } => "E2002",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_error_display() {
        let err = TransitionError::IllegalTransition {
            from: "pending".into(),
            to: "delivered".into(),
        };
        assert_eq!(
            err.to_string(),
            "illegal status transition: pending -> delivered"
        );
        assert_eq!(err.code(), "E4002");
    }

    #[test]
    fn test_authz_error_codes_are_distinct() {
        let forbidden = AuthzError::Forbidden {
            required: Permission::EditQuotes,
        };
        let scope = AuthzError::CompanyScopeViolation {
            required: Permission::EditQuotes,
            company_id: CompanyId::from("company-c"),
        };
        assert_ne!(forbidden.code(), scope.code());
    }

    #[test]
    fn test_errors_serialize_with_kind_tag() {
        let err = TransitionError::InvalidStatus {
            value: "Quote".into(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "invalid_status");
        assert_eq!(json["value"], "Quote");
    }
}
