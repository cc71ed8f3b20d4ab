//! Audit entry construction
//!
//! The core only builds [`AuditEntry`] values; it never writes them. A
//! request handler persists the entry after applying the mutation (or drops
//! it, for callers that do not audit rejected attempts).

mod types;

pub use types::{AuditAction, AuditEntry};

use shared::util::{now_millis, snowflake_id};
use shared::{
    AuthzError, BrokerStatus, Principal, ShipmentRecord, ShipmentStatus, TransitionError,
};

impl AuditEntry {
    /// Entry for a successful customer-facing status change
    pub fn status_changed(
        record: &ShipmentRecord,
        actor: &Principal,
        new_status: ShipmentStatus,
        reason: Option<String>,
    ) -> Self {
        Self {
            id: snowflake_id(),
            resource_id: Some(record.id),
            action: AuditAction::StatusChanged,
            old_status: Some(record.status),
            new_status: Some(new_status),
            old_broker_status: None,
            new_broker_status: None,
            actor_id: Some(actor.id.clone()),
            timestamp: now_millis(),
            reason,
        }
    }

    /// Entry for a successful broker-side status change
    pub fn broker_status_changed(
        record: &ShipmentRecord,
        actor: &Principal,
        new_broker_status: BrokerStatus,
        reason: Option<String>,
    ) -> Self {
        Self {
            id: snowflake_id(),
            resource_id: Some(record.id),
            action: AuditAction::BrokerStatusChanged,
            old_status: None,
            new_status: None,
            old_broker_status: Some(record.broker_status),
            new_broker_status: Some(new_broker_status),
            actor_id: Some(actor.id.clone()),
            timestamp: now_millis(),
            reason,
        }
    }

    /// Entry for a transition the table rejected (security logging)
    pub fn transition_rejected(
        record: &ShipmentRecord,
        actor: &Principal,
        error: &TransitionError,
    ) -> Self {
        Self {
            id: snowflake_id(),
            resource_id: Some(record.id),
            action: AuditAction::TransitionRejected,
            old_status: Some(record.status),
            new_status: None,
            old_broker_status: Some(record.broker_status),
            new_broker_status: None,
            actor_id: Some(actor.id.clone()),
            timestamp: now_millis(),
            reason: Some(format!("{} {}", error.code(), error)),
        }
    }

    /// Entry for an authorization denial (security logging)
    pub fn access_denied(
        actor: &Principal,
        error: &AuthzError,
        resource_id: Option<i64>,
    ) -> Self {
        Self {
            id: snowflake_id(),
            resource_id,
            action: AuditAction::AccessDenied,
            old_status: None,
            new_status: None,
            old_broker_status: None,
            new_broker_status: None,
            actor_id: Some(actor.id.clone()),
            timestamp: now_millis(),
            reason: Some(format!("{} {}", error.code(), error)),
        }
    }
}
