//! Audit log types
//!
//! Core data structures for the portal audit trail. Entries are immutable
//! value objects: the core constructs them once per transition attempt and
//! the caller appends them to the audit sink (table, file, or log stream).

use serde::{Deserialize, Serialize};
use shared::{BrokerStatus, ShipmentStatus, Timestamp};

/// Audit action type (enum, not free text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Customer-facing status changed
    StatusChanged,
    /// Broker-side status changed
    BrokerStatusChanged,
    /// Transition attempted and rejected by the table
    TransitionRejected,
    /// Authorization denied (permission or company scope)
    AccessDenied,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::StatusChanged => "status_changed",
            Self::BrokerStatusChanged => "broker_status_changed",
            Self::TransitionRejected => "transition_rejected",
            Self::AccessDenied => "access_denied",
        };
        write!(f, "{}", s)
    }
}

/// Audit log entry (immutable, append-only)
///
/// Status fields are `None` on the track the entry does not concern; an
/// `access_denied` entry carries neither.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditEntry {
    /// Snowflake id, unique per entry
    pub id: i64,
    /// Shipment record the entry concerns, if any
    pub resource_id: Option<i64>,
    pub action: AuditAction,
    pub old_status: Option<ShipmentStatus>,
    pub new_status: Option<ShipmentStatus>,
    pub old_broker_status: Option<BrokerStatus>,
    pub new_broker_status: Option<BrokerStatus>,
    /// Acting principal (None for system events)
    pub actor_id: Option<String>,
    /// Unix milliseconds
    pub timestamp: Timestamp,
    /// Free-text reason supplied by the actor, or the denial code
    pub reason: Option<String>,
}
