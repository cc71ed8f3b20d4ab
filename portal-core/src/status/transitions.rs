//! Transition tables for both status tracks
//!
//! Each table is a single exhaustive `match`, so adding an enum member
//! without an entry fails to compile. Self-transitions are legal only if
//! listed, and none are listed. The two tracks are independent: a broker
//! transition never implies a customer-facing one.

use shared::{BrokerStatus, ShipmentRecord, ShipmentStatus, TransitionError};

/// Allowed next states for the customer-facing track
pub fn valid_transitions(current: ShipmentStatus) -> &'static [ShipmentStatus] {
    use ShipmentStatus::*;
    match current {
        Pending => &[Quoted, Cancelled, Rejected],
        Quoted => &[Approved, Rejected, Cancelled],
        Approved => &[Order, Cancelled],
        Order => &[InTransit, Cancelled],
        InTransit => &[Delivered, Cancelled],
        Delivered => &[Archived],
        Cancelled => &[Archived],
        Rejected => &[Archived],
        Archived => &[],
    }
}

/// Allowed next states for the broker-side track
pub fn valid_broker_transitions(current: BrokerStatus) -> &'static [BrokerStatus] {
    use BrokerStatus::*;
    match current {
        InProgress => &[NeedMoreInfo, Priced, Cancelled],
        NeedMoreInfo => &[InProgress, Priced, Cancelled],
        Priced => &[Dispatched, Cancelled],
        Dispatched => &[PickedUp, Cancelled],
        PickedUp => &[Delivered, Cancelled],
        Delivered => &[],
        Cancelled => &[],
    }
}

/// True iff `current -> target` is an edge in the transition table
pub fn can_transition(current: ShipmentStatus, target: ShipmentStatus) -> bool {
    valid_transitions(current).contains(&target)
}

/// Broker-track variant of [`can_transition`]
pub fn can_transition_broker(current: BrokerStatus, target: BrokerStatus) -> bool {
    valid_broker_transitions(current).contains(&target)
}

/// Status with no outgoing edges
pub fn is_terminal(status: ShipmentStatus) -> bool {
    valid_transitions(status).is_empty()
}

/// Broker status with no outgoing edges
pub fn is_terminal_broker(status: BrokerStatus) -> bool {
    valid_broker_transitions(status).is_empty()
}

/// Decide a customer-facing status change.
///
/// Pure: returns the status to persist, performs no mutation itself. The
/// caller applies the result with a compare-and-swap on `record.status` and
/// may persist an audit entry alongside.
pub fn transition_status(
    record: &ShipmentRecord,
    target: ShipmentStatus,
) -> Result<ShipmentStatus, TransitionError> {
    if can_transition(record.status, target) {
        Ok(target)
    } else {
        crate::security_log!(
            "WARN",
            "illegal_transition",
            shipment_id = record.id,
            from = record.status.as_str(),
            to = target.as_str()
        );
        Err(TransitionError::IllegalTransition {
            from: record.status.as_str().to_string(),
            to: target.as_str().to_string(),
        })
    }
}

/// Decide a broker-side status change; symmetric to [`transition_status`]
pub fn transition_broker_status(
    record: &ShipmentRecord,
    target: BrokerStatus,
) -> Result<BrokerStatus, TransitionError> {
    if can_transition_broker(record.broker_status, target) {
        Ok(target)
    } else {
        crate::security_log!(
            "WARN",
            "illegal_broker_transition",
            shipment_id = record.id,
            from = record.broker_status.as_str(),
            to = target.as_str()
        );
        Err(TransitionError::IllegalTransition {
            from: record.broker_status.as_str().to_string(),
            to: target.as_str().to_string(),
        })
    }
}
