//! Status engine
//!
//! Owns the two status tracks of a shipment record and enforces legal
//! transitions over them. All functions here are pure and total: malformed
//! input comes back as a typed [`TransitionError`], never a panic.
//!
//! Legacy rows carry inconsistent free-text statuses ("Quote", "In Transit ",
//! mixed case). Those are normalized and parsed exactly once at the ingestion
//! boundary via [`normalize_status`] / [`parse_status`]; everything past that
//! boundary works on the enums.

mod display;
mod transitions;

pub use display::{
    broker_label, broker_style_class, label, progress_fraction, style_class,
};
pub use transitions::{
    can_transition, can_transition_broker, is_terminal, is_terminal_broker,
    transition_broker_status, transition_status, valid_broker_transitions, valid_transitions,
};

use shared::{BrokerStatus, ShipmentStatus, TransitionError};

/// Normalize a raw status string to canonical form.
///
/// Lowercases and collapses whitespace runs (including surrounding
/// whitespace) to a single underscore; `None` or blank input yields the
/// empty string. Pure and idempotent.
pub fn normalize_status(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    raw.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Membership test against the canonical status enumeration.
///
/// Case-sensitive; run raw input through [`normalize_status`] first.
pub fn is_valid_status(value: &str) -> bool {
    ShipmentStatus::from_canonical(value).is_some()
}

/// Membership test against the canonical broker status enumeration
pub fn is_valid_broker_status(value: &str) -> bool {
    BrokerStatus::from_canonical(value).is_some()
}

/// Boundary conversion from free text to [`ShipmentStatus`].
///
/// Normalizes, then requires an exact member of the enumeration; anything
/// else is [`TransitionError::InvalidStatus`]. Unrecognized legacy values are
/// rejected here rather than carried through the engine.
pub fn parse_status(raw: &str) -> Result<ShipmentStatus, TransitionError> {
    let normalized = normalize_status(Some(raw));
    ShipmentStatus::from_canonical(&normalized).ok_or(TransitionError::InvalidStatus {
        value: raw.to_string(),
    })
}

/// Boundary conversion from free text to [`BrokerStatus`]
pub fn parse_broker_status(raw: &str) -> Result<BrokerStatus, TransitionError> {
    let normalized = normalize_status(Some(raw));
    BrokerStatus::from_canonical(&normalized).ok_or(TransitionError::InvalidStatus {
        value: raw.to_string(),
    })
}
