//! Presentation maps for the status tracks
//!
//! The transition table and these display maps must stay in lockstep: every
//! enum member has exactly one label and one style class. The exhaustive
//! `match` per map enforces that at compile time.

use shared::{BrokerStatus, ShipmentStatus};

/// Linear progress ordering for the customer-facing track.
/// `cancelled`/`rejected` are branches, not progress points, and are
/// excluded on purpose.
const PROGRESS_ORDER: [ShipmentStatus; 7] = [
    ShipmentStatus::Pending,
    ShipmentStatus::Quoted,
    ShipmentStatus::Approved,
    ShipmentStatus::Order,
    ShipmentStatus::InTransit,
    ShipmentStatus::Delivered,
    ShipmentStatus::Archived,
];

/// Human-readable label
pub fn label(status: ShipmentStatus) -> &'static str {
    match status {
        ShipmentStatus::Pending => "Pending",
        ShipmentStatus::Quoted => "Quoted",
        ShipmentStatus::Approved => "Approved",
        ShipmentStatus::Order => "Order",
        ShipmentStatus::InTransit => "In Transit",
        ShipmentStatus::Delivered => "Delivered",
        ShipmentStatus::Cancelled => "Cancelled",
        ShipmentStatus::Rejected => "Rejected",
        ShipmentStatus::Archived => "Archived",
    }
}

/// Badge style class consumed by the web frontend
pub fn style_class(status: ShipmentStatus) -> &'static str {
    match status {
        ShipmentStatus::Pending => "bg-yellow-100 text-yellow-800",
        ShipmentStatus::Quoted => "bg-blue-100 text-blue-800",
        ShipmentStatus::Approved => "bg-indigo-100 text-indigo-800",
        ShipmentStatus::Order => "bg-purple-100 text-purple-800",
        ShipmentStatus::InTransit => "bg-amber-100 text-amber-800",
        ShipmentStatus::Delivered => "bg-green-100 text-green-800",
        ShipmentStatus::Cancelled => "bg-gray-100 text-gray-600",
        ShipmentStatus::Rejected => "bg-red-100 text-red-800",
        ShipmentStatus::Archived => "bg-slate-100 text-slate-600",
    }
}

/// Human-readable label for the broker track
pub fn broker_label(status: BrokerStatus) -> &'static str {
    match status {
        BrokerStatus::InProgress => "In Progress",
        BrokerStatus::NeedMoreInfo => "Need More Info",
        BrokerStatus::Priced => "Priced",
        BrokerStatus::Dispatched => "Dispatched",
        BrokerStatus::PickedUp => "Picked Up",
        BrokerStatus::Delivered => "Delivered",
        BrokerStatus::Cancelled => "Cancelled",
    }
}

/// Badge style class for the broker track
pub fn broker_style_class(status: BrokerStatus) -> &'static str {
    match status {
        BrokerStatus::InProgress => "bg-blue-100 text-blue-800",
        BrokerStatus::NeedMoreInfo => "bg-orange-100 text-orange-800",
        BrokerStatus::Priced => "bg-indigo-100 text-indigo-800",
        BrokerStatus::Dispatched => "bg-purple-100 text-purple-800",
        BrokerStatus::PickedUp => "bg-amber-100 text-amber-800",
        BrokerStatus::Delivered => "bg-green-100 text-green-800",
        BrokerStatus::Cancelled => "bg-gray-100 text-gray-600",
    }
}

/// Position of `status` in the linear lifecycle, as a fraction in `[0, 1]`.
///
/// Drives the progress bar on the shipment detail page. Statuses outside the
/// linear order return `0.0`.
pub fn progress_fraction(status: ShipmentStatus) -> f64 {
    match PROGRESS_ORDER.iter().position(|s| *s == status) {
        Some(idx) => idx as f64 / (PROGRESS_ORDER.len() - 1) as f64,
        None => 0.0,
    }
}
