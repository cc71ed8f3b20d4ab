//! Shipment Model
//!
//! A shipment record carries two independent status tracks:
//! - [`ShipmentStatus`]: the customer-facing quote/order lifecycle
//! - [`BrokerStatus`]: internal broker-side handling
//!
//! The tracks are deliberately not synchronized; a broker marking a load
//! `delivered` does not move the customer-facing status.

use crate::types::{CompanyId, Timestamp};
use serde::{Deserialize, Serialize};

/// Customer-facing quote/order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    /// Quote request submitted, awaiting pricing
    #[default]
    Pending,
    /// Priced by a broker, awaiting customer decision
    Quoted,
    /// Customer accepted the quote
    Approved,
    /// Converted to an order
    Order,
    /// Picked up, en route
    InTransit,
    /// Delivered to destination
    Delivered,
    /// Cancelled by either side
    Cancelled,
    /// Quote rejected by the customer
    Rejected,
    /// Closed out, read-only
    Archived,
}

impl ShipmentStatus {
    /// Every member of the enumeration, in lifecycle order
    pub const ALL: [ShipmentStatus; 9] = [
        Self::Pending,
        Self::Quoted,
        Self::Approved,
        Self::Order,
        Self::InTransit,
        Self::Delivered,
        Self::Cancelled,
        Self::Rejected,
        Self::Archived,
    ];

    /// Canonical lowercase-with-underscores form (matches the serde rename)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Quoted => "quoted",
            Self::Approved => "approved",
            Self::Order => "order",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Rejected => "rejected",
            Self::Archived => "archived",
        }
    }

    /// Case-sensitive lookup on the canonical form.
    ///
    /// Callers holding raw user/legacy input should run it through
    /// `normalize_status` first.
    pub fn from_canonical(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Internal broker-side handling status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum BrokerStatus {
    /// Being worked by a broker
    #[default]
    InProgress,
    /// Waiting on the customer for details
    NeedMoreInfo,
    /// Price attached, quote sent back
    Priced,
    /// Carrier dispatched
    Dispatched,
    /// Freight picked up
    PickedUp,
    /// Delivered (broker-side confirmation)
    Delivered,
    /// Dropped from the broker queue
    Cancelled,
}

impl BrokerStatus {
    /// Every member of the enumeration
    pub const ALL: [BrokerStatus; 7] = [
        Self::InProgress,
        Self::NeedMoreInfo,
        Self::Priced,
        Self::Dispatched,
        Self::PickedUp,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Canonical lowercase-with-underscores form (matches the serde rename)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::NeedMoreInfo => "need_more_info",
            Self::Priced => "priced",
            Self::Dispatched => "dispatched",
            Self::PickedUp => "picked_up",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Case-sensitive lookup on the canonical form
    pub fn from_canonical(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for BrokerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shipment entity (quote/order row as the core sees it)
///
/// Status fields are mutated exclusively through the status engine's
/// transition functions; the persistence layer applies the result with a
/// compare-and-swap on the old status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub id: i64,
    /// Owning (shipper) company
    pub company_id: CompanyId,
    pub status: ShipmentStatus,
    pub broker_status: BrokerStatus,
    /// Assigned sales rep, if any
    pub assigned_sales_user: Option<String>,
    pub created_at: Timestamp,
}

impl ShipmentRecord {
    /// Fresh quote request: `pending` / `in_progress`
    pub fn new(company_id: CompanyId) -> Self {
        Self {
            id: crate::util::snowflake_id(),
            company_id,
            status: ShipmentStatus::default(),
            broker_status: BrokerStatus::default(),
            assigned_sales_user: None,
            created_at: crate::util::now_millis(),
        }
    }
}
