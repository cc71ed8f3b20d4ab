//! Shared types for the Client Connect portal core
//!
//! Common types used across the portal crates: status enumerations,
//! principal/role/permission models, the audit entry record, error types,
//! and utility types.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AuthzError, TransitionError};
pub use models::{
    BrokerStatus, Permission, Principal, Role, ShipmentRecord, ShipmentStatus, UserType,
};
pub use types::{CompanyId, Timestamp};
