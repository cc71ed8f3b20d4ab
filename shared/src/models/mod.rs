//! Data models
//!
//! Shared between the portal core and the API layer. Status enumerations are
//! the canonical in-core representation; free-text status strings from legacy
//! rows are normalized and parsed once at the ingestion boundary.

pub mod principal;
pub mod role;
pub mod shipment;

// Re-exports
pub use principal::*;
pub use role::*;
pub use shipment::*;
