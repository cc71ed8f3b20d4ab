//! NTS Client Connect Portal - core decision engines
//!
//! # Architecture overview
//!
//! Two independent, pure modules sit under every portal request handler:
//!
//! - **Status engine** (`status`): the quote/order lifecycle and the
//!   broker-side handling track, each with its own validated transition table
//! - **Access control** (`access`): role → permission grants plus
//!   company-scoped visibility, combined behind a single `authorize` call
//! - **Audit** (`audit`): append-only [`AuditEntry`] value objects the
//!   handler may persist after a transition attempt
//!
//! # Module structure
//!
//! ```text
//! portal-core/src/
//! ├── status/        # transition tables, normalization, presentation maps
//! ├── access/        # role permissions, company scope, authorize
//! └── audit/         # audit entry construction
//! ```
//!
//! Everything here is synchronous and side-effect free apart from tracing
//! events: the handler performs the actual persistence (with a
//! compare-and-swap on the status column) only after both checks pass.

pub mod access;
pub mod audit;
pub mod status;

// Re-export public entry points
pub use access::{
    CompanyScope, accessible_company_ids, authorize, can_access_company, has_all_permissions,
    has_any_permission, has_permission, permissions_for,
};
pub use audit::{AuditAction, AuditEntry};
pub use status::{
    broker_label, broker_style_class, can_transition, can_transition_broker, is_terminal,
    is_terminal_broker, is_valid_broker_status, is_valid_status, label, normalize_status,
    parse_broker_status, parse_status, progress_fraction, style_class, transition_broker_status,
    transition_status, valid_broker_transitions, valid_transitions,
};

// Re-export shared domain types for downstream convenience
pub use shared::{
    AuthzError, BrokerStatus, CompanyId, Permission, Principal, Role, ShipmentRecord,
    ShipmentStatus, TransitionError, UserType,
};

// Security logging macro - structured denial events on the "security" target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
