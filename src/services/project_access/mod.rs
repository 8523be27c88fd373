//! Project access service
//!
//! Resolve, decide, then write: every membership mutation is authorized
//! against the caller's current role before it reaches the store.

mod events;
mod service;
mod types;

pub use events::AccessSubscription;
pub use service::ProjectAccessService;
pub use types::{AccessEvent, AccessEventType, ProjectAccess};
