//! Services module
//!
//! This module contains the membership lifecycle service built on the
//! resolver and permission deriver.

pub mod project_access;

pub use project_access::{
    AccessEvent, AccessEventType, AccessSubscription, ProjectAccess, ProjectAccessService,
};
