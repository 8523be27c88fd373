//! # TeamHub RBAC
//!
//! Project-scoped role-based access control for TeamHub.
//!
//! Every user holds at most one role per project. Roles form a strict
//! hierarchy (`LEAD` > `MEMBER` > `OBSERVER`) and each role maps to a fixed
//! set of boolean capabilities. Non-members who are authenticated are
//! treated as observers; unauthenticated callers get nothing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use teamhub_rbac::{
//!     AccessConfig, Identity, InMemoryMembershipStore, ProjectAccessService, ProjectMember,
//!     ProjectRole, SystemRole,
//! };
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let project = Uuid::new_v4();
//!     let lead = Identity::authenticated(Uuid::new_v4(), SystemRole::User);
//!     let store = InMemoryMembershipStore::from_members(vec![ProjectMember::new(
//!         project,
//!         lead.id,
//!         ProjectRole::Lead,
//!     )])?;
//!
//!     let service = ProjectAccessService::new(AccessConfig::default(), Arc::new(store));
//!     let access = service.permissions_for(Some(&lead), Some(project)).await?;
//!     assert!(access.permissions.manage_members);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::membership::{MembershipResolver, ProjectAccessState, RoleResolution};
pub use auth::rbac::{
    Capability, OwnedAction, PermissionSet, can_manage_user, can_modify,
    has_higher_or_equal_role,
};
pub use config::{AccessConfig, Config, LoggingConfig};
pub use core::models::{AssignedRole, Identity, ProjectMember, ProjectRole, SystemRole};
pub use services::{AccessEvent, AccessEventType, ProjectAccessService};
pub use storage::{InMemoryMembershipStore, MembershipStore};
pub use utils::error::{GatewayError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version
    pub version: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            git_hash: env!("GIT_HASH"),
            build_time: env!("BUILD_TIME"),
        }
    }
}

/// Get build information
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
