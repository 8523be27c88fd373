//! Membership resolver

use crate::auth::rbac::PermissionSet;
use crate::core::models::{AssignedRole, Identity, ProjectMember, ProjectRole};
use crate::storage::MembershipStore;
use crate::utils::error::{GatewayError, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Outcome of a successful membership lookup
///
/// A failed lookup is an `Err`, never one of these variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoleResolution {
    /// No project, no identity, or an identity that is not authenticated
    Unauthenticated,
    /// The identity holds a membership in the project
    Member { membership: ProjectMember },
    /// The identity is authenticated but not a member
    NonMember,
}

impl RoleResolution {
    /// Effective role; non-members are treated as observers
    pub fn role(&self) -> Option<AssignedRole> {
        match self {
            RoleResolution::Unauthenticated => None,
            RoleResolution::Member { membership } => Some(membership.role.clone()),
            RoleResolution::NonMember => Some(AssignedRole::Known(ProjectRole::Observer)),
        }
    }

    pub fn is_project_member(&self) -> bool {
        matches!(self, RoleResolution::Member { .. })
    }

    /// Derived permissions; empty when there is no role
    pub fn permissions(&self) -> PermissionSet {
        self.role()
            .map_or_else(PermissionSet::none, |role| PermissionSet::for_assigned(&role))
    }
}

/// Resolves an identity's role in a project from its membership list
#[derive(Clone)]
pub struct MembershipResolver {
    store: Arc<dyn MembershipStore>,
}

impl std::fmt::Debug for MembershipResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MembershipResolver").finish_non_exhaustive()
    }
}

impl MembershipResolver {
    /// Create a resolver over a membership store
    pub fn new(store: Arc<dyn MembershipStore>) -> Self {
        Self { store }
    }

    /// Underlying store
    pub fn store(&self) -> &Arc<dyn MembershipStore> {
        &self.store
    }

    /// Resolve the role of `identity` in `project_id`
    ///
    /// Reads the caller's complete membership list and scans it for the
    /// project. Any failure of that read is returned as
    /// [`GatewayError::MembershipFetch`].
    pub async fn resolve(
        &self,
        project_id: Option<Uuid>,
        identity: Option<&Identity>,
    ) -> Result<RoleResolution> {
        let (Some(project_id), Some(identity)) = (project_id, identity) else {
            debug!("Missing project or identity, no project role");
            return Ok(RoleResolution::Unauthenticated);
        };

        if !identity.authenticated {
            debug!(user_id = %identity.id, "Identity not authenticated, no project role");
            return Ok(RoleResolution::Unauthenticated);
        }

        let memberships = self
            .store
            .get_my_projects(identity.id)
            .await
            .map_err(|e| {
                warn!(user_id = %identity.id, project_id = %project_id, error = %e, "Membership lookup failed");
                match e {
                    GatewayError::MembershipFetch(_) => e,
                    other => GatewayError::membership_fetch(other.to_string()),
                }
            })?;

        let resolution = match memberships
            .into_iter()
            .find(|membership| membership.is_for_project(project_id))
        {
            Some(membership) => RoleResolution::Member { membership },
            None => RoleResolution::NonMember,
        };

        debug!(
            user_id = %identity.id,
            project_id = %project_id,
            member = resolution.is_project_member(),
            "Resolved project role"
        );
        Ok(resolution)
    }
}
