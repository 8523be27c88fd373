//! Long-lived view of one identity's access to one project

use super::resolver::{MembershipResolver, RoleResolution};
use crate::auth::rbac::PermissionSet;
use crate::core::models::{AssignedRole, Identity};
use crate::utils::error::{GatewayError, Result};
use tracing::warn;
use uuid::Uuid;

/// Current role, membership flag and last lookup error
///
/// A failed refresh records the error and, when `retain_on_error` is set,
/// keeps the previously known role so a transient outage does not drop
/// privileges.
#[derive(Debug, Clone)]
pub struct ProjectAccessState {
    role: Option<AssignedRole>,
    is_project_member: bool,
    error: Option<String>,
    retain_on_error: bool,
}

impl Default for ProjectAccessState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ProjectAccessState {
    pub fn new(retain_on_error: bool) -> Self {
        Self {
            role: None,
            is_project_member: false,
            error: None,
            retain_on_error,
        }
    }

    /// Re-resolve and update the state
    ///
    /// The lookup error is recorded and also returned.
    pub async fn refresh(
        &mut self,
        resolver: &MembershipResolver,
        project_id: Option<Uuid>,
        identity: Option<&Identity>,
    ) -> Result<()> {
        match resolver.resolve(project_id, identity).await {
            Ok(resolution) => {
                self.apply_resolution(&resolution);
                Ok(())
            }
            Err(e) => {
                self.record_failure(&e);
                Err(e)
            }
        }
    }

    /// Apply a successful lookup
    pub fn apply_resolution(&mut self, resolution: &RoleResolution) {
        self.role = resolution.role();
        self.is_project_member = resolution.is_project_member();
        self.error = None;
    }

    /// Apply a failed lookup
    pub fn record_failure(&mut self, error: &GatewayError) {
        warn!(error = %error, retained = self.retain_on_error, "Project access refresh failed");
        self.error = Some(error.to_string());
        if !self.retain_on_error {
            self.role = None;
            self.is_project_member = false;
        }
    }

    pub fn role(&self) -> Option<&AssignedRole> {
        self.role.as_ref()
    }

    pub fn is_project_member(&self) -> bool {
        self.is_project_member
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Permissions for the current role, empty without one
    pub fn permissions(&self) -> PermissionSet {
        self.role
            .as_ref()
            .map_or_else(PermissionSet::none, PermissionSet::for_assigned)
    }
}
