//! Main project access service implementation

use super::types::{AccessEvent, AccessEventType, ProjectAccess};
use crate::auth::membership::{MembershipResolver, RoleResolution};
use crate::auth::rbac::{Capability, PermissionSet, can_manage_assigned};
use crate::config::AccessConfig;
use crate::core::models::{Identity, ProjectMember, ProjectRole};
use crate::storage::MembershipStore;
use crate::utils::error::{GatewayError, Result};
use crate::utils::logging::SecurityLogger;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};
use uuid::Uuid;

/// Capacity of the membership event channel
const EVENT_CHANNEL_CAPACITY: usize = 1000;

/// Authorizes and applies membership changes
#[derive(Debug, Clone)]
pub struct ProjectAccessService {
    config: Arc<AccessConfig>,
    resolver: MembershipResolver,
    pub(super) event_sender: broadcast::Sender<AccessEvent>,
}

impl ProjectAccessService {
    /// Create a new project access service
    pub fn new(config: AccessConfig, store: Arc<dyn MembershipStore>) -> Self {
        let (event_sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            config: Arc::new(config),
            resolver: MembershipResolver::new(store),
            event_sender,
        }
    }

    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    pub fn resolver(&self) -> &MembershipResolver {
        &self.resolver
    }

    fn store(&self) -> &Arc<dyn MembershipStore> {
        self.resolver.store()
    }

    /// Whether the identity qualifies for the system admin override
    fn is_override_admin(&self, identity: &Identity) -> bool {
        self.config.system_admin_override
            && identity.authenticated
            && self.config.is_admin_role(&identity.system_role)
    }

    /// Resolve an identity's role and permissions in a project
    pub async fn permissions_for(
        &self,
        identity: Option<&Identity>,
        project_id: Option<Uuid>,
    ) -> Result<ProjectAccess> {
        let resolution = self.resolver.resolve(project_id, identity).await?;

        let via_system_admin = !matches!(resolution, RoleResolution::Unauthenticated)
            && identity.is_some_and(|identity| self.is_override_admin(identity));

        let permissions = if via_system_admin {
            PermissionSet::all()
        } else {
            resolution.permissions()
        };

        Ok(ProjectAccess {
            project_id,
            user_id: identity.map(|identity| identity.id),
            resolution,
            permissions,
            via_system_admin,
        })
    }

    /// Resolve the actor's access and require one capability
    async fn authorize(
        &self,
        actor: &Identity,
        project_id: Uuid,
        capability: Capability,
    ) -> Result<ProjectAccess> {
        let access = self.permissions_for(Some(actor), Some(project_id)).await?;

        if !access.is_authenticated() {
            SecurityLogger::log_authz_event(
                actor.id,
                project_id,
                capability.as_str(),
                false,
                Some("unauthenticated"),
            );
            return Err(GatewayError::unauthorized("Authentication required"));
        }

        let granted = access.permissions.allows(capability);
        SecurityLogger::log_authz_event(
            actor.id,
            project_id,
            capability.as_str(),
            granted,
            (!granted).then_some("missing permission"),
        );

        if !granted {
            return Err(GatewayError::forbidden(format!(
                "Missing permission: {}",
                capability
            )));
        }

        Ok(access)
    }

    /// Check the hierarchy gate between the actor and the target member
    fn ensure_can_manage(
        &self,
        access: &ProjectAccess,
        actor: &Identity,
        target: &ProjectMember,
        capability: Capability,
    ) -> Result<()> {
        if access.via_system_admin {
            return Ok(());
        }

        let allowed = access
            .role()
            .is_some_and(|role| can_manage_assigned(&role, &target.role));

        if !allowed {
            SecurityLogger::log_authz_event(
                actor.id,
                target.project_id,
                capability.as_str(),
                false,
                Some("target role not below actor role"),
            );
            return Err(GatewayError::forbidden(format!(
                "Cannot manage a member with role {}",
                target.role
            )));
        }

        Ok(())
    }

    async fn find_member(&self, project_id: Uuid, user_id: Uuid) -> Result<ProjectMember> {
        self.store()
            .get_membership(project_id, user_id)
            .await?
            .ok_or_else(|| {
                GatewayError::not_found(format!(
                    "User {} is not a member of project {}",
                    user_id, project_id
                ))
            })
    }

    /// Add a user to a project with the given role
    pub async fn add_member(
        &self,
        actor: &Identity,
        project_id: Uuid,
        user_id: Uuid,
        role: ProjectRole,
    ) -> Result<ProjectMember> {
        self.authorize(actor, project_id, Capability::AddMembers)
            .await?;

        let member = self
            .store()
            .add_member(ProjectMember::new(project_id, user_id, role))
            .await?;

        SecurityLogger::log_membership_change(
            actor.id,
            project_id,
            user_id,
            &format!("added as {}", role),
        );
        self.publish(actor, project_id, user_id, AccessEventType::MemberAdded { role });

        Ok(member)
    }

    /// Replace a member's role
    ///
    /// The actor must hold `change_roles` and outrank the member's current
    /// role. The write is rejected with `Conflict` if the record changed
    /// after it was read.
    pub async fn change_member_role(
        &self,
        actor: &Identity,
        project_id: Uuid,
        user_id: Uuid,
        new_role: ProjectRole,
    ) -> Result<ProjectMember> {
        let access = self
            .authorize(actor, project_id, Capability::ChangeRoles)
            .await?;

        let target = self.find_member(project_id, user_id).await?;
        self.ensure_can_manage(&access, actor, &target, Capability::ChangeRoles)?;

        let updated = self
            .store()
            .update_member_role(project_id, user_id, new_role, target.version())
            .await?;

        SecurityLogger::log_membership_change(
            actor.id,
            project_id,
            user_id,
            &format!("role {} -> {}", target.role, new_role),
        );
        self.publish(
            actor,
            project_id,
            user_id,
            AccessEventType::RoleChanged {
                from: target.role,
                to: new_role,
            },
        );

        Ok(updated)
    }

    /// Remove a member from a project
    ///
    /// An authenticated member may always remove themselves. The delete is
    /// rejected with `Conflict` if the record changed after it was checked.
    pub async fn remove_member(
        &self,
        actor: &Identity,
        project_id: Uuid,
        user_id: Uuid,
    ) -> Result<ProjectMember> {
        let target = if actor.authenticated && actor.id == user_id {
            debug!(user_id = %user_id, project_id = %project_id, "Member leaving project");
            self.find_member(project_id, user_id).await?
        } else {
            let access = self
                .authorize(actor, project_id, Capability::RemoveMembers)
                .await?;
            let target = self.find_member(project_id, user_id).await?;
            self.ensure_can_manage(&access, actor, &target, Capability::RemoveMembers)?;
            target
        };

        let removed = self
            .store()
            .remove_member(project_id, user_id, target.version())
            .await?;

        SecurityLogger::log_membership_change(actor.id, project_id, user_id, "removed");
        self.publish(
            actor,
            project_id,
            user_id,
            AccessEventType::MemberRemoved {
                role: removed.role.clone(),
            },
        );

        Ok(removed)
    }

    /// List a project's members; requires `view_project`
    pub async fn list_members(
        &self,
        actor: &Identity,
        project_id: Uuid,
    ) -> Result<Vec<ProjectMember>> {
        self.authorize(actor, project_id, Capability::ViewProject)
            .await?;
        self.store().list_members(project_id).await
    }

    fn publish(&self, actor: &Identity, project_id: Uuid, user_id: Uuid, event_type: AccessEventType) {
        let event = AccessEvent {
            event_type,
            project_id,
            user_id,
            actor_id: actor.id,
            timestamp: chrono::Utc::now(),
        };

        // No receivers is not an error
        if self.event_sender.send(event).is_err() {
            debug!("No access event subscribers");
        } else {
            info!(project_id = %project_id, user_id = %user_id, "Published access event");
        }
    }
}
