//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use std::sync::Arc;
use teamhub_rbac::{
    AccessConfig, Identity, InMemoryMembershipStore, ProjectAccessService, ProjectMember,
    ProjectRole, SystemRole,
};
use uuid::Uuid;

/// Factory for creating caller identities
pub struct IdentityFactory;

impl IdentityFactory {
    /// Authenticated regular user
    pub fn user() -> Identity {
        Identity::authenticated(Uuid::new_v4(), SystemRole::User)
            .with_display_name(format!("user_{}", &Uuid::new_v4().to_string()[..8]))
    }

    /// Authenticated system administrator
    pub fn admin() -> Identity {
        Identity::authenticated(Uuid::new_v4(), SystemRole::Admin)
    }

    /// Identity that failed authentication
    pub fn anonymous() -> Identity {
        Identity::unauthenticated(Uuid::new_v4())
    }
}

/// Factory for creating membership records
pub struct MembershipFactory;

impl MembershipFactory {
    pub fn create(project_id: Uuid, user_id: Uuid, role: ProjectRole) -> ProjectMember {
        ProjectMember::new(project_id, user_id, role)
    }

    /// Membership whose stored role is not one of the known roles
    pub fn unrecognized(project_id: Uuid, user_id: Uuid, role: &str) -> ProjectMember {
        let mut member = ProjectMember::new(project_id, user_id, ProjectRole::Observer);
        member.role = role.into();
        member
    }
}

/// A project with one member of each role
pub struct ProjectFixture {
    pub project_id: Uuid,
    pub lead: Identity,
    pub member: Identity,
    pub observer: Identity,
    pub store: Arc<InMemoryMembershipStore>,
}

impl ProjectFixture {
    pub fn new() -> Self {
        let project_id = Uuid::new_v4();
        let lead = IdentityFactory::user();
        let member = IdentityFactory::user();
        let observer = IdentityFactory::user();

        let store = InMemoryMembershipStore::from_members(vec![
            MembershipFactory::create(project_id, lead.id, ProjectRole::Lead),
            MembershipFactory::create(project_id, member.id, ProjectRole::Member),
            MembershipFactory::create(project_id, observer.id, ProjectRole::Observer),
        ])
        .expect("fixture memberships are unique");

        Self {
            project_id,
            lead,
            member,
            observer,
            store: Arc::new(store),
        }
    }

    /// Service over this fixture's store
    pub fn service(&self) -> ProjectAccessService {
        self.service_with(AccessConfig::default())
    }

    pub fn service_with(&self, config: AccessConfig) -> ProjectAccessService {
        ProjectAccessService::new(config, self.store.clone())
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}
