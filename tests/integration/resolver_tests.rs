//! Membership resolution integration tests
//!
//! Resolution is driven through snapshot files the same way `permcheck`
//! loads them.

#[cfg(test)]
mod tests {
    use crate::common::assertions::PermissionSetAssertions;
    use crate::common::{IdentityFactory, MembershipFactory, ProjectFixture};
    use std::io::Write;
    use std::sync::Arc;
    use teamhub_rbac::{
        AssignedRole, Capability, InMemoryMembershipStore, MembershipResolver, PermissionSet,
        ProjectAccessState, ProjectRole, RoleResolution,
    };
    use tempfile::NamedTempFile;
    use uuid::Uuid;

    fn snapshot(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_resolve_from_yaml_snapshot() {
        let project = Uuid::new_v4();
        let user = IdentityFactory::user();
        let file = snapshot(
            &format!(
                "memberships:\n  - project_id: {project}\n    user_id: {user}\n    role: LEAD\n  - project_id: {other}\n    user_id: {user}\n    role: OBSERVER\n",
                project = project,
                user = user.id,
                other = Uuid::new_v4(),
            ),
            ".yaml",
        );

        let store = InMemoryMembershipStore::from_snapshot_file(file.path())
            .await
            .unwrap();
        assert_eq!(store.len(), 2);

        let resolver = MembershipResolver::new(Arc::new(store));
        let resolution = resolver.resolve(Some(project), Some(&user)).await.unwrap();

        assert!(resolution.is_project_member());
        assert_eq!(resolution.role(), Some(AssignedRole::Known(ProjectRole::Lead)));
        assert_eq!(resolution.permissions(), PermissionSet::all());
    }

    #[tokio::test]
    async fn test_resolve_from_json_snapshot() {
        let project = Uuid::new_v4();
        let user = IdentityFactory::user();
        let file = snapshot(
            &format!(
                r#"{{"memberships": [{{"project_id": "{}", "user_id": "{}", "role": "member"}}]}}"#,
                project, user.id
            ),
            ".json",
        );

        let store = InMemoryMembershipStore::from_snapshot_file(file.path())
            .await
            .unwrap();
        let resolver = MembershipResolver::new(Arc::new(store));
        let resolution = resolver.resolve(Some(project), Some(&user)).await.unwrap();

        assert_eq!(resolution.role(), Some(AssignedRole::Known(ProjectRole::Member)));
    }

    #[tokio::test]
    async fn test_snapshot_with_duplicate_pair_is_rejected() {
        let project = Uuid::new_v4();
        let user = Uuid::new_v4();
        let file = snapshot(
            &format!(
                "memberships:\n  - {{project_id: {p}, user_id: {u}, role: LEAD}}\n  - {{project_id: {p}, user_id: {u}, role: MEMBER}}\n",
                p = project,
                u = user
            ),
            ".yaml",
        );

        let result = InMemoryMembershipStore::from_snapshot_file(file.path()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_non_member_gets_observer_permissions() {
        let fixture = ProjectFixture::new();
        let resolver = MembershipResolver::new(fixture.store.clone());
        let outsider = IdentityFactory::user();

        let resolution = resolver
            .resolve(Some(fixture.project_id), Some(&outsider))
            .await
            .unwrap();

        assert_eq!(resolution, RoleResolution::NonMember);
        let permissions = resolution.permissions();
        permissions.assert_allows(&[Capability::ViewProject, Capability::ViewMembers]);
        permissions.assert_denies(&[Capability::CreateKnowledge, Capability::AddMembers]);
    }

    #[tokio::test]
    async fn test_missing_inputs_are_unauthenticated() {
        let fixture = ProjectFixture::new();
        let resolver = MembershipResolver::new(fixture.store.clone());

        let no_project = resolver.resolve(None, Some(&fixture.lead)).await.unwrap();
        let no_identity = resolver.resolve(Some(fixture.project_id), None).await.unwrap();
        let anonymous = IdentityFactory::anonymous();
        let not_authenticated = resolver
            .resolve(Some(fixture.project_id), Some(&anonymous))
            .await
            .unwrap();

        for resolution in [no_project, no_identity, not_authenticated] {
            assert_eq!(resolution, RoleResolution::Unauthenticated);
            assert!(resolution.permissions().is_empty());
        }
    }

    #[tokio::test]
    async fn test_unrecognized_stored_role_fails_closed() {
        let project = Uuid::new_v4();
        let user = IdentityFactory::user();
        let store = InMemoryMembershipStore::from_members([MembershipFactory::unrecognized(
            project, user.id, "OWNER",
        )])
        .unwrap();
        let resolver = MembershipResolver::new(Arc::new(store));

        let resolution = resolver.resolve(Some(project), Some(&user)).await.unwrap();

        assert!(resolution.is_project_member());
        assert!(resolution.permissions().is_empty());
    }

    #[tokio::test]
    async fn test_state_follows_membership_changes() {
        let fixture = ProjectFixture::new();
        let service = fixture.service();
        let mut state = ProjectAccessState::default();

        state
            .refresh(service.resolver(), Some(fixture.project_id), Some(&fixture.observer))
            .await
            .unwrap();
        assert_eq!(state.role(), Some(&AssignedRole::Known(ProjectRole::Observer)));

        service
            .change_member_role(
                &fixture.lead,
                fixture.project_id,
                fixture.observer.id,
                ProjectRole::Member,
            )
            .await
            .unwrap();
        state
            .refresh(service.resolver(), Some(fixture.project_id), Some(&fixture.observer))
            .await
            .unwrap();

        assert!(state.is_project_member());
        assert!(state.permissions().create_knowledge);
        assert!(state.error().is_none());
    }
}
