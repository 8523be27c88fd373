//! Membership lifecycle integration tests

#[cfg(test)]
mod tests {
    use crate::common::{IdentityFactory, MembershipFactory, ProjectFixture};
    use teamhub_rbac::{
        AccessConfig, AccessEventType, AssignedRole, GatewayError, MembershipStore, PermissionSet,
        ProjectRole,
    };
    use uuid::Uuid;

    #[tokio::test]
    async fn test_promotion_then_demotion_round() {
        let fixture = ProjectFixture::new();
        let service = fixture.service();
        let mut events = service.subscribe();
        let recruit = IdentityFactory::user();

        service
            .add_member(&fixture.lead, fixture.project_id, recruit.id, ProjectRole::Observer)
            .await
            .unwrap();
        service
            .change_member_role(&fixture.lead, fixture.project_id, recruit.id, ProjectRole::Member)
            .await
            .unwrap();
        service
            .remove_member(&fixture.lead, fixture.project_id, recruit.id)
            .await
            .unwrap();

        let kinds: Vec<_> = [
            events.recv().await.unwrap(),
            events.recv().await.unwrap(),
            events.recv().await.unwrap(),
        ]
        .into_iter()
        .map(|event| event.event_type)
        .collect();

        assert_eq!(
            kinds,
            vec![
                AccessEventType::MemberAdded {
                    role: ProjectRole::Observer
                },
                AccessEventType::RoleChanged {
                    from: AssignedRole::Known(ProjectRole::Observer),
                    to: ProjectRole::Member,
                },
                AccessEventType::MemberRemoved {
                    role: AssignedRole::Known(ProjectRole::Member)
                },
            ]
        );
        assert!(events.try_recv().is_none());
    }

    #[tokio::test]
    async fn test_member_is_never_granted_member_management() {
        let fixture = ProjectFixture::new();
        let service = fixture.service();

        let add = service
            .add_member(&fixture.member, fixture.project_id, Uuid::new_v4(), ProjectRole::Observer)
            .await;
        let change = service
            .change_member_role(
                &fixture.member,
                fixture.project_id,
                fixture.observer.id,
                ProjectRole::Member,
            )
            .await;
        let remove = service
            .remove_member(&fixture.member, fixture.project_id, fixture.observer.id)
            .await;

        assert!(matches!(add, Err(GatewayError::Forbidden(_))));
        assert!(matches!(change, Err(GatewayError::Forbidden(_))));
        assert!(matches!(remove, Err(GatewayError::Forbidden(_))));
        assert_eq!(fixture.store.len(), 3);
    }

    #[tokio::test]
    async fn test_lead_cannot_demote_self() {
        let fixture = ProjectFixture::new();
        let service = fixture.service();

        let result = service
            .change_member_role(&fixture.lead, fixture.project_id, fixture.lead.id, ProjectRole::Member)
            .await;

        assert!(matches!(result, Err(GatewayError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_lead_may_leave() {
        let fixture = ProjectFixture::new();
        let service = fixture.service();

        let removed = service
            .remove_member(&fixture.lead, fixture.project_id, fixture.lead.id)
            .await
            .unwrap();

        assert_eq!(removed.role, AssignedRole::Known(ProjectRole::Lead));
        let access = service
            .permissions_for(Some(&fixture.lead), Some(fixture.project_id))
            .await
            .unwrap();
        assert_eq!(access.permissions, PermissionSet::for_role(ProjectRole::Observer));
    }

    #[tokio::test]
    async fn test_lead_removes_unrecognized_member() {
        let fixture = ProjectFixture::new();
        let legacy = Uuid::new_v4();
        fixture
            .store
            .add_member(MembershipFactory::unrecognized(fixture.project_id, legacy, "OWNER"))
            .await
            .unwrap();

        let removed = fixture
            .service()
            .remove_member(&fixture.lead, fixture.project_id, legacy)
            .await
            .unwrap();

        assert_eq!(removed.role, AssignedRole::from("OWNER"));
    }

    #[tokio::test]
    async fn test_member_with_unrecognized_role_cannot_manage() {
        let fixture = ProjectFixture::new();
        let actor = IdentityFactory::user();
        fixture
            .store
            .add_member(MembershipFactory::unrecognized(fixture.project_id, actor.id, "OWNER"))
            .await
            .unwrap();

        let result = fixture
            .service()
            .remove_member(&actor, fixture.project_id, fixture.observer.id)
            .await;

        assert!(matches!(result, Err(GatewayError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_admin_override_follows_config() {
        let fixture = ProjectFixture::new();
        let admin = IdentityFactory::admin();

        let enabled = fixture.service();
        enabled
            .add_member(&admin, fixture.project_id, Uuid::new_v4(), ProjectRole::Lead)
            .await
            .unwrap();

        let disabled = fixture.service_with(AccessConfig {
            system_admin_override: false,
            ..AccessConfig::default()
        });
        let result = disabled
            .add_member(&admin, fixture.project_id, Uuid::new_v4(), ProjectRole::Lead)
            .await;
        assert!(matches!(result, Err(GatewayError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_custom_admin_roles() {
        let fixture = ProjectFixture::new();
        let manager = teamhub_rbac::Identity::authenticated(
            Uuid::new_v4(),
            teamhub_rbac::SystemRole::ProjectManager,
        );
        let service = fixture.service_with(AccessConfig {
            system_admin_roles: vec!["ADMIN".to_string(), "project_manager".to_string()],
            ..AccessConfig::default()
        });

        let access = service
            .permissions_for(Some(&manager), Some(fixture.project_id))
            .await
            .unwrap();

        assert!(access.via_system_admin);
        assert_eq!(access.permissions, PermissionSet::all());
    }

    #[tokio::test]
    async fn test_list_members_for_outsider_sees_project() {
        let fixture = ProjectFixture::new();
        let outsider = IdentityFactory::user();

        let members = fixture
            .service()
            .list_members(&outsider, fixture.project_id)
            .await
            .unwrap();

        assert_eq!(members.len(), 3);
    }
}
