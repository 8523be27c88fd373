//! In-memory membership store

use super::MembershipStore;
use crate::core::models::{ProjectMember, ProjectRole};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};
use uuid::Uuid;

/// Membership store keyed by `(project_id, user_id)`
///
/// The key makes a second record for the same pair unrepresentable.
#[derive(Debug, Default)]
pub struct InMemoryMembershipStore {
    members: DashMap<(Uuid, Uuid), ProjectMember>,
}

/// On-disk snapshot layout
#[derive(Debug, Deserialize)]
struct MembershipSnapshot {
    #[serde(default)]
    memberships: Vec<ProjectMember>,
}

impl InMemoryMembershipStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records
    pub fn from_members<I>(members: I) -> Result<Self>
    where
        I: IntoIterator<Item = ProjectMember>,
    {
        let store = Self::new();
        for member in members {
            store.insert(member)?;
        }
        Ok(store)
    }

    /// Load a YAML or JSON snapshot with a top-level `memberships` list
    pub async fn from_snapshot_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading membership snapshot from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            GatewayError::Config(format!("Failed to read membership snapshot: {}", e))
        })?;

        // YAML is a superset of JSON, so one parser covers both
        let snapshot: MembershipSnapshot = serde_yaml::from_str(&content)?;
        let store = Self::from_members(snapshot.memberships)?;

        debug!("Loaded {} memberships", store.len());
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn insert(&self, member: ProjectMember) -> Result<ProjectMember> {
        match self.members.entry((member.project_id, member.user_id)) {
            Entry::Occupied(_) => Err(GatewayError::conflict(format!(
                "User {} is already a member of project {}",
                member.user_id, member.project_id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(member.clone());
                Ok(member)
            }
        }
    }
}

#[async_trait]
impl MembershipStore for InMemoryMembershipStore {
    async fn get_my_projects(&self, user_id: Uuid) -> Result<Vec<ProjectMember>> {
        let mut memberships: Vec<ProjectMember> = self
            .members
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        memberships.sort_by_key(|member| member.joined_at);
        Ok(memberships)
    }

    async fn get_membership(
        &self,
        project_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ProjectMember>> {
        Ok(self
            .members
            .get(&(project_id, user_id))
            .map(|entry| entry.value().clone()))
    }

    async fn list_members(&self, project_id: Uuid) -> Result<Vec<ProjectMember>> {
        let mut members: Vec<ProjectMember> = self
            .members
            .iter()
            .filter(|entry| entry.project_id == project_id)
            .map(|entry| entry.value().clone())
            .collect();
        members.sort_by_key(|member| member.joined_at);
        Ok(members)
    }

    async fn add_member(&self, member: ProjectMember) -> Result<ProjectMember> {
        self.insert(member)
    }

    async fn update_member_role(
        &self,
        project_id: Uuid,
        user_id: Uuid,
        new_role: ProjectRole,
        expected_version: i64,
    ) -> Result<ProjectMember> {
        let mut entry = self.members.get_mut(&(project_id, user_id)).ok_or_else(|| {
            GatewayError::not_found(format!(
                "User {} is not a member of project {}",
                user_id, project_id
            ))
        })?;

        if entry.version() != expected_version {
            return Err(GatewayError::conflict(format!(
                "Membership changed concurrently (expected version {}, found {})",
                expected_version,
                entry.version()
            )));
        }

        entry.set_role(new_role);
        Ok(entry.value().clone())
    }

    async fn remove_member(
        &self,
        project_id: Uuid,
        user_id: Uuid,
        expected_version: i64,
    ) -> Result<ProjectMember> {
        let key = (project_id, user_id);
        if let Some((_, member)) = self
            .members
            .remove_if(&key, |_, member| member.version() == expected_version)
        {
            return Ok(member);
        }

        match self.members.get(&key) {
            Some(entry) => Err(GatewayError::conflict(format!(
                "Membership changed concurrently (expected version {}, found {})",
                expected_version,
                entry.version()
            ))),
            None => Err(GatewayError::not_found(format!(
                "User {} is not a member of project {}",
                user_id, project_id
            ))),
        }
    }
}
