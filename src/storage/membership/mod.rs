//! Membership storage
//!
//! The persistence engine lives outside this crate. [`MembershipStore`] is
//! the seam it plugs into; [`InMemoryMembershipStore`] backs tests and the
//! command-line tool.

mod memory;

pub use memory::InMemoryMembershipStore;

use crate::core::models::{ProjectMember, ProjectRole};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Membership store trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// Every membership held by one user, across all projects
    async fn get_my_projects(&self, user_id: Uuid) -> Result<Vec<ProjectMember>>;

    /// One membership, if present
    async fn get_membership(&self, project_id: Uuid, user_id: Uuid)
    -> Result<Option<ProjectMember>>;

    /// Every member of one project
    async fn list_members(&self, project_id: Uuid) -> Result<Vec<ProjectMember>>;

    /// Insert a membership; fails with `Conflict` if the pair already exists
    async fn add_member(&self, member: ProjectMember) -> Result<ProjectMember>;

    /// Replace a member's role if the stored version still equals
    /// `expected_version`
    async fn update_member_role(
        &self,
        project_id: Uuid,
        user_id: Uuid,
        new_role: ProjectRole,
        expected_version: i64,
    ) -> Result<ProjectMember>;

    /// Delete a membership if the stored version still equals
    /// `expected_version`, returning the removed record
    async fn remove_member(
        &self,
        project_id: Uuid,
        user_id: Uuid,
        expected_version: i64,
    ) -> Result<ProjectMember>;
}
