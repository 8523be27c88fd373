//! Project member models

use super::role::{AssignedRole, ProjectRole};
use crate::core::models::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Project member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMember {
    /// Member metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Project ID
    pub project_id: Uuid,
    /// User ID
    pub user_id: Uuid,
    /// Member role
    pub role: AssignedRole,
    /// Joined at
    #[serde(default = "chrono::Utc::now")]
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

impl ProjectMember {
    /// Create a new project member
    pub fn new(project_id: Uuid, user_id: Uuid, role: ProjectRole) -> Self {
        Self {
            metadata: Metadata::new(),
            project_id,
            user_id,
            role: role.into(),
            joined_at: chrono::Utc::now(),
        }
    }

    /// Check if this membership belongs to the given project
    pub fn is_for_project(&self, project_id: Uuid) -> bool {
        self.project_id == project_id
    }

    /// Current record version
    pub fn version(&self) -> i64 {
        self.metadata.version
    }

    /// Replace the role, bumping the record version
    pub fn set_role(&mut self, role: ProjectRole) {
        self.role = role.into();
        self.metadata.touch();
    }
}
