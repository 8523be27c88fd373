//! Ownership-aware checks for member-authored resources
//!
//! The flat [`PermissionSet`] flags say a member may edit or delete knowledge
//! and files. For members that only covers resources they authored; this
//! module applies that rule on top of the flags.

use crate::core::models::{AssignedRole, ProjectRole};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{Capability, PermissionSet};

/// Mutations that are restricted to the resource owner for members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnedAction {
    EditKnowledge,
    DeleteKnowledge,
    DeleteFile,
}

impl OwnedAction {
    /// Capability flag that gates this action
    pub const fn capability(self) -> Capability {
        match self {
            OwnedAction::EditKnowledge => Capability::EditKnowledge,
            OwnedAction::DeleteKnowledge => Capability::DeleteKnowledge,
            OwnedAction::DeleteFile => Capability::DeleteFiles,
        }
    }
}

/// Whether `actor_id` holding `role` may perform `action` on a resource owned
/// by `owner_id`
pub fn can_modify(role: &AssignedRole, action: OwnedAction, actor_id: Uuid, owner_id: Uuid) -> bool {
    if !PermissionSet::for_assigned(role).allows(action.capability()) {
        return false;
    }

    match role.known() {
        Some(ProjectRole::Lead) => true,
        Some(ProjectRole::Member) => actor_id == owner_id,
        _ => false,
    }
}
