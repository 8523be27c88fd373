//! RBAC type definitions

use crate::core::models::ProjectRole;
use serde::{Deserialize, Serialize};

/// A single project capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ViewProject,
    EditProject,
    DeleteProject,
    ManageMembers,
    AddMembers,
    RemoveMembers,
    ChangeRoles,
    CreateKnowledge,
    EditKnowledge,
    DeleteKnowledge,
    UploadFiles,
    DeleteFiles,
    ViewMembers,
    ManageProjectSettings,
}

impl Capability {
    pub const ALL: [Capability; 14] = [
        Capability::ViewProject,
        Capability::EditProject,
        Capability::DeleteProject,
        Capability::ManageMembers,
        Capability::AddMembers,
        Capability::RemoveMembers,
        Capability::ChangeRoles,
        Capability::CreateKnowledge,
        Capability::EditKnowledge,
        Capability::DeleteKnowledge,
        Capability::UploadFiles,
        Capability::DeleteFiles,
        Capability::ViewMembers,
        Capability::ManageProjectSettings,
    ];

    /// Dotted permission name, `resource.action`
    pub const fn as_str(self) -> &'static str {
        match self {
            Capability::ViewProject => "project.view",
            Capability::EditProject => "project.edit",
            Capability::DeleteProject => "project.delete",
            Capability::ManageMembers => "members.manage",
            Capability::AddMembers => "members.add",
            Capability::RemoveMembers => "members.remove",
            Capability::ChangeRoles => "members.change_role",
            Capability::CreateKnowledge => "knowledge.create",
            Capability::EditKnowledge => "knowledge.edit",
            Capability::DeleteKnowledge => "knowledge.delete",
            Capability::UploadFiles => "files.upload",
            Capability::DeleteFiles => "files.delete",
            Capability::ViewMembers => "members.view",
            Capability::ManageProjectSettings => "project.manage_settings",
        }
    }

    /// Resource this capability applies to
    pub fn resource(self) -> &'static str {
        self.as_str().split_once('.').map_or("", |(resource, _)| resource)
    }

    /// Action this capability allows
    pub fn action(self) -> &'static str {
        self.as_str().split_once('.').map_or("", |(_, action)| action)
    }

    /// Look up a capability by its dotted name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|capability| capability.as_str() == name)
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities held by one role in one project
///
/// Derived on demand from a role and never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionSet {
    pub view_project: bool,
    pub edit_project: bool,
    pub delete_project: bool,
    pub manage_members: bool,
    pub add_members: bool,
    pub remove_members: bool,
    pub change_roles: bool,
    pub create_knowledge: bool,
    pub edit_knowledge: bool,
    pub delete_knowledge: bool,
    pub upload_files: bool,
    pub delete_files: bool,
    pub view_members: bool,
    pub manage_project_settings: bool,
}

impl PermissionSet {
    /// Every capability denied
    pub const fn none() -> Self {
        Self {
            view_project: false,
            edit_project: false,
            delete_project: false,
            manage_members: false,
            add_members: false,
            remove_members: false,
            change_roles: false,
            create_knowledge: false,
            edit_knowledge: false,
            delete_knowledge: false,
            upload_files: false,
            delete_files: false,
            view_members: false,
            manage_project_settings: false,
        }
    }

    /// Every capability granted
    pub const fn all() -> Self {
        Self {
            view_project: true,
            edit_project: true,
            delete_project: true,
            manage_members: true,
            add_members: true,
            remove_members: true,
            change_roles: true,
            create_knowledge: true,
            edit_knowledge: true,
            delete_knowledge: true,
            upload_files: true,
            delete_files: true,
            view_members: true,
            manage_project_settings: true,
        }
    }

    /// Check a single capability
    pub const fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewProject => self.view_project,
            Capability::EditProject => self.edit_project,
            Capability::DeleteProject => self.delete_project,
            Capability::ManageMembers => self.manage_members,
            Capability::AddMembers => self.add_members,
            Capability::RemoveMembers => self.remove_members,
            Capability::ChangeRoles => self.change_roles,
            Capability::CreateKnowledge => self.create_knowledge,
            Capability::EditKnowledge => self.edit_knowledge,
            Capability::DeleteKnowledge => self.delete_knowledge,
            Capability::UploadFiles => self.upload_files,
            Capability::DeleteFiles => self.delete_files,
            Capability::ViewMembers => self.view_members,
            Capability::ManageProjectSettings => self.manage_project_settings,
        }
    }

    /// Check that every required capability is held
    pub fn allows_all(&self, required: &[Capability]) -> bool {
        required.iter().all(|capability| self.allows(*capability))
    }

    /// Check that at least one of the capabilities is held
    pub fn allows_any(&self, required: &[Capability]) -> bool {
        required.iter().any(|capability| self.allows(*capability))
    }

    /// Capabilities granted by this set, in declaration order
    pub fn granted(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|capability| self.allows(*capability))
            .collect()
    }

    /// Dotted names of the granted capabilities
    pub fn permission_names(&self) -> Vec<String> {
        self.granted()
            .into_iter()
            .map(|capability| capability.as_str().to_string())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::none()
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Capability that was checked
    pub capability: Capability,
    /// Role that granted the permission
    pub granted_by_role: Option<ProjectRole>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
