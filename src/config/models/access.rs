//! Access-control configuration

use super::{default_system_admin_roles, default_true};
use crate::core::models::SystemRole;
use serde::{Deserialize, Serialize};

/// Access-control configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Let system admins act on any project regardless of membership
    #[serde(default = "default_true")]
    pub system_admin_override: bool,
    /// System roles treated as admin for the override
    #[serde(default = "default_system_admin_roles")]
    pub system_admin_roles: Vec<String>,
    /// Keep the last known role when a membership lookup fails
    #[serde(default = "default_true")]
    pub retain_role_on_fetch_error: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            system_admin_override: true,
            system_admin_roles: default_system_admin_roles(),
            retain_role_on_fetch_error: true,
        }
    }
}

impl AccessConfig {
    /// Whether a system role is configured as admin
    pub fn is_admin_role(&self, role: &SystemRole) -> bool {
        let name = role.to_string();
        self.system_admin_roles
            .iter()
            .any(|admin| admin.eq_ignore_ascii_case(&name))
    }

    /// Merge access configurations (other takes precedence where it differs
    /// from the defaults)
    pub fn merge(mut self, other: Self) -> Self {
        if !other.system_admin_override {
            self.system_admin_override = other.system_admin_override;
        }
        if other.system_admin_roles != default_system_admin_roles() {
            self.system_admin_roles = other.system_admin_roles;
        }
        if !other.retain_role_on_fetch_error {
            self.retain_role_on_fetch_error = other.retain_role_on_fetch_error;
        }
        self
    }
}
