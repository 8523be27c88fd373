//! Access and logging configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::core::models::SystemRole;
use tracing::debug;

impl Validate for AccessConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating access configuration");

        if self.system_admin_override && self.system_admin_roles.is_empty() {
            return Err(
                "System admin roles cannot be empty when the admin override is enabled"
                    .to_string(),
            );
        }

        for role in &self.system_admin_roles {
            role.parse::<SystemRole>()?;
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        Ok(())
    }
}
