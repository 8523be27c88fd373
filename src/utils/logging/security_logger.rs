//! Security-aware logging utilities

use tracing::{debug, info, warn};
use uuid::Uuid;

/// Structured events for authorization decisions, under the `security` target
pub struct SecurityLogger;

impl SecurityLogger {
    /// Log authorization events
    pub fn log_authz_event(
        user_id: Uuid,
        project_id: Uuid,
        action: &str,
        granted: bool,
        reason: Option<&str>,
    ) {
        if granted {
            debug!(
                target: "security",
                user_id = %user_id,
                project_id = %project_id,
                action,
                granted,
                "Authorization granted: {}",
                action
            );
        } else {
            warn!(
                target: "security",
                user_id = %user_id,
                project_id = %project_id,
                action,
                granted,
                reason = reason.unwrap_or("unspecified"),
                "Authorization denied: {}",
                action
            );
        }
    }

    /// Log membership mutations
    pub fn log_membership_change(
        actor_id: Uuid,
        project_id: Uuid,
        target_user_id: Uuid,
        change: &str,
    ) {
        info!(
            target: "security",
            actor_id = %actor_id,
            project_id = %project_id,
            target_user_id = %target_user_id,
            change,
            "Membership changed: {}",
            change
        );
    }
}
