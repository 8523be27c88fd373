//! Helper functions for creating specific error types

use super::types::GatewayError;

/// Helper functions for creating specific errors
impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn membership_fetch<S: Into<String>>(message: S) -> Self {
        Self::MembershipFetch(message.into())
    }

    pub fn unknown_role<S: Into<String>>(value: S) -> Self {
        Self::UnknownRole(value.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error is a lookup outage rather than a decision
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::MembershipFetch(_))
    }
}
