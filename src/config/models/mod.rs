//! Configuration models

pub mod access;
pub mod logging;

pub use access::AccessConfig;
pub use logging::LoggingConfig;

pub fn default_true() -> bool {
    true
}

pub fn default_system_admin_roles() -> Vec<String> {
    vec!["ADMIN".to_string()]
}

pub fn default_log_level() -> String {
    "info".to_string()
}
