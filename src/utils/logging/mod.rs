//! Logging utilities
//!
//! Subscriber setup and structured security events.

mod init;
mod security_logger;

pub use init::{build_filter, init_logging};
pub use security_logger::SecurityLogger;
