//! Utility modules
//!
//! - **error**: Error type and HTTP mapping
//! - **logging**: Subscriber setup and security events

pub mod error;
pub mod logging;
