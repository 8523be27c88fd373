//! Error handling for the access-control core
//!
//! This module defines the error type shared by every layer of the crate.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{GatewayError, Result};
