//! User identity models
//!
//! Login and session issuance live outside this crate; these types only
//! describe an identity that has already been established.

mod types;


pub use types::{Identity, SystemRole};
