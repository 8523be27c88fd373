//! Common test utilities for teamhub-rbac
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::fixtures::{IdentityFactory, ProjectFixture};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let project = ProjectFixture::new();
//!     let outsider = IdentityFactory::user();
//!     // ...
//! }
//! ```

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{IdentityFactory, MembershipFactory, ProjectFixture};
