//! Storage layer
//!
//! This module provides the membership persistence seam.

pub mod membership;

pub use membership::{InMemoryMembershipStore, MembershipStore};
