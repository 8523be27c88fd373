//! Configuration validation

mod access_validators;
mod trait_def;

pub use trait_def::Validate;
