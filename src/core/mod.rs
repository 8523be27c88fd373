//! Core functionality
//!
//! This module contains the data structures shared by the access-control layers.

pub mod models;
