//! Integration test utilities for the ministry platform contract
//!
//! This crate provides row fixtures and JSON assertions for checking the
//! serialized shape of every response family.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
