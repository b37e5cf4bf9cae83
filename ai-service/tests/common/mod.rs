//! Common test utilities shared by the router-level test suites

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items for convenience
pub use fixtures::TestFixtures;
pub use helpers::{ServerBuilder, TestHelpers};
