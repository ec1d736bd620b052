//! Common test utilities for fleet-core
//!
//! Shared graph fixtures, a fleet builder and fleet-specific assertions for
//! the integration tests.

#![allow(dead_code)]

mod assertions;
mod builders;
mod fixtures;

// Re-export all utilities
pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
