//! Shared module - Common types and constants
//!
//! Types used by every feature slice. No feature depends on another feature
//! through this module.

pub mod constants;
pub mod models;

// Re-exports for convenience
pub use models::*;
