//! Feature modules
//!
//! Each feature is a vertical slice:
//! - domain/         - Plain data (posts, teleports, ships)
//! - ports/          - Interface definitions (traits)
//! - application/    - Use cases built on ports
//! - infrastructure/ - Algorithms over the concrete store
//!
//! Dependency order: fleet_store → discovery → lca → distance → advantage

pub mod fleet_store;

pub mod discovery;

// Block decomposition LCA for tree ships
pub mod lca;

pub mod distance;

// Advantage time lower bound
pub mod advantage;
