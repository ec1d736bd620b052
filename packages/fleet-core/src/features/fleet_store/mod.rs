//! # Fleet Store
//!
//! Fixed-capacity storage for combat posts and teleports:
//! - **Posts**: one record per vertex, holding the adjacency head and the
//!   placement written once by discovery
//! - **Teleport arena**: `2 × slot_count` directed entries linked into
//!   intrusive per-post lists (most recently added first)
//!
//! Topology is write-once: entries are only ever added, never removed.

pub mod domain;
pub mod infrastructure;

pub use domain::post::{Group, Placement, Post};
pub use domain::teleport::Teleport;
pub use infrastructure::store::FleetStore;
pub use infrastructure::teleport_arena::{TeleportArena, Teleports};
