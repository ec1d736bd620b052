//! # Ship Discovery & Classification
//!
//! One depth-first pass over the fleet that:
//! - splits posts into ships (connected components), ids in discovery order
//! - places every post in a spanning forest (parent, depth, group, rank)
//! - counts back edges and the maximum degree per ship
//! - classifies each ship as Scout, Frigate, Transport or Bomber
//!
//! The traversal keeps an explicit stack of `(post, adjacency cursor)`
//! frames, so ships as large as the whole fleet never touch the call stack.

pub mod domain;
pub mod infrastructure;

pub use domain::ship::Ship;
pub use domain::stats::FleetStats;
pub use infrastructure::classifier::{classify, ShipSignals};
pub use infrastructure::dfs_scanner::scan_fleet;
