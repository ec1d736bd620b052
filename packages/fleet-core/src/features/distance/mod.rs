//! # Distance Engine
//!
//! Teleport distance between two posts of the same ship, by ship class:
//! - **Scout / Frigate**: tree distance through the block decomposition LCA
//! - **Transport**: ring arithmetic on depths, circumference = ship height
//! - **Bomber**: parity of the 2-coloring (0, 1 or 2)
//!
//! The Transport and Bomber formulas trust the classification: they are exact
//! for a pure ring and for complete-bipartite-like ships respectively, and are
//! not re-verified here.

pub mod infrastructure;
pub mod ports;

pub use infrastructure::distance_engine::DistanceEngine;
pub use ports::ship_distance::ShipDistance;
