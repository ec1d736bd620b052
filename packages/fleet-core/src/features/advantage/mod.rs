//! # Advantage Time Bound
//!
//! Aggregate lower bound over a per-ship assignment of posts (every post
//! appears once as a source and once as a destination). Each ship's cost is
//! the sum of its pair distances; the bound is half the cheapest ship.

pub mod application;

pub use application::lower_bound::advantage_time_bound;
