//! # Block Decomposition LCA
//!
//! Square-root decomposition of a tree ship by depth. Each post stores a
//! "jump": the last post of the previous depth block on its root path.
//! Lowest common ancestor queries climb by jumps until both sides share a
//! block, then by parents.
//!
//! - Build: O(posts in ship), once per ship
//! - Query: O(√height)

pub mod infrastructure;

pub use infrastructure::jump_table::{isqrt, JumpTable};
