//! Centralized constants
//!
//! Supported capacity bounds and the ceilings imposed by the id types.

/// Post (vertex) count bounds
pub mod posts {
    /// Smallest fleet accepted by default
    pub const MIN_POSTS: usize = 10;

    /// Largest fleet accepted by default
    pub const MAX_POSTS: usize = 100_000;
}

/// Teleport slot (edge) count bounds
pub mod teleports {
    /// Fewest teleport slots accepted by default
    pub const MIN_SLOTS: usize = 8;

    /// Most teleport slots accepted by default
    pub const MAX_SLOTS: usize = 1_000_000;

    /// Each undirected teleport occupies two directed arena entries
    pub const ENTRIES_PER_SLOT: usize = 2;
}

/// Hard ceilings imposed by the id types
pub mod ids {
    /// Post ids are `u32`
    pub const MAX_ADDRESSABLE_POSTS: usize = u32::MAX as usize;

    /// Arena entry links are `u32` and hold two entries per slot
    pub const MAX_ADDRESSABLE_SLOTS: usize = (u32::MAX / 2) as usize;
}
