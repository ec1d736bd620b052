//! Shared models

pub mod ship_class;

pub use ship_class::ShipClass;

/// Index of a combat post, in `[0, post_count)`
pub type PostId = u32;

/// Sequential ship id, assigned in discovery order
pub type ShipId = u32;
