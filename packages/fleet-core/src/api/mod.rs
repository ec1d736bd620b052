//! Public facade
//!
//! [`Fleet`] owns the store and the ships and enforces the lifecycle
//! `new → add_teleport* → scan → queries`.

pub mod fleet;

pub use fleet::{Fleet, ScanPhase};
