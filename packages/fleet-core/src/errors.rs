//! Error types for fleet-core
//!
//! Provides unified error handling across the crate. Every variant belongs to
//! one of four kinds (see [`ErrorKind`]); nothing is retried internally.

use thiserror::Error;

use crate::config::error::ConfigError;
use crate::shared::models::{PostId, ShipId};

/// Main error type for fleet operations
#[derive(Debug, Error)]
pub enum FleetError {
    /// Requested post count outside the configured limits
    #[error("Post count {requested} outside supported range {min}..={max}")]
    PostCountOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// Requested teleport slot count outside the configured limits
    #[error("Teleport slot count {requested} outside supported range {min}..={max}")]
    SlotCountOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// Storage could not be reserved
    #[error("Allocation error: could not reserve storage for {requested} {what}")]
    Allocation { what: &'static str, requested: usize },

    /// Slot index beyond the teleport capacity
    #[error("Teleport slot {slot} out of range (capacity {capacity})")]
    SlotOutOfRange { slot: usize, capacity: usize },

    /// Slot already holds a teleport
    #[error("Teleport slot {slot} is already occupied")]
    SlotOccupied { slot: usize },

    /// Post index beyond the post count
    #[error("Post {post} out of range (fleet has {count} posts)")]
    PostOutOfRange { post: PostId, count: usize },

    /// Assignment slices do not cover every post exactly once
    #[error(
        "Assignment length mismatch: {sources} sources and {destinations} destinations, expected {expected}"
    )]
    LengthMismatch {
        sources: usize,
        destinations: usize,
        expected: usize,
    },

    /// Scan requested twice, or topology changed after a scan
    #[error("Fleet has already been scanned")]
    AlreadyScanned,

    /// Query issued before the scan
    #[error("Fleet has not been scanned yet")]
    NotScanned,

    /// A previous scan failed midway; the fleet is unusable
    #[error("Fleet scan was interrupted; derived data is incomplete")]
    ScanInterrupted,

    /// Assignment pair spans two ships
    #[error("Posts {from} and {to} belong to different ships")]
    ShipMismatch { from: PostId, to: PostId },

    /// Ship was registered but never classified
    #[error("Ship {ship} has no classification")]
    UnclassifiedShip { ship: ShipId },

    /// Internal invariant broken (forest links, arena entries, ...)
    #[error("Inconsistent fleet state: {0}")]
    Inconsistent(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Error taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Counts or indices outside supported bounds
    Capacity,
    /// Storage could not be acquired
    Allocation,
    /// Operation invoked out of the required sequence
    Protocol,
    /// Cross-ship queries or broken internal invariants
    Consistency,
}

impl FleetError {
    /// Create an inconsistency error
    pub fn inconsistent(msg: impl Into<String>) -> Self {
        FleetError::Inconsistent(msg.into())
    }

    /// Taxonomy bucket of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FleetError::PostCountOutOfRange { .. }
            | FleetError::SlotCountOutOfRange { .. }
            | FleetError::SlotOutOfRange { .. }
            | FleetError::PostOutOfRange { .. }
            | FleetError::LengthMismatch { .. }
            | FleetError::Config(_) => ErrorKind::Capacity,
            FleetError::Allocation { .. } => ErrorKind::Allocation,
            FleetError::SlotOccupied { .. }
            | FleetError::AlreadyScanned
            | FleetError::NotScanned
            | FleetError::ScanInterrupted => ErrorKind::Protocol,
            FleetError::ShipMismatch { .. }
            | FleetError::UnclassifiedShip { .. }
            | FleetError::Inconsistent(_) => ErrorKind::Consistency,
        }
    }
}

/// Reserve room for `additional` more elements, mapping failure to [`FleetError::Allocation`]
pub(crate) fn try_reserve<T>(vec: &mut Vec<T>, additional: usize, what: &'static str) -> Result<()> {
    vec.try_reserve(additional)
        .map_err(|_| FleetError::Allocation {
            what,
            requested: vec.len().saturating_add(additional),
        })
}

/// Result type alias for fleet operations
pub type Result<T> = std::result::Result<T, FleetError>;
