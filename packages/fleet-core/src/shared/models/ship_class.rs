//! Topological ship classes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topological class of a ship (connected component)
///
/// The discriminants are the indices used by [`FleetStats`](crate::FleetStats)
/// and by the text report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipClass {
    /// Tree with maximum degree exactly 2 (simple path)
    Scout = 0,
    /// Any other tree
    Frigate = 1,
    /// Two or more back edges; distances come from the 2-coloring
    Bomber = 2,
    /// Exactly one back edge (unicyclic)
    Transport = 3,
}

impl ShipClass {
    /// Number of classes
    pub const COUNT: usize = 4;

    /// All classes, in index order
    pub const ALL: [ShipClass; Self::COUNT] = [
        ShipClass::Scout,
        ShipClass::Frigate,
        ShipClass::Bomber,
        ShipClass::Transport,
    ];

    /// Position in per-class count arrays
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Scouts and Frigates are trees and use the LCA engine
    pub fn is_tree(self) -> bool {
        matches!(self, ShipClass::Scout | ShipClass::Frigate)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShipClass::Scout => "scout",
            ShipClass::Frigate => "frigate",
            ShipClass::Bomber => "bomber",
            ShipClass::Transport => "transport",
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
