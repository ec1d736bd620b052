//! Ship classification from traversal signals

use crate::shared::models::ShipClass;

/// Structural signals gathered while traversing one ship
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipSignals {
    /// Largest adjacency-entry count of any post in the ship
    pub max_degree: u32,

    /// Non-tree edges seen from their deeper endpoint
    pub back_edges: u32,
}

/// Classify a ship
///
/// | back edges | max degree | class     |
/// |------------|------------|-----------|
/// | 0          | = 2        | Scout     |
/// | 0          | ≠ 2        | Frigate   |
/// | 1          | any        | Transport |
/// | ≥ 2        | any        | Bomber    |
pub fn classify(signals: &ShipSignals) -> ShipClass {
    match (signals.back_edges, signals.max_degree) {
        (0, 2) => ShipClass::Scout,
        (0, _) => ShipClass::Frigate,
        (1, _) => ShipClass::Transport,
        _ => ShipClass::Bomber,
    }
}
