//! Per-class ship counts

use serde::{Deserialize, Serialize};

use crate::shared::models::ShipClass;

/// Ship counts indexed by [`ShipClass::index`], plus the total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetStats {
    pub counts: [u32; ShipClass::COUNT],
    pub total: u32,
}

impl FleetStats {
    pub fn count(&self, class: ShipClass) -> u32 {
        self.counts[class.index()]
    }

    pub(crate) fn record(&mut self, class: ShipClass) {
        self.counts[class.index()] += 1;
        self.total += 1;
    }

    /// Counts separated by single spaces, in index order
    pub fn to_line(&self) -> String {
        self.counts
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
