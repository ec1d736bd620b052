//! Test data builders

use fleet_core::{Fleet, FleetLimits, PostId};

/// Builder for a [`Fleet`] filled slot by slot
#[derive(Debug, Clone)]
pub struct FleetBuilder {
    posts: usize,
    slots: Option<usize>,
    limits: FleetLimits,
    teleports: Vec<(PostId, PostId)>,
}

impl Default for FleetBuilder {
    fn default() -> Self {
        Self {
            posts: 10,
            slots: None,
            limits: FleetLimits::default(),
            teleports: Vec::new(),
        }
    }
}

impl FleetBuilder {
    /// Create a new builder (10 posts, slots sized to the teleports)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(mut self, posts: usize) -> Self {
        self.posts = posts;
        self
    }

    /// Force the slot capacity (otherwise `max(teleports, 8)`)
    pub fn with_slots(mut self, slots: usize) -> Self {
        self.slots = Some(slots);
        self
    }

    pub fn with_limits(mut self, limits: FleetLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_teleport(mut self, u: PostId, v: PostId) -> Self {
        self.teleports.push((u, v));
        self
    }

    pub fn with_teleports(mut self, teleports: impl IntoIterator<Item = (PostId, PostId)>) -> Self {
        self.teleports.extend(teleports);
        self
    }

    /// Build with teleport `i` in slot `i`
    pub fn build(self) -> Fleet {
        let order: Vec<usize> = (0..self.teleports.len()).collect();
        self.build_in_order(&order)
    }

    /// Build filling slots in the given order (teleport `i` still lands in slot `i`)
    pub fn build_in_order(self, order: &[usize]) -> Fleet {
        let slots = self.slots.unwrap_or(self.teleports.len().max(8));
        let mut fleet = Fleet::with_limits(&self.limits, self.posts, slots).expect("fleet construction");
        for &slot in order {
            let (u, v) = self.teleports[slot];
            fleet.add_teleport(slot, u, v).expect("teleport insertion");
        }
        fleet
    }

    /// Build and scan
    pub fn scanned(self) -> Fleet {
        let mut fleet = self.build();
        fleet.scan().expect("scan");
        fleet
    }
}
