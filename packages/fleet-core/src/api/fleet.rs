//! Fleet lifecycle

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{FleetLimits, Validatable};
use crate::errors::{FleetError, Result};
use crate::features::advantage;
use crate::features::discovery::{scan_fleet, FleetStats, Ship};
use crate::features::distance::{DistanceEngine, ShipDistance};
use crate::features::fleet_store::{FleetStore, Placement, Teleports};
use crate::shared::models::{PostId, ShipId};

/// Where a fleet stands in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanPhase {
    /// Accepting teleports
    Assembling,
    /// Ships discovered and classified; read-only from here on
    Scanned,
    /// A scan failed midway; every further operation is rejected
    Interrupted,
}

/// A fleet of combat posts joined by teleports
///
/// # Example
/// ```
/// use fleet_core::{Fleet, ShipClass};
///
/// let mut fleet = Fleet::new(10, 8)?;
/// fleet.add_teleport(0, 0, 1)?;
/// fleet.add_teleport(1, 1, 2)?;
/// fleet.scan()?;
///
/// assert_eq!(fleet.distance(0, 2)?, Some(2));
/// assert_eq!(fleet.stat()?.count(ShipClass::Scout), 1);
/// # Ok::<(), fleet_core::FleetError>(())
/// ```
#[derive(Debug)]
pub struct Fleet {
    limits: FleetLimits,
    store: FleetStore,
    ships: Vec<Ship>,
    phase: ScanPhase,
}

impl Fleet {
    /// Create a fleet under the default limits
    pub fn new(post_count: usize, slot_count: usize) -> Result<Self> {
        Self::with_limits(&FleetLimits::default(), post_count, slot_count)
    }

    /// Create a fleet under explicit limits
    pub fn with_limits(limits: &FleetLimits, post_count: usize, slot_count: usize) -> Result<Self> {
        if let Err(err) = limits.validate() {
            warn!(config = limits.config_name(), error = %err, "limits rejected");
            return Err(err.into());
        }
        limits.check_posts(post_count)?;
        limits.check_slots(slot_count)?;

        let store = FleetStore::with_capacity(post_count, slot_count)?;
        debug!(posts = post_count, slots = slot_count, "fleet allocated");

        Ok(Self {
            limits: *limits,
            store,
            ships: Vec::new(),
            phase: ScanPhase::Assembling,
        })
    }

    /// Add the teleport `v1 ↔ v2` in `slot`, returning `slot + 1`
    pub fn add_teleport(&mut self, slot: usize, v1: PostId, v2: PostId) -> Result<usize> {
        match self.phase {
            ScanPhase::Assembling => self.store.insert(slot, v1, v2),
            ScanPhase::Scanned => Err(FleetError::AlreadyScanned),
            ScanPhase::Interrupted => Err(FleetError::ScanInterrupted),
        }
    }

    /// Discover and classify every ship, returning the number of ships
    ///
    /// Only allowed once. A failure part way leaves the fleet
    /// [`ScanPhase::Interrupted`].
    pub fn scan(&mut self) -> Result<usize> {
        match self.phase {
            ScanPhase::Assembling => {}
            ScanPhase::Scanned => return Err(FleetError::AlreadyScanned),
            ScanPhase::Interrupted => return Err(FleetError::ScanInterrupted),
        }

        match scan_fleet(&mut self.store, &mut self.ships) {
            Ok(count) => {
                self.phase = ScanPhase::Scanned;
                Ok(count)
            }
            Err(err) => {
                warn!(error = %err, ships = self.ships.len(), "fleet scan interrupted");
                self.phase = ScanPhase::Interrupted;
                Err(err)
            }
        }
    }

    fn require_scanned(&self) -> Result<()> {
        match self.phase {
            ScanPhase::Scanned => Ok(()),
            ScanPhase::Assembling => Err(FleetError::NotScanned),
            ScanPhase::Interrupted => Err(FleetError::ScanInterrupted),
        }
    }

    fn engine(&self) -> DistanceEngine<'_> {
        DistanceEngine::new(&self.store, &self.ships)
    }

    /// Ship counts per class
    pub fn stat(&self) -> Result<FleetStats> {
        self.require_scanned()?;
        let mut stats = FleetStats::default();
        for ship in &self.ships {
            let class = ship
                .class()
                .ok_or(FleetError::UnclassifiedShip { ship: ship.id() })?;
            stats.record(class);
        }
        Ok(stats)
    }

    /// Teleport distance between two posts, `None` across ships
    pub fn distance(&self, u: PostId, v: PostId) -> Result<Option<u64>> {
        self.require_scanned()?;
        self.engine().distance(u, v)
    }

    /// Lower bound over the assignment `sources[i] → destinations[i]`
    pub fn advantage_time_bound(&self, sources: &[PostId], destinations: &[PostId]) -> Result<u64> {
        self.require_scanned()?;
        advantage::advantage_time_bound(&self.engine(), sources, destinations)
    }

    pub fn limits(&self) -> &FleetLimits {
        &self.limits
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn post_count(&self) -> usize {
        self.store.post_count()
    }

    pub fn slot_count(&self) -> usize {
        self.store.slot_count()
    }

    /// Number of slots filled so far
    pub fn teleport_count(&self) -> usize {
        self.store.teleport_count()
    }

    /// Number of ships (zero before the scan)
    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id as usize)
    }

    /// Owning ship of `post`
    pub fn ship_of(&self, post: PostId) -> Result<ShipId> {
        self.require_scanned()?;
        self.engine().ship_of(post)
    }

    /// Forest placement of `post`, once scanned
    pub fn placement(&self, post: PostId) -> Option<Placement> {
        self.store.placement(post)
    }

    /// Posts one teleport away from `post`, most recently added first
    pub fn teleports_from(&self, post: PostId) -> Result<Teleports<'_>> {
        self.store.check_post(post)?;
        Ok(self.store.teleports_from(post))
    }

    /// Release all storage
    pub fn release(self) {
        debug!(
            posts = self.store.post_count(),
            ships = self.ships.len(),
            "fleet released"
        );
    }
}
