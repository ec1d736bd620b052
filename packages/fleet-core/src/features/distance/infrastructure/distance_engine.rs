//! Class-dispatched distance formulas

use crate::errors::{FleetError, Result};
use crate::features::discovery::Ship;
use crate::features::distance::ports::ship_distance::ShipDistance;
use crate::features::fleet_store::{FleetStore, Placement};
use crate::shared::models::{PostId, ShipClass, ShipId};

/// Distance queries over a scanned store and its ships
#[derive(Debug, Clone, Copy)]
pub struct DistanceEngine<'a> {
    store: &'a FleetStore,
    ships: &'a [Ship],
}

impl<'a> DistanceEngine<'a> {
    pub fn new(store: &'a FleetStore, ships: &'a [Ship]) -> Self {
        Self { store, ships }
    }

    fn ship(&self, id: ShipId) -> Result<&'a Ship> {
        self.ships
            .get(id as usize)
            .ok_or_else(|| FleetError::inconsistent(format!("ship {id} not registered")))
    }

    fn tree_distance(&self, ship: &Ship, u: PostId, pu: &Placement, v: PostId, pv: &Placement) -> Result<u64> {
        let table = ship.jump_table(self.store)?;
        let lca = table.lca(self.store, u, v)?;
        let pl = self.store.placed(lca)?;
        Ok(u64::from(pu.depth) + u64::from(pv.depth) - 2 * u64::from(pl.depth))
    }
}

/// Shorter way around a ring of circumference `height`, positions given by depth
fn ring_distance(pu: &Placement, pv: &Placement, height: u32) -> u64 {
    let i = u64::from(pu.depth.min(pv.depth));
    let j = u64::from(pu.depth.max(pv.depth));
    let k = u64::from(height);
    (j - i).min(k - j + i)
}

fn parity_distance(u: PostId, pu: &Placement, v: PostId, pv: &Placement) -> u64 {
    if u == v {
        0
    } else if pu.group == pv.group {
        2
    } else {
        1
    }
}

impl ShipDistance for DistanceEngine<'_> {
    fn post_count(&self) -> usize {
        self.store.post_count()
    }

    fn ship_count(&self) -> usize {
        self.ships.len()
    }

    fn ship_of(&self, post: PostId) -> Result<ShipId> {
        Ok(self.store.placed(post)?.ship)
    }

    fn ship_size(&self, ship: ShipId) -> Result<usize> {
        Ok(self.ship(ship)?.post_count())
    }

    fn distance(&self, u: PostId, v: PostId) -> Result<Option<u64>> {
        let pu = self.store.placed(u)?;
        let pv = self.store.placed(v)?;
        if pu.ship != pv.ship {
            return Ok(None);
        }

        let ship = self.ship(pu.ship)?;
        let class = ship
            .class()
            .ok_or(FleetError::UnclassifiedShip { ship: ship.id() })?;

        let distance = match class {
            ShipClass::Scout | ShipClass::Frigate => self.tree_distance(ship, u, &pu, v, &pv)?,
            ShipClass::Transport => ring_distance(&pu, &pv, ship.height()),
            ShipClass::Bomber => parity_distance(u, &pu, v, &pv),
        };
        Ok(Some(distance))
    }
}
