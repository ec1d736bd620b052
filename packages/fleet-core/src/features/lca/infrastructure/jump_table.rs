//! Jump table for square-root LCA

use crate::errors::{try_reserve, FleetError, Result};
use crate::features::discovery::Ship;
use crate::features::fleet_store::{FleetStore, Placement};
use crate::shared::models::{PostId, ShipId};

/// Integer square root (floor)
pub fn isqrt(n: u32) -> u32 {
    let mut root = f64::from(n).sqrt() as u32;
    while u64::from(root) * u64::from(root) > u64::from(n) {
        root -= 1;
    }
    while u64::from(root + 1) * u64::from(root + 1) <= u64::from(n) {
        root += 1;
    }
    root
}

/// Jump ancestors of one tree ship, indexed by discovery rank
#[derive(Debug, Clone)]
pub struct JumpTable {
    ship: ShipId,
    block: u32,
    jumps: Vec<Option<PostId>>,
}

impl JumpTable {
    /// Build the table for every post of `ship` in one pass
    ///
    /// Members are walked in discovery order, so a parent's jump is always
    /// known before its children ask for it.
    pub fn build(ship: &Ship, store: &FleetStore) -> Result<Self> {
        let block = isqrt(ship.height()).max(1);
        let mut jumps: Vec<Option<PostId>> = Vec::new();
        try_reserve(&mut jumps, ship.post_count(), "jump entries")?;

        for &post in ship.members() {
            let placement = store.placed(post)?;
            if placement.ship != ship.id() || placement.rank as usize != jumps.len() {
                return Err(FleetError::inconsistent(format!(
                    "post {post} out of discovery order in ship {}",
                    ship.id()
                )));
            }

            let jump = match placement.parent {
                None => None,
                Some(parent) if placement.depth % block == 0 => Some(parent),
                Some(parent) => {
                    let above = store.placed(parent)?;
                    jumps.get(above.rank as usize).copied().ok_or_else(|| {
                        FleetError::inconsistent(format!("parent {parent} of post {post} has no jump"))
                    })?
                }
            };
            jumps.push(jump);
        }

        Ok(Self {
            ship: ship.id(),
            block,
            jumps,
        })
    }

    pub fn block_size(&self) -> u32 {
        self.block
    }

    fn jump_of(&self, placement: &Placement) -> Result<Option<PostId>> {
        self.jumps
            .get(placement.rank as usize)
            .copied()
            .ok_or_else(|| FleetError::inconsistent(format!("rank {} has no jump", placement.rank)))
    }

    fn own(&self, store: &FleetStore, post: PostId) -> Result<Placement> {
        let placement = store.placed(post)?;
        if placement.ship != self.ship {
            return Err(FleetError::inconsistent(format!(
                "post {post} is not in ship {}",
                self.ship
            )));
        }
        Ok(placement)
    }

    /// Lowest common ancestor of `u` and `v`
    pub fn lca(&self, store: &FleetStore, u: PostId, v: PostId) -> Result<PostId> {
        let (mut u, mut pu) = (u, self.own(store, u)?);
        let (mut v, mut pv) = (v, self.own(store, v)?);

        while self.jump_of(&pu)? != self.jump_of(&pv)? {
            if pu.depth > pv.depth {
                u = climb(self.jump_of(&pu)?, u)?;
                pu = store.placed(u)?;
            } else {
                v = climb(self.jump_of(&pv)?, v)?;
                pv = store.placed(v)?;
            }
        }

        while u != v {
            if pu.depth > pv.depth {
                u = climb(pu.parent, u)?;
                pu = store.placed(u)?;
            } else {
                v = climb(pv.parent, v)?;
                pv = store.placed(v)?;
            }
        }

        Ok(u)
    }
}

/// Follow a link that must exist below the common ancestor
fn climb(link: Option<PostId>, from: PostId) -> Result<PostId> {
    link.ok_or_else(|| FleetError::inconsistent(format!("climbed past the root from post {from}")))
}
