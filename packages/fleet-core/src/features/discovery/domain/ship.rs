//! Ship (connected component)

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::errors::{try_reserve, Result};
use crate::features::fleet_store::FleetStore;
use crate::features::lca::JumpTable;
use crate::shared::models::{PostId, ShipClass, ShipId};

/// A connected component of the fleet
#[derive(Debug, Clone)]
pub struct Ship {
    id: ShipId,

    /// `None` only while the traversal of this ship is running
    class: Option<ShipClass>,

    /// Root of the ship's spanning tree
    root: PostId,

    /// Max depth + 1
    height: u32,

    /// Posts in discovery order (a parent always precedes its children)
    members: Vec<PostId>,

    /// Block decomposition, built on the first tree distance query
    jumps: OnceCell<JumpTable>,
}

impl Ship {
    pub fn new(id: ShipId, root: PostId) -> Self {
        Self {
            id,
            class: None,
            root,
            height: 1,
            members: Vec::new(),
            jumps: OnceCell::new(),
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn class(&self) -> Option<ShipClass> {
        self.class
    }

    pub fn root(&self) -> PostId {
        self.root
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn post_count(&self) -> usize {
        self.members.len()
    }

    pub fn members(&self) -> &[PostId] {
        &self.members
    }

    /// Whether the jump table has been built
    pub fn has_jump_table(&self) -> bool {
        self.jumps.get().is_some()
    }

    /// Rank the next admitted post will receive
    pub(crate) fn next_rank(&self) -> u32 {
        self.members.len() as u32
    }

    /// Add a freshly placed post at `depth`
    pub(crate) fn admit(&mut self, post: PostId, depth: u32) -> Result<()> {
        try_reserve(&mut self.members, 1, "ship members")?;
        self.members.push(post);
        self.height = self.height.max(depth + 1);
        Ok(())
    }

    pub(crate) fn set_class(&mut self, class: ShipClass) {
        self.class = Some(class);
    }

    /// Jump table for this (tree) ship, computed for the whole ship at most once
    pub(crate) fn jump_table(&self, store: &FleetStore) -> Result<&JumpTable> {
        self.jumps.get_or_try_init(|| {
            let table = JumpTable::build(self, store)?;
            debug!(
                ship = self.id,
                posts = self.members.len(),
                height = self.height,
                block = table.block_size(),
                "jump table built"
            );
            Ok(table)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admit_tracks_height_and_rank() {
        let mut ship = Ship::new(0, 4);
        assert_eq!(ship.height(), 1);
        assert_eq!(ship.next_rank(), 0);

        ship.admit(4, 0).unwrap();
        ship.admit(5, 1).unwrap();
        ship.admit(6, 2).unwrap();
        ship.admit(7, 1).unwrap();

        assert_eq!(ship.height(), 3);
        assert_eq!(ship.post_count(), 4);
        assert_eq!(ship.next_rank(), 4);
        assert_eq!(ship.members(), &[4, 5, 6, 7]);
    }

    #[test]
    fn test_class_unset_until_classified() {
        let mut ship = Ship::new(2, 0);
        assert_eq!(ship.class(), None);
        ship.set_class(ShipClass::Bomber);
        assert_eq!(ship.class(), Some(ShipClass::Bomber));
        assert!(!ship.has_jump_table());
    }
}
