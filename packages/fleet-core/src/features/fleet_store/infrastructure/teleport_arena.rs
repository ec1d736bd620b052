//! Teleport arena
//!
//! All directed entries live in one preallocated vector. Slot `i` owns entry
//! `i` (forward direction) and entry `i + slot_count` (reverse direction), so
//! insertion never allocates and the arena is released in one piece.

use crate::errors::{try_reserve, FleetError, Result};
use crate::features::fleet_store::domain::teleport::Teleport;
use crate::shared::constants::teleports::ENTRIES_PER_SLOT;
use crate::shared::models::PostId;

/// Arena of directed teleport entries indexed by `u32`
#[derive(Debug, Clone)]
pub struct TeleportArena {
    entries: Vec<Option<Teleport>>,
    slot_count: usize,
    occupied: usize,
}

impl TeleportArena {
    /// Reserve `2 × slot_count` entries
    pub fn with_slots(slot_count: usize) -> Result<Self> {
        let len = slot_count
            .checked_mul(ENTRIES_PER_SLOT)
            .ok_or(FleetError::Allocation {
                what: "teleport entries",
                requested: usize::MAX,
            })?;
        let mut entries = Vec::new();
        try_reserve(&mut entries, len, "teleport entries")?;
        entries.resize(len, None);

        Ok(Self {
            entries,
            slot_count,
            occupied: 0,
        })
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Number of slots holding a teleport
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    pub fn is_occupied(&self, slot: usize) -> bool {
        matches!(self.entries.get(slot), Some(Some(_)))
    }

    /// Arena indices of the forward and reverse entries of `slot`
    pub fn entry_indices(&self, slot: usize) -> Result<(u32, u32)> {
        if slot >= self.slot_count {
            return Err(FleetError::SlotOutOfRange {
                slot,
                capacity: self.slot_count,
            });
        }
        let forward = u32::try_from(slot)
            .map_err(|_| FleetError::inconsistent(format!("slot {slot} exceeds u32 links")))?;
        let reverse = u32::try_from(slot + self.slot_count)
            .map_err(|_| FleetError::inconsistent(format!("slot {slot} exceeds u32 links")))?;
        Ok((forward, reverse))
    }

    /// Write an entry; the caller owns the list head it is prepended to
    pub(crate) fn write(&mut self, index: u32, entry: Teleport) -> Result<()> {
        let cell = self
            .entries
            .get_mut(index as usize)
            .ok_or_else(|| FleetError::inconsistent(format!("arena entry {index} missing")))?;
        *cell = Some(entry);
        Ok(())
    }

    pub(crate) fn mark_occupied(&mut self) {
        self.occupied += 1;
    }

    pub fn get(&self, index: u32) -> Option<Teleport> {
        self.entries.get(index as usize).copied().flatten()
    }

    /// Walk the list starting at `head`
    pub fn walk(&self, head: Option<u32>) -> Teleports<'_> {
        Teleports {
            arena: self,
            cursor: head,
        }
    }
}

/// Destinations of the teleports leaving one post, most recent first
#[derive(Debug, Clone)]
pub struct Teleports<'a> {
    arena: &'a TeleportArena,
    cursor: Option<u32>,
}

impl Iterator for Teleports<'_> {
    type Item = PostId;

    fn next(&mut self) -> Option<PostId> {
        let entry = self.arena.get(self.cursor?)?;
        self.cursor = entry.next;
        Some(entry.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_indices_pair_forward_and_reverse() {
        let arena = TeleportArena::with_slots(8).unwrap();
        assert_eq!(arena.entry_indices(0).unwrap(), (0, 8));
        assert_eq!(arena.entry_indices(7).unwrap(), (7, 15));
        assert!(matches!(
            arena.entry_indices(8),
            Err(FleetError::SlotOutOfRange { slot: 8, capacity: 8 })
        ));
    }

    #[test]
    fn test_walk_follows_links() {
        let mut arena = TeleportArena::with_slots(8).unwrap();
        arena.write(0, Teleport { to: 4, next: None }).unwrap();
        arena.write(1, Teleport { to: 5, next: Some(0) }).unwrap();

        let seen: Vec<PostId> = arena.walk(Some(1)).collect();
        assert_eq!(seen, vec![5, 4]);
        assert_eq!(arena.walk(None).count(), 0);
    }

    #[test]
    fn test_fresh_arena_is_empty() {
        let arena = TeleportArena::with_slots(10).unwrap();
        assert_eq!(arena.slot_count(), 10);
        assert_eq!(arena.occupied(), 0);
        assert!(!arena.is_occupied(3));
    }
}
