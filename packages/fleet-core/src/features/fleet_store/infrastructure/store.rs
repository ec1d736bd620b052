//! Post table + teleport arena

use crate::errors::{try_reserve, FleetError, Result};
use crate::features::fleet_store::domain::post::{Placement, Post};
use crate::features::fleet_store::domain::teleport::Teleport;
use crate::shared::models::PostId;

use super::teleport_arena::{TeleportArena, Teleports};

/// Owns every post and every teleport entry of a fleet
#[derive(Debug, Clone)]
pub struct FleetStore {
    posts: Vec<Post>,
    arena: TeleportArena,
}

impl FleetStore {
    /// Allocate `post_count` posts and `slot_count` teleport slots
    ///
    /// Bounds are checked by the caller against its `FleetLimits`. If the
    /// arena cannot be reserved the post table is dropped before returning.
    pub fn with_capacity(post_count: usize, slot_count: usize) -> Result<Self> {
        let mut posts = Vec::new();
        try_reserve(&mut posts, post_count, "posts")?;
        posts.resize(post_count, Post::default());

        let arena = TeleportArena::with_slots(slot_count)?;

        Ok(Self { posts, arena })
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    pub fn slot_count(&self) -> usize {
        self.arena.slot_count()
    }

    /// Number of slots filled so far
    pub fn teleport_count(&self) -> usize {
        self.arena.occupied()
    }

    pub fn check_post(&self, post: PostId) -> Result<()> {
        if (post as usize) < self.posts.len() {
            Ok(())
        } else {
            Err(FleetError::PostOutOfRange {
                post,
                count: self.posts.len(),
            })
        }
    }

    /// Record the teleport `p1 ↔ p2` in `slot`, returning `slot + 1`
    ///
    /// Nothing is written unless every check passes.
    pub fn insert(&mut self, slot: usize, p1: PostId, p2: PostId) -> Result<usize> {
        let (forward, reverse) = self.arena.entry_indices(slot)?;
        self.check_post(p1)?;
        self.check_post(p2)?;
        if self.arena.is_occupied(slot) {
            return Err(FleetError::SlotOccupied { slot });
        }

        let head = self.posts[p1 as usize].first_teleport;
        self.arena.write(forward, Teleport { to: p2, next: head })?;
        self.posts[p1 as usize].first_teleport = Some(forward);

        let head = self.posts[p2 as usize].first_teleport;
        self.arena.write(reverse, Teleport { to: p1, next: head })?;
        self.posts[p2 as usize].first_teleport = Some(reverse);

        self.arena.mark_occupied();
        Ok(slot + 1)
    }

    pub fn first_teleport(&self, post: PostId) -> Option<u32> {
        self.posts.get(post as usize).and_then(|p| p.first_teleport)
    }

    pub fn teleport(&self, index: u32) -> Option<Teleport> {
        self.arena.get(index)
    }

    /// Destinations reachable from `post` in one teleport, most recent first
    pub fn teleports_from(&self, post: PostId) -> Teleports<'_> {
        self.arena.walk(self.first_teleport(post))
    }

    /// Number of adjacency entries leaving `post` (a self loop counts twice)
    pub fn degree(&self, post: PostId) -> usize {
        self.teleports_from(post).count()
    }

    pub fn placement(&self, post: PostId) -> Option<Placement> {
        self.posts.get(post as usize).and_then(|p| p.placement)
    }

    /// Placement of a post that discovery must already have visited
    pub fn placed(&self, post: PostId) -> Result<Placement> {
        self.check_post(post)?;
        self.placement(post)
            .ok_or_else(|| FleetError::inconsistent(format!("post {post} was never placed")))
    }

    pub fn is_placed(&self, post: PostId) -> bool {
        self.posts
            .get(post as usize)
            .map_or(false, |p| p.is_placed())
    }

    /// Write the placement of an unplaced post
    pub(crate) fn place(&mut self, post: PostId, placement: Placement) -> Result<()> {
        let count = self.posts.len();
        let slot = self
            .posts
            .get_mut(post as usize)
            .ok_or(FleetError::PostOutOfRange { post, count })?;
        if slot.placement.is_some() {
            return Err(FleetError::inconsistent(format!("post {post} placed twice")));
        }
        slot.placement = Some(placement);
        Ok(())
    }
}
