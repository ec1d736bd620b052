//! Combat post records

use serde::{Deserialize, Serialize};

use crate::shared::models::{PostId, ShipId};

/// Side of the 2-coloring induced by the spanning forest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    /// Even depth
    Even,
    /// Odd depth
    Odd,
}

impl Group {
    pub fn opposite(self) -> Self {
        match self {
            Group::Even => Group::Odd,
            Group::Odd => Group::Even,
        }
    }

    /// 0 for `Even`, 1 for `Odd`
    pub fn bit(self) -> u8 {
        match self {
            Group::Even => 0,
            Group::Odd => 1,
        }
    }
}

/// Where discovery placed a post in its ship's spanning forest
///
/// Written exactly once, when the traversal first reaches the post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Owning ship
    pub ship: ShipId,

    /// Parent in the forest (`None` for the ship root)
    pub parent: Option<PostId>,

    /// Distance from the root along forest edges
    pub depth: u32,

    /// Alternates along forest edges, `Even` at the root
    pub group: Group,

    /// Discovery order within the ship (root = 0)
    pub rank: u32,
}

impl Placement {
    /// Placement of a ship root
    pub fn root(ship: ShipId) -> Self {
        Self {
            ship,
            parent: None,
            depth: 0,
            group: Group::Even,
            rank: 0,
        }
    }

    /// Placement of a child of `parent`, where `self` is the parent's placement
    pub fn child_of(&self, parent: PostId, rank: u32) -> Self {
        Self {
            ship: self.ship,
            parent: Some(parent),
            depth: self.depth + 1,
            group: self.group.opposite(),
            rank,
        }
    }
}

/// Combat post (vertex)
#[derive(Debug, Clone, Default)]
pub struct Post {
    /// Arena index of the most recently added teleport leaving this post
    pub(crate) first_teleport: Option<u32>,

    /// `None` until discovery visits the post
    pub(crate) placement: Option<Placement>,
}

impl Post {
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }
}
