//! Directed teleport entry

use crate::shared::models::PostId;

/// One direction of an undirected teleport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teleport {
    /// Destination post
    pub to: PostId,

    /// Arena index of the next entry leaving the same post
    pub next: Option<u32>,
}
