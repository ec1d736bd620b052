//! Port: distance queries over a scanned fleet

use crate::errors::Result;
use crate::shared::models::{PostId, ShipId};

/// Read-only view of a scanned fleet used by aggregate computations
pub trait ShipDistance {
    /// Total number of posts
    fn post_count(&self) -> usize;

    /// Number of ships
    fn ship_count(&self) -> usize;

    /// Owning ship of `post` (range checked)
    fn ship_of(&self, post: PostId) -> Result<ShipId>;

    /// Number of posts in `ship`
    fn ship_size(&self, ship: ShipId) -> Result<usize>;

    /// Teleport distance, `Ok(None)` when the posts are in different ships
    fn distance(&self, u: PostId, v: PostId) -> Result<Option<u64>>;
}
