//! Fleet capacity limits

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::validation::{check_range, Validatable};
use crate::errors::{FleetError, Result};
use crate::shared::constants::{ids, posts, teleports};

/// Supported bounds for post and teleport slot counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FleetLimits {
    /// Minimum number of posts
    pub min_posts: usize,

    /// Maximum number of posts
    pub max_posts: usize,

    /// Minimum number of teleport slots
    pub min_slots: usize,

    /// Maximum number of teleport slots
    pub max_slots: usize,
}

impl Default for FleetLimits {
    fn default() -> Self {
        Self {
            min_posts: posts::MIN_POSTS,
            max_posts: posts::MAX_POSTS,
            min_slots: teleports::MIN_SLOTS,
            max_slots: teleports::MAX_SLOTS,
        }
    }
}

impl FleetLimits {
    pub fn min_posts(mut self, value: usize) -> Self {
        self.min_posts = value;
        self
    }

    pub fn max_posts(mut self, value: usize) -> Self {
        self.max_posts = value;
        self
    }

    pub fn min_slots(mut self, value: usize) -> Self {
        self.min_slots = value;
        self
    }

    pub fn max_slots(mut self, value: usize) -> Self {
        self.max_slots = value;
        self
    }

    /// Reject a post count outside `[min_posts, max_posts]`
    pub fn check_posts(&self, requested: usize) -> Result<()> {
        if (self.min_posts..=self.max_posts).contains(&requested) {
            Ok(())
        } else {
            Err(FleetError::PostCountOutOfRange {
                requested,
                min: self.min_posts,
                max: self.max_posts,
            })
        }
    }

    /// Reject a slot count outside `[min_slots, max_slots]`
    pub fn check_slots(&self, requested: usize) -> Result<()> {
        if (self.min_slots..=self.max_slots).contains(&requested) {
            Ok(())
        } else {
            Err(FleetError::SlotCountOutOfRange {
                requested,
                min: self.min_slots,
                max: self.max_slots,
            })
        }
    }
}

impl Validatable for FleetLimits {
    fn validate(&self) -> ConfigResult<()> {
        let post_hint = "Post ids are u32 and a fleet needs at least one post.";
        let slot_hint = "Each slot uses two u32-linked arena entries.";
        check_range("min_posts", self.min_posts, 1, ids::MAX_ADDRESSABLE_POSTS, post_hint)?;
        check_range("max_posts", self.max_posts, 1, ids::MAX_ADDRESSABLE_POSTS, post_hint)?;
        check_range("min_slots", self.min_slots, 1, ids::MAX_ADDRESSABLE_SLOTS, slot_hint)?;
        check_range("max_slots", self.max_slots, 1, ids::MAX_ADDRESSABLE_SLOTS, slot_hint)?;

        if self.min_posts > self.max_posts {
            return Err(ConfigError::InvertedBounds {
                field: "posts",
                min: self.min_posts,
                max: self.max_posts,
            });
        }
        if self.min_slots > self.max_slots {
            return Err(ConfigError::InvertedBounds {
                field: "slots",
                min: self.min_slots,
                max: self.max_slots,
            });
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "FleetLimits"
    }
}
