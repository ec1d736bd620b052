//! Text input format
//!
//! ```text
//! post_count slot_count
//! u v            (slot_count lines, 1-based posts)
//! source dest    (post_count lines, 1-based posts)
//! ```
//!
//! Tokens may be separated by any whitespace. Output is the four class counts
//! on one line followed by the bound on the next.

use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::api::Fleet;
use crate::config::FleetLimits;
use crate::errors::FleetError;
use crate::features::discovery::FleetStats;
use crate::shared::models::PostId;

/// Errors raised while reading or running a text input
#[derive(Debug, Error)]
pub enum InputError {
    /// Input ended before `expected` was read
    #[error("Input ended early: expected {expected}")]
    Truncated { expected: &'static str },

    /// Token is not a non-negative integer
    #[error("Invalid integer {token:?} for {field}")]
    InvalidInteger { token: String, field: &'static str },

    /// 1-based post index of zero, or too large for a post id
    #[error("Post index {index} for {field} is not a valid 1-based index")]
    IndexOutOfRange { index: u64, field: &'static str },

    /// The fleet rejected the input
    #[error(transparent)]
    Fleet(#[from] FleetError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parsed input, posts already converted to 0-based ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetInput {
    pub post_count: usize,
    pub slot_count: usize,

    /// Teleport `i` goes into slot `i`
    pub teleports: Vec<(PostId, PostId)>,

    pub sources: Vec<PostId>,
    pub destinations: Vec<PostId>,
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn count(&mut self, field: &'static str) -> Result<usize, InputError> {
        let token = self
            .inner
            .next()
            .ok_or(InputError::Truncated { expected: field })?;
        token.parse().map_err(|_| InputError::InvalidInteger {
            token: token.to_string(),
            field,
        })
    }

    /// Read a 1-based post index and return it 0-based
    fn post(&mut self, field: &'static str) -> Result<PostId, InputError> {
        let index = self.count(field)? as u64;
        index
            .checked_sub(1)
            .and_then(|p| PostId::try_from(p).ok())
            .ok_or(InputError::IndexOutOfRange { index, field })
    }

    fn pair(&mut self, field: &'static str) -> Result<(PostId, PostId), InputError> {
        Ok((self.post(field)?, self.post(field)?))
    }
}

impl FleetInput {
    /// Parse the whole input
    ///
    /// Counts are not range checked here; [`Fleet::with_limits`] does that.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut tokens = Tokens::new(text);
        let post_count = tokens.count("post count")?;
        let slot_count = tokens.count("teleport count")?;

        // Lists grow as tokens arrive so a bogus header cannot force a huge reservation
        let mut teleports = Vec::new();
        for _ in 0..slot_count {
            teleports.push(tokens.pair("teleport")?);
        }

        let mut sources = Vec::new();
        let mut destinations = Vec::new();
        for _ in 0..post_count {
            let (source, destination) = tokens.pair("assignment")?;
            sources.push(source);
            destinations.push(destination);
        }

        Ok(Self {
            post_count,
            slot_count,
            teleports,
            sources,
            destinations,
        })
    }

    /// Read and parse everything from `reader`
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, InputError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }
}

/// Result of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetReport {
    pub stats: FleetStats,
    pub advantage_time_bound: u64,
}

impl FleetReport {
    /// Class counts line, then the bound line
    ///
    /// Each count is followed by one space, trailing space included, so the
    /// output is byte-identical to the established format.
    pub fn to_text(&self) -> String {
        let mut text: String = self.stats.counts.iter().map(|c| format!("{c} ")).collect();
        text.push('\n');
        text.push_str(&self.advantage_time_bound.to_string());
        text.push('\n');
        text
    }
}

/// Build, scan and query a fleet from parsed input
///
/// Stats can only be fetched while the fleet is alive, so the whole run
/// happens here and the fleet is released before returning.
pub fn run(input: &FleetInput, limits: &FleetLimits) -> Result<FleetReport, InputError> {
    let mut fleet = Fleet::with_limits(limits, input.post_count, input.slot_count)?;
    for (slot, &(u, v)) in input.teleports.iter().enumerate() {
        fleet.add_teleport(slot, u, v)?;
    }

    fleet.scan()?;
    let stats = fleet.stat()?;
    let advantage_time_bound = fleet.advantage_time_bound(&input.sources, &input.destinations)?;
    debug!(ships = stats.total, bound = advantage_time_bound, "run complete");
    fleet.release();

    Ok(FleetReport {
        stats,
        advantage_time_bound,
    })
}
