//! Lower-bound aggregation with per-ship pruning

use tracing::trace;

use crate::errors::{try_reserve, FleetError, Result};
use crate::features::distance::ShipDistance;
use crate::shared::models::{PostId, ShipId};

/// Running cost of one ship
#[derive(Debug, Clone, Copy)]
struct Tally {
    sum: u64,
    remaining: usize,
}

/// Compute the advantage time bound of `sources[i] → destinations[i]`
///
/// Pairs are processed in input order. A ship whose running sum already
/// reaches the best complete ship is skipped, and the call returns `0` as
/// soon as some ship completes with a sum of at most `1`.
///
/// # Errors
/// - [`FleetError::LengthMismatch`] unless both slices hold one entry per post
/// - [`FleetError::PostOutOfRange`] for any index outside the fleet
/// - [`FleetError::ShipMismatch`] when a pair spans two ships
/// - [`FleetError::Inconsistent`] when the assignment is not a per-ship
///   bijection (a ship receives too many pairs, or none completes)
pub fn advantage_time_bound<D>(fleet: &D, sources: &[PostId], destinations: &[PostId]) -> Result<u64>
where
    D: ShipDistance + ?Sized,
{
    let expected = fleet.post_count();
    if sources.len() != expected || destinations.len() != expected {
        return Err(FleetError::LengthMismatch {
            sources: sources.len(),
            destinations: destinations.len(),
            expected,
        });
    }

    let ship_count = fleet.ship_count();
    let mut tallies: Vec<Tally> = Vec::new();
    try_reserve(&mut tallies, ship_count, "ship tallies")?;
    for ship in 0..ship_count {
        tallies.push(Tally {
            sum: 0,
            remaining: fleet.ship_size(ship as ShipId)?,
        });
    }

    // `None` stands for infinity
    let mut best: Option<u64> = None;

    for (&u, &v) in sources.iter().zip(destinations) {
        let ship = fleet.ship_of(u)?;
        if fleet.ship_of(v)? != ship {
            return Err(FleetError::ShipMismatch { from: u, to: v });
        }

        let tally = tallies
            .get_mut(ship as usize)
            .ok_or_else(|| FleetError::inconsistent(format!("ship {ship} has no tally")))?;

        if best.is_some_and(|m| tally.sum >= m) {
            trace!(ship, sum = tally.sum, best = ?best, "ship pruned");
            continue;
        }

        if u != v {
            let d = fleet.distance(u, v)?.ok_or_else(|| {
                FleetError::inconsistent(format!("posts {u} and {v} share ship {ship} but are unreachable"))
            })?;
            tally.sum = tally.sum.saturating_add(d);
        }

        tally.remaining = tally.remaining.checked_sub(1).ok_or_else(|| {
            FleetError::inconsistent(format!("ship {ship} received more pairs than it has posts"))
        })?;

        if tally.remaining == 0 && best.map_or(true, |m| tally.sum < m) {
            trace!(ship, sum = tally.sum, "new best ship");
            best = Some(tally.sum);
        }

        if best.is_some_and(|m| m <= 1) {
            return Ok(0);
        }
    }

    best.map(|m| m / 2)
        .ok_or_else(|| FleetError::inconsistent("no ship received a complete assignment"))
}
