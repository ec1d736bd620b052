//! Property-based tests for fleet-core
//!
//! Invariants that should hold for ALL generated fleets:
//! - Insertion order: filling slots in any order gives the same ships and distances
//! - Paths and rings: distances follow the closed forms
//! - Aggregate: the bound is half the cheapest ship's total distance

mod common;

use common::*;
use fleet_core::{PostId, ShipClass};
use proptest::prelude::*;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

// ============================================================================
// QuickCheck Tests (closed forms)
// ============================================================================

#[quickcheck]
fn qc_path_distance_is_index_difference(len: u16, u: u16, v: u16) -> TestResult {
    let len = u32::from(len % 300);
    if len < 3 {
        return TestResult::discard();
    }
    let (u, v) = (u32::from(u) % len, u32::from(v) % len);

    let fleet = FleetBuilder::new()
        .with_posts(len.max(10) as usize)
        .with_teleports(fixture_path(0, len))
        .scanned();

    TestResult::from_bool(
        fleet.ship(0).and_then(|s| s.class()) == Some(ShipClass::Scout)
            && fleet.distance(u, v).unwrap() == Some(u64::from(u.abs_diff(v))),
    )
}

#[quickcheck]
fn qc_ring_distance_is_shorter_arc(len: u16, u: u16, v: u16) -> TestResult {
    let k = u32::from(len % 200);
    if k < 3 {
        return TestResult::discard();
    }
    let (u, v) = (u32::from(u) % k, u32::from(v) % k);

    let fleet = FleetBuilder::new()
        .with_posts(k.max(10) as usize)
        .with_teleports(fixture_cycle(0, k))
        .scanned();

    let d = fleet.distance(u, v).unwrap().unwrap();
    let arc = u.abs_diff(v);
    TestResult::from_bool(
        fleet.ship(0).and_then(|s| s.class()) == Some(ShipClass::Transport)
            && d == u64::from(arc.min(k - arc))
            && d <= u64::from(k / 2),
    )
}

// ============================================================================
// Proptest Strategies
// ============================================================================

/// Random forest over `n` posts: post `i` optionally hangs below some `j < i`
fn forest_strategy() -> impl Strategy<Value = (usize, Vec<(PostId, PostId)>)> {
    (10usize..40).prop_flat_map(|n| {
        let parents = (1..n)
            .map(|i| proptest::option::weighted(0.8, 0..i as PostId))
            .collect::<Vec<_>>();
        (Just(n), parents).prop_map(|(n, parents)| {
            let teleports = parents
                .into_iter()
                .enumerate()
                .filter_map(|(i, parent)| parent.map(|p| (p, i as PostId + 1)))
                .collect();
            (n, teleports)
        })
    })
}

/// Random simple graph (no loops, no parallel teleports)
fn simple_graph_strategy() -> impl Strategy<Value = (usize, Vec<(PostId, PostId)>)> {
    (10usize..30).prop_flat_map(|n| {
        let edge = (0..n as PostId, 0..n as PostId);
        (Just(n), proptest::collection::vec(edge, 0..60)).prop_map(|(n, raw)| {
            let mut seen = std::collections::BTreeSet::new();
            let teleports = raw
                .into_iter()
                .filter(|&(u, v)| u != v)
                .filter(|&(u, v)| seen.insert((u.min(v), u.max(v))))
                .collect();
            (n, teleports)
        })
    })
}

/// Graph plus a permutation of its slot indices
fn with_order(
    graph: impl Strategy<Value = (usize, Vec<(PostId, PostId)>)>,
) -> impl Strategy<Value = (usize, Vec<(PostId, PostId)>, Vec<usize>)> {
    graph.prop_flat_map(|(n, teleports)| {
        let order: Vec<usize> = (0..teleports.len()).collect();
        (Just(n), Just(teleports), Just(order).prop_shuffle())
    })
}

// ============================================================================
// Proptest Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_forest_distances_ignore_insertion_order(
        (n, teleports, order) in with_order(forest_strategy())
    ) {
        let in_slot_order = FleetBuilder::new().with_posts(n).with_teleports(teleports.clone()).scanned();

        let mut shuffled = FleetBuilder::new().with_posts(n).with_teleports(teleports).build_in_order(&order);
        shuffled.scan().unwrap();

        prop_assert_eq!(in_slot_order.stat().unwrap(), shuffled.stat().unwrap());
        prop_assert_eq!(distance_matrix(&in_slot_order), distance_matrix(&shuffled));
    }

    #[test]
    fn prop_stats_ignore_insertion_order(
        (n, teleports, order) in with_order(simple_graph_strategy())
    ) {
        let in_slot_order = FleetBuilder::new().with_posts(n).with_teleports(teleports.clone()).scanned();

        let mut shuffled = FleetBuilder::new().with_posts(n).with_teleports(teleports).build_in_order(&order);
        shuffled.scan().unwrap();

        prop_assert_eq!(in_slot_order.stat().unwrap(), shuffled.stat().unwrap());
        for p in 0..n as PostId {
            prop_assert_eq!(in_slot_order.ship_of(p).unwrap(), shuffled.ship_of(p).unwrap());
        }
    }

    #[test]
    fn prop_ships_partition_posts((n, teleports) in simple_graph_strategy()) {
        let fleet = FleetBuilder::new().with_posts(n).with_teleports(teleports.clone()).scanned();

        let covered: usize = fleet.ships().iter().map(|s| s.post_count()).sum();
        prop_assert_eq!(covered, n);
        prop_assert_eq!(fleet.stat().unwrap().total as usize, fleet.ship_count());
        for (u, v) in teleports {
            prop_assert_eq!(fleet.ship_of(u).unwrap(), fleet.ship_of(v).unwrap());
        }
    }

    #[test]
    fn prop_bound_is_half_the_cheapest_ship(
        (n, teleports) in forest_strategy(),
        keys in proptest::collection::vec(any::<u32>(), 40),
    ) {
        let fleet = FleetBuilder::new().with_posts(n).with_teleports(teleports).scanned();

        // Permute every ship's members by the random keys
        let mut destinations: Vec<PostId> = (0..n as PostId).collect();
        for ship in fleet.ships() {
            let mut shuffled = ship.members().to_vec();
            shuffled.sort_by_key(|&p| (keys[p as usize], p));
            for (&from, &to) in ship.members().iter().zip(&shuffled) {
                destinations[from as usize] = to;
            }
        }
        let sources: Vec<PostId> = (0..n as PostId).collect();

        let cheapest = fleet
            .ships()
            .iter()
            .map(|ship| {
                ship.members()
                    .iter()
                    .map(|&p| fleet.distance(p, destinations[p as usize]).unwrap().unwrap())
                    .sum::<u64>()
            })
            .min()
            .unwrap();

        prop_assert_eq!(
            fleet.advantage_time_bound(&sources, &destinations).unwrap(),
            cheapest / 2
        );
    }
}
