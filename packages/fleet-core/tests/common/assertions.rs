//! Custom assertions for fleet verification

use fleet_core::{Fleet, PostId, ShipClass};

/// Assert the class of every ship, in ship id order
pub fn assert_ship_classes(fleet: &Fleet, expected: &[ShipClass]) {
    let actual: Vec<Option<ShipClass>> = fleet.ships().iter().map(|s| s.class()).collect();
    let expected: Vec<Option<ShipClass>> = expected.iter().copied().map(Some).collect();
    assert_eq!(actual, expected, "ship classes");
}

/// Assert `distance(u, v) == expected(u, v)` for every pair in `posts`
pub fn assert_distances(fleet: &Fleet, posts: &[PostId], expected: impl Fn(PostId, PostId) -> u64) {
    for &u in posts {
        for &v in posts {
            assert_eq!(
                fleet.distance(u, v).expect("distance"),
                Some(expected(u, v)),
                "distance({u}, {v})"
            );
        }
    }
}

/// Full distance matrix (`None` across ships)
pub fn distance_matrix(fleet: &Fleet) -> Vec<Vec<Option<u64>>> {
    let n = fleet.post_count() as PostId;
    (0..n)
        .map(|u| (0..n).map(|v| fleet.distance(u, v).expect("distance")).collect())
        .collect()
}

/// Depth of `post` in the discovery forest
pub fn depth(fleet: &Fleet, post: PostId) -> u32 {
    fleet.placement(post).expect("placed post").depth
}
