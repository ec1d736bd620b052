//! Teleport list generators
//!
//! Every fixture returns `(u, v)` pairs over 0-based post ids, ready to be
//! fed to [`super::FleetBuilder::with_teleports`].

use fleet_core::PostId;

/// Path `start - start+1 - ... - start+len-1`
pub fn fixture_path(start: PostId, len: u32) -> Vec<(PostId, PostId)> {
    (start..start + len.saturating_sub(1)).map(|i| (i, i + 1)).collect()
}

/// Star with `center` joined to each of `leaves`
pub fn fixture_star(center: PostId, leaves: impl IntoIterator<Item = PostId>) -> Vec<(PostId, PostId)> {
    leaves.into_iter().map(|leaf| (center, leaf)).collect()
}

/// Cycle over `start..start+len`
pub fn fixture_cycle(start: PostId, len: u32) -> Vec<(PostId, PostId)> {
    (0..len).map(|i| (start + i, start + (i + 1) % len)).collect()
}

/// Complete bipartite graph between two disjoint ranges
pub fn fixture_complete_bipartite(
    left: std::ops::Range<PostId>,
    right: std::ops::Range<PostId>,
) -> Vec<(PostId, PostId)> {
    left.flat_map(|u| right.clone().map(move |v| (u, v)))
        .collect()
}

/// `count` disjoint paths of `len` posts each, laid out back to back
pub fn fixture_disjoint_paths(count: u32, len: u32) -> Vec<(PostId, PostId)> {
    (0..count).flat_map(|k| fixture_path(k * len, len)).collect()
}

/// 1-based text input: header, teleports, then the identity assignment
pub fn fixture_text_input(post_count: u32, teleports: &[(PostId, PostId)]) -> String {
    let mut text = format!("{post_count} {}\n", teleports.len());
    for (u, v) in teleports {
        text.push_str(&format!("{} {}\n", u + 1, v + 1));
    }
    for p in 1..=post_count {
        text.push_str(&format!("{p} {p}\n"));
    }
    text
}
