//! Iterative depth-first fleet scan

use tracing::{debug, info};

use crate::errors::{try_reserve, FleetError, Result};
use crate::features::discovery::domain::ship::Ship;
use crate::features::fleet_store::{FleetStore, Placement};
use crate::shared::models::{PostId, ShipId};

use super::classifier::{classify, ShipSignals};

/// One post on the traversal stack
#[derive(Debug, Clone, Copy)]
struct Frame {
    post: PostId,
    placement: Placement,

    /// Next adjacency entry to examine
    cursor: Option<u32>,

    /// Entries examined so far
    degree: u32,
}

/// Discover, place and classify every ship, appending them to `ships`
///
/// Posts are visited in index order; every unplaced post roots a new ship.
/// On error the ships registered so far stay in `ships` and the store keeps
/// the placements written so far.
pub fn scan_fleet(store: &mut FleetStore, ships: &mut Vec<Ship>) -> Result<usize> {
    let post_count = store.post_count();

    // Every post is pushed at most once per scan, so this never grows
    let mut stack: Vec<Frame> = Vec::new();
    try_reserve(&mut stack, post_count, "traversal frames")?;

    for index in 0..post_count {
        let root = index as PostId;
        if store.is_placed(root) {
            continue;
        }

        let id = ships.len() as ShipId;
        try_reserve(ships, 1, "ships")?;
        ships.push(Ship::new(id, root));
        let ship = ships
            .last_mut()
            .ok_or_else(|| FleetError::inconsistent("ship vanished after registration"))?;

        let signals = visit_ship(store, ship, &mut stack)?;
        let class = classify(&signals);
        ship.set_class(class);

        debug!(
            ship = id,
            class = %class,
            posts = ship.post_count(),
            height = ship.height(),
            back_edges = signals.back_edges,
            max_degree = signals.max_degree,
            "ship classified"
        );
    }

    info!(ships = ships.len(), posts = post_count, "fleet scanned");
    Ok(ships.len())
}

/// Depth-first traversal of the ship rooted at `ship.root()`
fn visit_ship(store: &mut FleetStore, ship: &mut Ship, stack: &mut Vec<Frame>) -> Result<ShipSignals> {
    let mut signals = ShipSignals::default();

    let root = ship.root();
    let placement = Placement::root(ship.id());
    attach(store, ship, root, placement)?;
    stack.push(Frame {
        post: root,
        placement,
        cursor: store.first_teleport(root),
        degree: 0,
    });

    while let Some(frame) = stack.last_mut() {
        let Some(entry) = frame.cursor else {
            signals.max_degree = signals.max_degree.max(frame.degree);
            stack.pop();
            continue;
        };

        let teleport = store
            .teleport(entry)
            .ok_or_else(|| FleetError::inconsistent(format!("dangling teleport link {entry}")))?;
        frame.cursor = teleport.next;
        frame.degree += 1;

        let (u, here) = (frame.post, frame.placement);
        let v = teleport.to;

        match store.placement(v) {
            // Placed when first reached from the top frame, not when pushed
            None => {
                let placement = here.child_of(u, ship.next_rank());
                attach(store, ship, v, placement)?;
                stack.push(Frame {
                    post: v,
                    placement,
                    cursor: store.first_teleport(v),
                    degree: 0,
                });
            }
            Some(there) => {
                // Strictly shallower and not the tree edge back to the parent
                if there.depth < here.depth && here.parent != Some(v) {
                    signals.back_edges += 1;
                }
            }
        }
    }

    Ok(signals)
}

fn attach(store: &mut FleetStore, ship: &mut Ship, post: PostId, placement: Placement) -> Result<()> {
    store.place(post, placement)?;
    ship.admit(post, placement.depth)
}
