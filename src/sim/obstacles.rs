//! Obstacle block placement
//!
//! Each block is placed by shuffling every legal top-left anchor and taking
//! the first one whose footprint misses the occupancy set. The occupancy set
//! grows as blocks land, so later blocks in the same call avoid earlier ones.

use super::occupancy::Occupancy;
use super::phase::ObstacleSpec;
use super::rng::GameRng;
use super::state::{GameEvent, Obstacle, Position};

/// Find a free anchor for one `size`×`size` block.
///
/// Returns `None` when the size does not fit the grid or every anchor
/// overlaps something.
pub fn place_block(
    size: u16,
    grid_size: u16,
    occupied: &Occupancy,
    rng: &mut GameRng,
) -> Option<Obstacle> {
    if size == 0 || size > grid_size {
        return None;
    }

    let max_start = grid_size - size;
    let mut anchors: Vec<Position> = (0..=max_start)
        .flat_map(|x| (0..=max_start).map(move |y| Position::new(x, y)))
        .collect();
    rng.shuffle(&mut anchors);

    anchors
        .into_iter()
        .find(|&anchor| footprint_is_free(anchor, size, occupied))
        .map(|anchor| Obstacle::square(anchor, size))
}

fn footprint_is_free(anchor: Position, size: u16, occupied: &Occupancy) -> bool {
    (0..size).all(|dx| {
        (0..size).all(|dy| !occupied.contains(Position::new(anchor.x + dx, anchor.y + dy)))
    })
}

/// Place every block a phase asks for, best effort.
///
/// Placed blocks are appended to `obstacles` and added to `occupied`.
/// Returns one event per placed or skipped block.
pub fn place_phase_obstacles(
    specs: &[ObstacleSpec],
    grid_size: u16,
    occupied: &mut Occupancy,
    obstacles: &mut Vec<Obstacle>,
    rng: &mut GameRng,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for spec in specs {
        for placed in 0..spec.count {
            match place_block(spec.size, grid_size, occupied, rng) {
                Some(block) => {
                    log::debug!(
                        "Placed {}x{} obstacle at ({}, {})",
                        block.size,
                        block.size,
                        block.anchor.x,
                        block.anchor.y
                    );
                    events.push(GameEvent::ObstaclePlaced {
                        anchor: block.anchor,
                        size: block.size,
                    });
                    occupied.add_obstacle(&block);
                    obstacles.push(block);
                }
                None => {
                    // Occupancy only grows, so the rest of this spec cannot fit either
                    let skipped = spec.count - placed;
                    log::warn!(
                        "No room for {} more {}x{} obstacle(s), skipping",
                        skipped,
                        spec.size,
                        spec.size
                    );
                    events.extend((0..skipped).map(|_| GameEvent::ObstacleSkipped { size: spec.size }));
                    break;
                }
            }
        }
    }

    events
}
