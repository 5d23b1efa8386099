//! Idle/demo mode steering
//!
//! Greedy one-step lookahead: never pick a fatal move, prefer moves that do
//! not walk into a dead end, then the shortest distance to the food.

use super::collision;
use super::movement::{BoundaryPolicy, next_head};
use super::state::{Direction, GameState, Position};
use crate::settings::GameConfig;

/// Choose a direction for the next tick, or `None` if every move is fatal
pub fn choose_direction(state: &GameState, config: &GameConfig) -> Option<Direction> {
    let head = state.head()?;

    // Current direction first so ties keep the snake going straight
    let mut order = vec![state.direction];
    order.extend(Direction::ALL.iter().copied().filter(|d| *d != state.direction));

    order
        .into_iter()
        .filter(|d| !d.is_opposite(state.direction))
        .filter_map(|d| {
            let cell = next_head(head, d, config.grid_size, config.boundary)?;
            if collision::detect(cell, &state.snake, &state.obstacles).is_some() {
                return None;
            }
            let dead_end = exits(cell, state, config) == 0;
            let distance = state
                .food
                .map(|food| distance(cell, food, config.grid_size, config.boundary))
                .unwrap_or(0);
            Some((d, dead_end, distance))
        })
        .min_by_key(|(_, dead_end, distance)| (*dead_end, *distance))
        .map(|(d, _, _)| d)
}

/// Free neighbours of `cell` once the head has moved there
fn exits(cell: Position, state: &GameState, config: &GameConfig) -> usize {
    Direction::ALL
        .iter()
        .filter_map(|d| next_head(cell, *d, config.grid_size, config.boundary))
        .filter(|n| {
            *n != cell
                && !state.snake.iter().rev().skip(1).any(|p| p == n)
                && !state.is_obstacle(*n)
        })
        .count()
}

/// Manhattan distance, measured around the edges when the grid wraps
fn distance(a: Position, b: Position, grid_size: u16, policy: BoundaryPolicy) -> u32 {
    let axis = |p: u16, q: u16| {
        let d = u32::from(p.abs_diff(q));
        match policy {
            BoundaryPolicy::Wrap => d.min(u32::from(grid_size) - d),
            BoundaryPolicy::Solid => d,
        }
    };
    axis(a.x, b.x) + axis(a.y, b.y)
}
