//! Collision detection for a proposed head cell
//!
//! The whole pre-move body counts as solid, tail included. The tail would
//! vacate its cell on a non-eating tick, but the head is tested before the
//! body moves, so chasing your own tail is fatal.

use std::collections::VecDeque;

use super::state::{GameOverReason, Obstacle, Position};

/// Test `candidate` against the current body and every obstacle.
///
/// `None` means the cell is a miss and the move may proceed.
pub fn detect(
    candidate: Position,
    snake: &VecDeque<Position>,
    obstacles: &[Obstacle],
) -> Option<GameOverReason> {
    if snake.contains(&candidate) {
        return Some(GameOverReason::SelfCollision);
    }
    if obstacles.iter().any(|o| o.contains(candidate)) {
        return Some(GameOverReason::Obstacle);
    }
    None
}
