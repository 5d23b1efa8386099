//! Head movement on the grid
//!
//! The boundary rule is a policy value carried in the session config, so the
//! same tick code serves both rulesets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::state::{Direction, Position};

/// What happens when the head leaves the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoundaryPolicy {
    /// Re-enter from the opposite edge
    #[default]
    Wrap,
    /// Leaving the grid is a fatal wall collision
    Solid,
}

impl BoundaryPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryPolicy::Wrap => "wrap",
            BoundaryPolicy::Solid => "solid",
        }
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundaryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wrap" | "wraparound" | "wrap-around" => Ok(BoundaryPolicy::Wrap),
            "solid" | "wall" | "walls" => Ok(BoundaryPolicy::Solid),
            other => Err(format!("unknown boundary policy: {other}")),
        }
    }
}

/// Next head cell, or `None` when the move leaves a solid grid
pub fn next_head(
    head: Position,
    direction: Direction,
    grid_size: u16,
    policy: BoundaryPolicy,
) -> Option<Position> {
    let (dx, dy) = direction.delta();
    let size = i32::from(grid_size);
    let x = i32::from(head.x) + dx;
    let y = i32::from(head.y) + dy;

    match policy {
        BoundaryPolicy::Wrap => Some(Position::new(
            x.rem_euclid(size) as u16,
            y.rem_euclid(size) as u16,
        )),
        BoundaryPolicy::Solid => {
            if (0..size).contains(&x) && (0..size).contains(&y) {
                Some(Position::new(x as u16, y as u16))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_right_edge() {
        let next = next_head(Position::new(19, 7), Direction::Right, 20, BoundaryPolicy::Wrap);
        assert_eq!(next, Some(Position::new(0, 7)));
    }

    #[test]
    fn test_wrap_top_and_left_edges() {
        let up = next_head(Position::new(4, 0), Direction::Up, 20, BoundaryPolicy::Wrap);
        assert_eq!(up, Some(Position::new(4, 19)));
        let left = next_head(Position::new(0, 4), Direction::Left, 20, BoundaryPolicy::Wrap);
        assert_eq!(left, Some(Position::new(19, 4)));
    }

    #[test]
    fn test_interior_move() {
        let next = next_head(Position::new(5, 5), Direction::Down, 20, BoundaryPolicy::Solid);
        assert_eq!(next, Some(Position::new(5, 6)));
    }

    #[test]
    fn test_solid_edge_is_fatal() {
        assert_eq!(
            next_head(Position::new(19, 3), Direction::Right, 20, BoundaryPolicy::Solid),
            None
        );
        assert_eq!(
            next_head(Position::new(3, 0), Direction::Up, 20, BoundaryPolicy::Solid),
            None
        );
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Wrap".parse::<BoundaryPolicy>(), Ok(BoundaryPolicy::Wrap));
        assert_eq!("walls".parse::<BoundaryPolicy>(), Ok(BoundaryPolicy::Solid));
        assert!("bouncy".parse::<BoundaryPolicy>().is_err());
    }
}
