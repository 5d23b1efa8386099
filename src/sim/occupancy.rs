//! Occupancy set: cells considered taken at one moment of a transition

use std::collections::HashSet;

use super::state::{Obstacle, Position};

#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    cells: HashSet<Position>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pos: Position) {
        self.cells.insert(pos);
    }

    pub fn extend(&mut self, cells: impl IntoIterator<Item = Position>) {
        self.cells.extend(cells);
    }

    pub fn add_obstacle(&mut self, obstacle: &Obstacle) {
        self.extend(obstacle.cells.iter().copied());
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
