//! Food placement by rejection sampling

use super::occupancy::Occupancy;
use super::rng::GameRng;
use super::state::Position;

/// Rejected draws allowed per board cell before scanning for free cells
const REJECTION_DRAWS_PER_CELL: usize = 4;

/// Pick a uniformly random cell not in `occupied`.
///
/// Draws random cells until one is free. After a bounded number of misses
/// (a very crowded board) it enumerates the free cells and picks one of
/// them instead. Returns `None` only when every cell is taken.
pub fn place_food(grid_size: u16, occupied: &Occupancy, rng: &mut GameRng) -> Option<Position> {
    let total = usize::from(grid_size) * usize::from(grid_size);
    if occupied.len() >= total {
        log::warn!("No free cell left for food on a {grid_size}x{grid_size} board");
        return None;
    }

    for _ in 0..total * REJECTION_DRAWS_PER_CELL {
        let candidate = rng.cell(grid_size);
        if !occupied.contains(candidate) {
            return Some(candidate);
        }
    }

    let free: Vec<Position> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Position::new(x, y)))
        .filter(|&p| !occupied.contains(p))
        .collect();
    if free.is_empty() {
        log::warn!("No free cell left for food on a {grid_size}x{grid_size} board");
        return None;
    }
    Some(free[rng.index(free.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_avoids_occupied() {
        let mut rng = GameRng::new(5);
        let mut occupied = Occupancy::new();
        for x in 0..10 {
            for y in 0..9 {
                occupied.insert(Position::new(x, y));
            }
        }
        for _ in 0..50 {
            let food = place_food(10, &occupied, &mut rng).unwrap();
            assert_eq!(food.y, 9);
            assert!(!occupied.contains(food));
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let mut rng = GameRng::new(11);
        let mut occupied = Occupancy::new();
        for x in 0..4 {
            for y in 0..4 {
                if (x, y) != (2, 3) {
                    occupied.insert(Position::new(x, y));
                }
            }
        }
        assert_eq!(place_food(4, &occupied, &mut rng), Some(Position::new(2, 3)));
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut rng = GameRng::new(2);
        let mut occupied = Occupancy::new();
        for x in 0..3 {
            for y in 0..3 {
                occupied.insert(Position::new(x, y));
            }
        }
        assert_eq!(place_food(3, &occupied, &mut rng), None);
    }
}
