//! Game state and core simulation types
//!
//! Everything a view needs to draw the board lives in [`GameState`]. The
//! state is a plain value: transitions build a new one instead of mutating
//! the old.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit step as (dx, dy); y grows downward
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Lifecycle status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Fresh board, waiting for Start
    Idle,
    /// Ticks advance the snake
    Running,
    /// Ticks are ignored until Resume
    Paused,
    /// Run ended; only Start or Reset leave this state
    GameOver,
}

/// Why the last run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Left the grid under the solid boundary policy
    Wall,
    /// Head hit the snake's own body
    SelfCollision,
    /// Head hit an obstacle block
    Obstacle,
}

/// One placed obstacle block. Never moved or removed once placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner of the block
    pub anchor: Position,
    /// Edge length in cells
    pub size: u16,
    /// Every cell covered by the block
    pub cells: Vec<Position>,
}

impl Obstacle {
    /// Build a `size`×`size` block anchored at its top-left corner
    pub fn square(anchor: Position, size: u16) -> Self {
        let mut cells = Vec::with_capacity(usize::from(size) * usize::from(size));
        for dx in 0..size {
            for dy in 0..size {
                cells.push(Position::new(anchor.x + dx, anchor.y + dy));
            }
        }
        Self {
            anchor,
            size,
            cells,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.anchor.x
            && pos.y >= self.anchor.y
            && pos.x < self.anchor.x + self.size
            && pos.y < self.anchor.y + self.size
    }
}

/// Actions accepted by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Start,
    Pause,
    Resume,
    Reset,
    ChangeDirection(Direction),
    Tick,
}

/// Returned when text does not name an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseActionError {
    pub input: String,
}

impl fmt::Display for ParseActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action: {:?}", self.input)
    }
}

impl std::error::Error for ParseActionError {}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" => Ok(Action::Start),
            "pause" => Ok(Action::Pause),
            "resume" => Ok(Action::Resume),
            "reset" => Ok(Action::Reset),
            "tick" => Ok(Action::Tick),
            "up" => Ok(Action::ChangeDirection(Direction::Up)),
            "down" => Ok(Action::ChangeDirection(Direction::Down)),
            "left" => Ok(Action::ChangeDirection(Direction::Left)),
            "right" => Ok(Action::ChangeDirection(Direction::Right)),
            _ => Err(ParseActionError {
                input: s.to_string(),
            }),
        }
    }
}

/// Something notable that happened during a transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    FoodEaten { at: Position, score: u32 },
    PhaseEntered { index: usize },
    ObstaclePlaced { anchor: Position, size: u16 },
    ObstacleSkipped { size: u16 },
    BoardFull,
    GameOver { reason: GameOverReason, score: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Snake cells, head first
    pub snake: VecDeque<Position>,
    /// Direction used by the last successful move
    pub direction: Direction,
    /// Direction the next tick will try
    pub queued_direction: Direction,
    /// Current food cell; `None` only when no free cell was left
    pub food: Option<Position>,
    /// Placed obstacles, in placement order
    pub obstacles: Vec<Obstacle>,
    /// Index into the phase table
    pub phase_index: usize,
    pub status: Status,
    pub score: u32,
    /// Best score seen in this process
    pub high_score: u32,
    /// Milliseconds between ticks
    pub tick_interval_ms: u32,
    /// Set once the game ends
    #[serde(default)]
    pub game_over_reason: Option<GameOverReason>,
}

impl GameState {
    pub fn head(&self) -> Option<Position> {
        self.snake.front().copied()
    }

    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.obstacles.iter().any(|o| o.contains(pos))
    }
}
