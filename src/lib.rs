//! Phase Snake - simulation core for a grid snake game with difficulty phases
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, placement, phases)
//! - `session`: Owns a running game and tells the host how to drive its timer
//! - `settings`: Session configuration and validation
//! - `platform`: Browser binding (wasm32 only)

pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{Session, TimerCommand};
pub use settings::{ConfigError, GameConfig};

/// Default game configuration constants
pub mod consts {
    /// Board edge length in cells
    pub const GRID_SIZE: u16 = 20;
    /// Snake length on a fresh board
    pub const INITIAL_SNAKE_LENGTH: u16 = 4;
    /// Milliseconds between ticks on a fresh board
    pub const INITIAL_TICK_MS: u32 = 180;
    /// The tick interval never drops below this
    pub const MIN_TICK_MS: u32 = 80;
    /// Base interval reduction per food eaten
    pub const SPEED_STEP_MS: u32 = 2;
    /// Points per food
    pub const FOOD_SCORE: u32 = 10;
}
