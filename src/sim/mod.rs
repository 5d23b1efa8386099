//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, passed in by the caller
//! - Transitions return a new state; the input state is never touched
//! - No rendering, input or timer dependencies

pub mod autopilot;
pub mod collision;
pub mod food;
pub mod movement;
pub mod obstacles;
pub mod occupancy;
pub mod phase;
pub mod rng;
pub mod speed;
pub mod state;
pub mod tick;

pub use movement::{BoundaryPolicy, next_head};
pub use occupancy::Occupancy;
pub use phase::{ObstacleSpec, PhaseSpec, PhaseTable};
pub use rng::GameRng;
pub use state::{
    Action, Direction, GameEvent, GameOverReason, GameState, Obstacle, ParseActionError, Position,
    Status,
};
pub use tick::{Transition, apply, create_initial_state, step};
