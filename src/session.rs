//! Session driver: owns config, RNG and the current state
//!
//! The simulation itself never sleeps or schedules anything. A host (browser
//! loop, terminal loop, test) forwards actions to [`Session::dispatch`] and
//! obeys the returned [`TimerCommand`] to keep its repeating tick timer in
//! step with the game.

use crate::settings::{ConfigError, GameConfig};
use crate::sim::{Action, GameEvent, GameRng, GameState, Status, create_initial_state, step};

/// What the host's tick timer should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// (Re)start a repeating timer at this interval
    Arm { interval_ms: u32 },
    /// Stop the timer; no Tick until the next Arm
    Disarm,
    /// Leave the timer as it is
    Keep,
}

impl TimerCommand {
    /// Timer change needed to go from `before` to `after`
    pub fn between(before: &GameState, after: &GameState) -> Self {
        let was_running = before.status == Status::Running;
        let is_running = after.status == Status::Running;
        match (was_running, is_running) {
            (false, true) => TimerCommand::Arm {
                interval_ms: after.tick_interval_ms,
            },
            (true, true) if before.tick_interval_ms != after.tick_interval_ms => TimerCommand::Arm {
                interval_ms: after.tick_interval_ms,
            },
            (true, false) => TimerCommand::Disarm,
            _ => TimerCommand::Keep,
        }
    }
}

/// One running game plus everything needed to advance it
pub struct Session {
    config: GameConfig,
    rng: GameRng,
    state: GameState,
    ticks: u64,
}

impl Session {
    /// New Idle session with a zero high score
    pub fn new(config: GameConfig, rng: GameRng) -> Result<Self, ConfigError> {
        Self::with_high_score(config, rng, 0)
    }

    /// New Idle session; rejects a config that fails [`GameConfig::validate`]
    pub fn with_high_score(
        config: GameConfig,
        mut rng: GameRng,
        high_score: u32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "New session: {}x{} grid, {} boundary, seed {}",
            config.grid_size,
            config.grid_size,
            config.boundary,
            rng.seed()
        );
        let state = create_initial_state(high_score, &config, &mut rng);
        Ok(Self {
            config,
            rng,
            state,
            ticks: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Ticks applied while running since the session was created
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Apply one action and report how the tick timer must change
    pub fn dispatch(&mut self, action: Action) -> TimerCommand {
        self.dispatch_with_events(action).0
    }

    /// Like [`Session::dispatch`], also returning the transition's events
    pub fn dispatch_with_events(&mut self, action: Action) -> (TimerCommand, Vec<GameEvent>) {
        if action == Action::Tick && self.state.status == Status::Running {
            self.ticks += 1;
        }
        let transition = step(&self.state, action, &self.config, &mut self.rng);
        for event in &transition.events {
            log::debug!("tick {}: {:?}", self.ticks, event);
        }
        let command = TimerCommand::between(&self.state, &transition.state);
        self.state = transition.state;
        (command, transition.events)
    }
}
