//! Browser binding
//!
//! JS draws the board from `stateJson()`, turns key/swipe input into
//! `dispatch("left")` and friends, and re-arms its `setInterval` from the
//! number `dispatch` returns.

use wasm_bindgen::prelude::*;

use crate::sim::{Action, GameRng};
use crate::{GameConfig, Session, TimerCommand};

#[wasm_bindgen(start)]
pub fn wasm_start() -> Result<(), JsError> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|err| JsError::new(&format!("failed to initialize logger: {err}")))?;
    log::info!("Phase Snake (wasm) starting...");
    Ok(())
}

/// Session handle exported to JS
#[wasm_bindgen]
pub struct WebSession {
    session: Session,
}

#[wasm_bindgen]
impl WebSession {
    /// Start an Idle session. `config_json` overrides the default rules.
    #[wasm_bindgen(constructor)]
    pub fn new(high_score: u32, config_json: Option<String>) -> Result<WebSession, JsError> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json)?,
            None => GameConfig::default(),
        };
        Ok(Self {
            session: Session::with_high_score(config, GameRng::from_entropy(), high_score)?,
        })
    }

    /// Apply a named action ("start", "tick", "up", ...).
    ///
    /// Returns the timer change: `-1` to stop the timer, `0` to leave it,
    /// or a positive interval in ms to (re)start it.
    pub fn dispatch(&mut self, action: &str) -> Result<i32, JsError> {
        let action: Action = action.parse()?;
        Ok(match self.session.dispatch(action) {
            TimerCommand::Disarm => -1,
            TimerCommand::Keep => 0,
            TimerCommand::Arm { interval_ms } => i32::try_from(interval_ms).unwrap_or(i32::MAX),
        })
    }

    /// Full state as JSON for the view
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(self.session.state())?)
    }

    #[wasm_bindgen(js_name = highScore)]
    pub fn high_score(&self) -> u32 {
        self.session.state().high_score
    }

    #[wasm_bindgen(js_name = tickIntervalMs)]
    pub fn tick_interval_ms(&self) -> u32 {
        self.session.state().tick_interval_ms
    }
}
