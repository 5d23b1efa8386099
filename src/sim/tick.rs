//! Action dispatch and the tick transition
//!
//! Every action maps the current state to a new state. Invalid actions hand
//! back an unchanged copy; nothing here returns an error.

use std::collections::VecDeque;

use super::collision;
use super::food::place_food;
use super::movement::next_head;
use super::obstacles::place_phase_obstacles;
use super::occupancy::Occupancy;
use super::rng::GameRng;
use super::speed::{reduce_interval, speed_step};
use super::state::{
    Action, Direction, GameEvent, GameOverReason, GameState, Position, Status,
};
use crate::settings::GameConfig;

/// Result of applying one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

impl Transition {
    fn quiet(state: GameState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }
}

/// Fresh Idle board: centered vertical snake heading up, food, no obstacles
pub fn create_initial_state(high_score: u32, config: &GameConfig, rng: &mut GameRng) -> GameState {
    let snake = initial_snake(config);
    let mut occupied = Occupancy::new();
    occupied.extend(snake.iter().copied());
    let food = place_food(config.grid_size, &occupied, rng);

    GameState {
        snake,
        direction: Direction::Up,
        queued_direction: Direction::Up,
        food,
        obstacles: Vec::new(),
        phase_index: config.phases.index_for_score(0),
        status: Status::Idle,
        score: 0,
        high_score,
        tick_interval_ms: config.initial_tick_ms,
        game_over_reason: None,
    }
}

/// Vertical column from the center down, lifted so the tail stays on the board
fn initial_snake(config: &GameConfig) -> VecDeque<Position> {
    let grid = config.grid_size;
    let length = config.initial_snake_length.min(grid);
    let center = grid / 2;
    let top = center.min(grid - length);
    (0..length).map(|i| Position::new(center, top + i)).collect()
}

/// Apply `action` and return the next state
pub fn apply(state: &GameState, action: Action, config: &GameConfig, rng: &mut GameRng) -> GameState {
    step(state, action, config, rng).state
}

/// Apply `action`, returning the next state and what happened on the way
pub fn step(state: &GameState, action: Action, config: &GameConfig, rng: &mut GameRng) -> Transition {
    match action {
        Action::Start => match state.status {
            Status::Idle | Status::GameOver => {
                let mut next = create_initial_state(state.high_score, config, rng);
                next.status = Status::Running;
                Transition::quiet(next)
            }
            Status::Running | Status::Paused => Transition::quiet(state.clone()),
        },
        Action::Pause => Transition::quiet(with_status(state, Status::Running, Status::Paused)),
        Action::Resume => Transition::quiet(with_status(state, Status::Paused, Status::Running)),
        Action::Reset => {
            if is_fresh_board(state) {
                Transition::quiet(state.clone())
            } else {
                Transition::quiet(create_initial_state(state.high_score, config, rng))
            }
        }
        Action::ChangeDirection(direction) => {
            let mut next = state.clone();
            if direction != state.direction && !direction.is_opposite(state.direction) {
                next.queued_direction = direction;
            }
            Transition::quiet(next)
        }
        Action::Tick => {
            if state.status == Status::Running {
                advance(state, config, rng)
            } else {
                Transition::quiet(state.clone())
            }
        }
    }
}

fn with_status(state: &GameState, from: Status, to: Status) -> GameState {
    let mut next = state.clone();
    if next.status == from {
        next.status = to;
    }
    next
}

/// Idle boards only come from create/Reset; a pending turn is the only thing
/// that can touch one.
fn is_fresh_board(state: &GameState) -> bool {
    state.status == Status::Idle && state.queued_direction == state.direction
}

/// One simulation step of a running game
fn advance(state: &GameState, config: &GameConfig, rng: &mut GameRng) -> Transition {
    let Some(head) = state.head() else {
        return Transition::quiet(state.clone());
    };

    let direction = state.queued_direction;
    let Some(new_head) = next_head(head, direction, config.grid_size, config.boundary) else {
        return game_over(state, GameOverReason::Wall);
    };
    if let Some(reason) = collision::detect(new_head, &state.snake, &state.obstacles) {
        return game_over(state, reason);
    }

    let mut events = Vec::new();
    let ate = state.food == Some(new_head);

    let mut snake = state.snake.clone();
    snake.push_front(new_head);
    if !ate {
        snake.pop_back();
    }

    let score = if ate {
        state.score + config.food_score
    } else {
        state.score
    };
    let phase_index = config.phases.index_for_score(score).max(state.phase_index);

    let mut interval = state.tick_interval_ms;
    if ate {
        let step = speed_step(config.speed_step_ms, &config.phases, phase_index);
        interval = reduce_interval(interval, step, config.min_tick_ms);
        events.push(GameEvent::FoodEaten { at: new_head, score });
    }

    let mut obstacles = state.obstacles.clone();
    if phase_index > state.phase_index {
        let mut occupied = Occupancy::new();
        occupied.extend(snake.iter().copied());
        // Only reachable for states whose phase lags their score (hand-built or loaded)
        if !ate && let Some(food) = state.food {
            occupied.insert(food);
        }
        for obstacle in &obstacles {
            occupied.add_obstacle(obstacle);
        }

        for index in config.phases.entered(state.phase_index, phase_index) {
            let Some(phase) = config.phases.get(index) else {
                continue;
            };
            log::info!("Entering phase {} at score {}", index + 1, score);
            events.push(GameEvent::PhaseEntered { index });
            events.extend(place_phase_obstacles(
                &phase.obstacles,
                config.grid_size,
                &mut occupied,
                &mut obstacles,
                rng,
            ));
            if let Some(boost) = phase.speed_boost {
                interval = reduce_interval(interval, boost, config.min_tick_ms);
            }
        }
    }

    let food = if ate {
        let mut occupied = Occupancy::new();
        occupied.extend(snake.iter().copied());
        for obstacle in &obstacles {
            occupied.add_obstacle(obstacle);
        }
        let food = place_food(config.grid_size, &occupied, rng);
        if food.is_none() {
            events.push(GameEvent::BoardFull);
        }
        food
    } else {
        state.food
    };

    Transition {
        state: GameState {
            snake,
            direction,
            queued_direction: direction,
            food,
            obstacles,
            phase_index,
            status: state.status,
            score,
            high_score: state.high_score,
            tick_interval_ms: interval,
            game_over_reason: state.game_over_reason,
        },
        events,
    }
}

fn game_over(state: &GameState, reason: GameOverReason) -> Transition {
    let high_score = state.score.max(state.high_score);
    log::info!(
        "Game over ({:?}) with score {}, high score {}",
        reason,
        state.score,
        high_score
    );

    let mut next = state.clone();
    next.status = Status::GameOver;
    next.high_score = high_score;
    next.game_over_reason = Some(reason);
    Transition {
        state: next,
        events: vec![GameEvent::GameOver {
            reason,
            score: state.score,
        }],
    }
}
