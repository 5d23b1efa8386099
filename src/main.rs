//! Phase Snake entry point
//!
//! Native: plays one headless game with the autopilot and prints the final
//! board. Usage: `phase-snake [seed] [config.json]`.

#[cfg(not(target_arch = "wasm32"))]
use phase_snake::{
    GameConfig, Session, TimerCommand,
    sim::{Action, GameEvent, GameRng, GameState, Status, autopilot},
};

/// Safety cap so a perfect autopilot run still terminates
#[cfg(not(target_arch = "wasm32"))]
const MAX_TICKS: u64 = 20_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Phase Snake (native) starting...");

    if let Err(err) = run() {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let rng = match args.next() {
        Some(seed) => GameRng::new(seed.parse()?),
        None => GameRng::from_entropy(),
    };
    let config = match args.next() {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let mut session = Session::new(config, rng)?;
    let mut interval_ms = match session.dispatch(Action::Start) {
        TimerCommand::Arm { interval_ms } => interval_ms,
        _ => session.state().tick_interval_ms,
    };
    // Simulated wall clock: the sum of every armed interval
    let mut elapsed_ms: u64 = 0;

    while session.state().status == Status::Running && session.ticks() < MAX_TICKS {
        if let Some(direction) = autopilot::choose_direction(session.state(), session.config()) {
            session.dispatch(Action::ChangeDirection(direction));
        }

        elapsed_ms += u64::from(interval_ms);
        let (command, events) = session.dispatch_with_events(Action::Tick);
        for event in &events {
            if let GameEvent::PhaseEntered { index } = event {
                println!(
                    "phase {:>2} at score {:>4} (tick {}, {} ms/tick)",
                    index + 1,
                    session.state().score,
                    session.ticks(),
                    session.state().tick_interval_ms
                );
            }
        }
        if let TimerCommand::Arm { interval_ms: next } = command {
            interval_ms = next;
        }
    }

    let state = session.state();
    println!("{}", render_board(state, session.config().grid_size));
    println!(
        "seed {} | score {} | high score {} | length {} | obstacles {} | {} ticks (~{:.1}s)",
        session.seed(),
        state.score,
        state.high_score,
        state.snake.len(),
        state.obstacles.len(),
        session.ticks(),
        elapsed_ms as f64 / 1000.0
    );
    match state.game_over_reason {
        Some(reason) => println!("game over: {reason:?}"),
        None => println!("stopped after {MAX_TICKS} ticks"),
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn render_board(state: &GameState, grid_size: u16) -> String {
    use phase_snake::sim::Position;

    let mut out = String::with_capacity(usize::from(grid_size + 3) * usize::from(grid_size + 2));
    let border = format!("+{}+\n", "-".repeat(usize::from(grid_size)));
    out.push_str(&border);
    for y in 0..grid_size {
        out.push('|');
        for x in 0..grid_size {
            let pos = Position::new(x, y);
            let glyph = if state.head() == Some(pos) {
                '@'
            } else if state.snake.contains(&pos) {
                'o'
            } else if state.food == Some(pos) {
                '*'
            } else if state.is_obstacle(pos) {
                '#'
            } else {
                ' '
            };
            out.push(glyph);
        }
        out.push_str("|\n");
    }
    out.push_str(border.trim_end());
    out
}
