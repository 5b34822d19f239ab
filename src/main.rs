//! Hen Run entry point
//!
//! Native headless runner: plays one session on autopilot and prints the
//! final state as JSON.
//!
//! Usage: `hen-run [seed] [tuning.json]`

use hen_run::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use hen_run::sim::autopilot;
use hen_run::sim::{GameState, SessionObserver};
use hen_run::{Driver, LoopControl, Renderer, Session, Tuning};

/// Upper bound on frames for a headless run (~10 minutes at 60 Hz)
const MAX_FRAMES: u64 = 36_000;

/// Logs HUD-style notifications
struct LogObserver;

impl SessionObserver for LogObserver {
    fn on_score_changed(&mut self, score: u32) {
        log::debug!("Score: {}", score);
    }

    fn on_game_over(&mut self, final_score: u32, bonus: bool) {
        if bonus {
            log::info!("GAME OVER - score {} - you found the golden egg!", final_score);
        } else {
            log::info!("GAME OVER - score {}", final_score);
        }
    }

    fn on_reset(&mut self) {
        log::info!("New run");
    }
}

/// Periodic status line in place of a real renderer
struct StatusRenderer {
    every: u64,
}

impl Renderer for StatusRenderer {
    fn render(&mut self, state: &GameState) {
        if state.frame % self.every == 0 {
            log::info!(
                "frame {} | score {} | speed {:.1} | obstacles {}",
                state.frame,
                state.score,
                state.speed,
                state.obstacles.len()
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Hen Run (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::warn!("Invalid seed ({}), using 0", e);
            0
        }
        None => 0,
    };
    let tuning = match args.next() {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };

    let session = Session::with_seed(tuning, DEFAULT_WIDTH, DEFAULT_HEIGHT, seed);
    let mut driver = Driver::new(session);
    let mut renderer = StatusRenderer { every: 600 };
    let mut observer = LogObserver;

    while driver.session().state().frame < MAX_FRAMES {
        if autopilot::wants_jump(driver.session().state()) {
            driver.request_jump();
        }
        if driver.frame(&mut renderer, &mut observer) == LoopControl::Stop {
            break;
        }
    }

    match serde_json::to_string_pretty(driver.session().state()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize final state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library and drive `Driver::frame` from their own loop
}
