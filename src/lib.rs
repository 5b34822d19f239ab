//! Hen Run - A single-screen endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `session`: Session controller (playing/game-over state machine, observers)
//! - `driver`: Frame driver and renderer hand-off
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod session;
pub mod sim;
pub mod tuning;

pub use driver::{Driver, LoopControl, NullRenderer, Renderer};
pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration applied every frame (units/frame²)
    pub const GRAVITY: f32 = 0.6;
    /// Upward velocity given by a jump (units/frame)
    pub const JUMP_STRENGTH: f32 = 12.0;

    /// Entity sizes (all square)
    pub const HEN_SIZE: f32 = 40.0;
    pub const OBSTACLE_SIZE: f32 = 40.0;
    pub const COLLECTIBLE_SIZE: f32 = 30.0;

    /// Floor height in landscape orientation
    pub const GROUND_HEIGHT: f32 = 50.0;
    /// Portrait floors take height / PORTRAIT_GROUND_DIVISOR
    pub const PORTRAIT_GROUND_DIVISOR: f32 = 3.0;

    /// Scroll speed at the start of a run (units/frame)
    pub const START_SPEED: f32 = 5.0;
    /// Speed ramps every N frames
    pub const SPEED_RAMP_INTERVAL: u64 = 1000;
    pub const SPEED_RAMP_STEP: f32 = 0.5;

    /// Obstacle delay is drawn from [MIN, MIN + SPAN) frames
    pub const SPAWN_DELAY_MIN: u32 = 60;
    pub const SPAWN_DELAY_SPAN: u32 = 90;

    /// Collectible only shows up once the player has proven themselves
    pub const COLLECTIBLE_MIN_SCORE: u32 = 10;
    /// Per-frame spawn probability while the collectible gate is open
    pub const COLLECTIBLE_SPAWN_CHANCE: f32 = 0.005;

    /// Default world size for headless runs
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;
}

/// Floor height for the given viewport: a third of the height when the
/// viewport is portrait, a fixed strip otherwise.
#[inline]
pub fn ground_height_for(width: f32, height: f32, landscape: f32, portrait_divisor: f32) -> f32 {
    if height > width {
        height / portrait_divisor
    } else {
        landscape
    }
}
