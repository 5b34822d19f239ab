//! Game balance and physics tuning
//!
//! Every gameplay constant lives here so a run can be reconfigured from a
//! JSON file without touching the simulation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Data-driven gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Initial upward velocity of a jump
    pub jump_strength: f32,

    // === Entities ===
    pub hen_size: f32,
    pub obstacle_size: f32,
    pub collectible_size: f32,

    // === World ===
    /// Floor height when the viewport is landscape
    pub ground_height: f32,
    /// Floor is height / divisor when the viewport is portrait
    pub portrait_ground_divisor: f32,

    // === Pacing ===
    pub start_speed: f32,
    /// Frames between speed increases
    pub speed_ramp_interval: u64,
    pub speed_ramp_step: f32,

    // === Spawning ===
    /// Minimum frames between obstacles
    pub spawn_delay_min: u32,
    /// Random extra frames (exclusive upper bound)
    pub spawn_delay_span: u32,
    /// Score needed before the collectible can appear
    pub collectible_min_score: u32,
    /// Per-frame collectible spawn probability
    pub collectible_spawn_chance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,

            hen_size: HEN_SIZE,
            obstacle_size: OBSTACLE_SIZE,
            collectible_size: COLLECTIBLE_SIZE,

            ground_height: GROUND_HEIGHT,
            portrait_ground_divisor: PORTRAIT_GROUND_DIVISOR,

            start_speed: START_SPEED,
            speed_ramp_interval: SPEED_RAMP_INTERVAL,
            speed_ramp_step: SPEED_RAMP_STEP,

            spawn_delay_min: SPAWN_DELAY_MIN,
            spawn_delay_span: SPAWN_DELAY_SPAN,
            collectible_min_score: COLLECTIBLE_MIN_SCORE,
            collectible_spawn_chance: COLLECTIBLE_SPAWN_CHANCE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    return tuning;
                }
                Err(e) => log::warn!("Invalid tuning in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read tuning {}: {}", path.display(), e),
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Clamp values that would stall or crash the simulation
    pub fn sanitized(mut self) -> Self {
        if self.speed_ramp_interval == 0 {
            log::warn!("speed_ramp_interval must be at least 1; using 1");
            self.speed_ramp_interval = 1;
        }
        if !(self.portrait_ground_divisor.is_finite() && self.portrait_ground_divisor > 0.0) {
            log::warn!(
                "portrait_ground_divisor {} is unusable; using {}",
                self.portrait_ground_divisor,
                PORTRAIT_GROUND_DIVISOR
            );
            self.portrait_ground_divisor = PORTRAIT_GROUND_DIVISOR;
        }
        if !(0.0..=1.0).contains(&self.collectible_spawn_chance) {
            log::warn!(
                "collectible_spawn_chance {} outside [0, 1]; clamping",
                self.collectible_spawn_chance
            );
            self.collectible_spawn_chance = if self.collectible_spawn_chance.is_nan() {
                COLLECTIBLE_SPAWN_CHANCE
            } else {
                self.collectible_spawn_chance.clamp(0.0, 1.0)
            };
        }
        // Countdown is an i32 frame count
        let max_delay = i32::MAX as u32;
        if self.spawn_delay_min > max_delay {
            log::warn!(
                "spawn_delay_min {} too large; clamping to {}",
                self.spawn_delay_min,
                max_delay
            );
            self.spawn_delay_min = max_delay;
        }
        if self.spawn_delay_span > max_delay - self.spawn_delay_min {
            log::warn!(
                "spawn_delay_span {} too large; clamping to {}",
                self.spawn_delay_span,
                max_delay - self.spawn_delay_min
            );
            self.spawn_delay_span = max_delay - self.spawn_delay_min;
        }
        for (name, value, fallback) in [
            ("gravity", &mut self.gravity, GRAVITY),
            ("jump_strength", &mut self.jump_strength, JUMP_STRENGTH),
            ("start_speed", &mut self.start_speed, START_SPEED),
            ("speed_ramp_step", &mut self.speed_ramp_step, SPEED_RAMP_STEP),
            ("hen_size", &mut self.hen_size, HEN_SIZE),
            ("obstacle_size", &mut self.obstacle_size, OBSTACLE_SIZE),
            ("collectible_size", &mut self.collectible_size, COLLECTIBLE_SIZE),
            ("ground_height", &mut self.ground_height, GROUND_HEIGHT),
        ] {
            if !(value.is_finite() && *value >= 0.0) {
                log::warn!("{} {} is unusable; using {}", name, value, fallback);
                *value = fallback;
            }
        }
        self
    }
}
