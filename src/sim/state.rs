//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives here, and all of it
//! serializes so a frame can be snapshotted.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collectible::CollectibleSlot;
use super::collision::Aabb;
use super::obstacles::ObstacleField;
use crate::ground_height_for;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; frozen until reset
    GameOver,
}

/// Viewport-derived world dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
    /// Height of the floor strip at the bottom of the world
    pub ground_height: f32,
}

impl WorldBounds {
    /// Build bounds for a viewport. Non-finite or negative dimensions
    /// (collapsed containers) are treated as zero.
    pub fn new(width: f32, height: f32, tuning: &Tuning) -> Self {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let (w, h) = (sanitize(width), sanitize(height));
        if w != width || h != height {
            log::warn!("Degenerate bounds {}x{} clamped to {}x{}", width, height, w, h);
        }
        Self {
            width: w,
            height: h,
            ground_height: ground_height_for(
                w,
                h,
                tuning.ground_height,
                tuning.portrait_ground_divisor,
            ),
        }
    }

    /// Y coordinate of the floor's top surface
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_height
    }

    #[inline]
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}

/// The player character: moves vertically only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hen {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative is up)
    pub vel_y: f32,
    /// Resting on the floor, able to jump
    pub grounded: bool,
}

impl Hen {
    /// A hen standing on the ground at the horizontal center
    pub fn new(bounds: &WorldBounds, size: f32) -> Self {
        let mut hen = Self {
            pos: Vec2::ZERO,
            size: Vec2::splat(size),
            vel_y: 0.0,
            grounded: true,
        };
        hen.place_on_ground(bounds);
        hen
    }

    /// Reinitialize position and velocity on the ground
    pub fn place_on_ground(&mut self, bounds: &WorldBounds) {
        self.pos = Vec2::new(
            Self::center_x(bounds, self.size.x),
            bounds.ground_y() - self.size.y,
        );
        self.vel_y = 0.0;
        self.grounded = true;
    }

    fn center_x(bounds: &WorldBounds, width: f32) -> f32 {
        bounds.width / 2.0 - width / 2.0
    }

    /// Integrate one frame: gravity, move, then clamp to the floor
    pub fn update(&mut self, ground_y: f32, gravity: f32) {
        self.vel_y += gravity;
        self.pos.y += self.vel_y;

        if self.pos.y + self.size.y > ground_y {
            self.pos.y = ground_y - self.size.y;
            self.vel_y = 0.0;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }

    /// Jump if standing on the floor. Returns whether the jump happened.
    pub fn jump(&mut self, strength: f32) -> bool {
        if !self.grounded {
            return false;
        }
        self.vel_y = -strength;
        self.grounded = false;
        true
    }

    /// Follow a bounds change: recenter horizontally and keep the same
    /// height above the floor. An airborne hen keeps its velocity unless
    /// the new floor catches it, in which case it lands immediately.
    pub fn reanchor(&mut self, old_ground_y: f32, bounds: &WorldBounds) {
        let ground_y = bounds.ground_y();
        self.pos.x = Self::center_x(bounds, self.size.x);
        self.pos.y += ground_y - old_ground_y;
        if self.grounded || self.pos.y + self.size.y > ground_y {
            self.pos.y = ground_y - self.size.y;
            self.vel_y = 0.0;
            self.grounded = true;
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A crate scrolling toward the hen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Frame on which this obstacle was spawned
    pub spawn_frame: u64,
    pub pos: Vec2,
    pub size: Vec2,
    /// Scrolled off the left edge; dropped at the end of the frame
    #[serde(skip)]
    pub culled: bool,
}

impl Obstacle {
    /// New obstacle at the right edge, resting on the floor
    pub fn at_right_edge(bounds: &WorldBounds, size: f32, spawn_frame: u64) -> Self {
        Self {
            spawn_frame,
            pos: Vec2::new(bounds.width, bounds.ground_y() - size),
            size: Vec2::splat(size),
            culled: false,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Fully past the left edge of the world
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// The rare golden egg
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub spawn_frame: u64,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Collectible {
    pub fn at_right_edge(bounds: &WorldBounds, size: f32, spawn_frame: u64) -> Self {
        Self {
            spawn_frame,
            pos: Vec2::new(bounds.width, bounds.ground_y() - size),
            size: Vec2::splat(size),
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// Complete session state (deterministic given the random source)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Gameplay parameters for this session
    pub tuning: Tuning,
    /// World dimensions
    pub bounds: WorldBounds,
    /// Current phase
    pub phase: GamePhase,
    /// Frames simulated since the last reset
    pub frame: u64,
    /// Obstacles cleared this run
    pub score: u32,
    /// Scroll speed (units/frame)
    pub speed: f32,
    /// Sticky: the collectible was picked up this run
    pub has_collectible: bool,
    /// Player character
    pub hen: Hen,
    /// Active obstacles and their spawner
    pub obstacles: ObstacleField,
    /// At most one collectible
    pub collectible: CollectibleSlot,
}

impl GameState {
    /// Fresh session in the `Playing` phase
    pub fn new(tuning: Tuning, width: f32, height: f32) -> Self {
        let bounds = WorldBounds::new(width, height, &tuning);
        let hen = Hen::new(&bounds, tuning.hen_size);
        Self {
            speed: tuning.start_speed,
            tuning,
            bounds,
            phase: GamePhase::Playing,
            frame: 0,
            score: 0,
            has_collectible: false,
            hen,
            obstacles: ObstacleField::new(),
            collectible: CollectibleSlot::default(),
        }
    }

    /// Reinitialize every entity and counter, keeping bounds and tuning
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.frame = 0;
        self.score = 0;
        self.speed = self.tuning.start_speed;
        self.has_collectible = false;
        self.hen.size = Vec2::splat(self.tuning.hen_size);
        self.hen.place_on_ground(&self.bounds);
        self.obstacles.clear();
        self.collectible.clear();
    }

    /// Apply new viewport dimensions. Entities keep their x positions and
    /// the hen keeps its velocity; everything is re-seated on the new floor.
    pub fn resize(&mut self, width: f32, height: f32) {
        let old_ground_y = self.bounds.ground_y();
        self.bounds = WorldBounds::new(width, height, &self.tuning);
        let ground_y = self.bounds.ground_y();

        self.hen.reanchor(old_ground_y, &self.bounds);
        self.obstacles.reanchor(ground_y);
        self.collectible.reanchor(ground_y);

        log::debug!(
            "Resized to {}x{} (ground at {})",
            self.bounds.width,
            self.bounds.height,
            ground_y
        );
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Game over with the collectible in hand
    #[inline]
    pub fn bonus_ending(&self) -> bool {
        self.is_game_over() && self.has_collectible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn landscape() -> GameState {
        GameState::new(Tuning::default(), 800.0, 600.0)
    }

    #[test]
    fn test_ground_height_by_orientation() {
        let tuning = Tuning::default();
        let wide = WorldBounds::new(800.0, 600.0, &tuning);
        assert_eq!(wide.ground_height, 50.0);
        assert_eq!(wide.ground_y(), 550.0);

        let tall = WorldBounds::new(300.0, 900.0, &tuning);
        assert!(tall.is_portrait());
        assert_eq!(tall.ground_height, 300.0);
        assert_eq!(tall.ground_y(), 600.0);

        // Square is not portrait
        let square = WorldBounds::new(500.0, 500.0, &tuning);
        assert_eq!(square.ground_height, 50.0);
    }

    #[test]
    fn test_degenerate_bounds_do_not_panic() {
        let tuning = Tuning::default();
        let bounds = WorldBounds::new(f32::NAN, -20.0, &tuning);
        assert_eq!(bounds.width, 0.0);
        assert_eq!(bounds.height, 0.0);

        let mut state = GameState::new(tuning, 0.0, 0.0);
        state.hen.update(state.bounds.ground_y(), state.tuning.gravity);
        assert!(state.hen.grounded);
    }

    #[test]
    fn test_new_hen_is_centered_on_ground() {
        let state = landscape();
        assert_eq!(state.hen.pos, Vec2::new(380.0, 510.0));
        assert!(state.hen.grounded);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.speed, 5.0);
    }

    #[test]
    fn test_jump_then_one_update() {
        let mut state = landscape();
        assert!(state.hen.jump(state.tuning.jump_strength));
        assert_eq!(state.hen.vel_y, -12.0);
        assert!(!state.hen.grounded);

        state.hen.update(state.bounds.ground_y(), state.tuning.gravity);
        assert!((state.hen.pos.y - 498.6).abs() < 1e-4);
        assert!(!state.hen.grounded);
    }

    #[test]
    fn test_airborne_jump_is_ignored() {
        let mut state = landscape();
        state.hen.jump(12.0);
        state.hen.update(550.0, 0.6);
        let vel = state.hen.vel_y;

        assert!(!state.hen.jump(12.0));
        assert_eq!(state.hen.vel_y, vel);
    }

    #[test]
    fn test_jump_rises_until_apex_then_lands() {
        let mut state = landscape();
        state.hen.jump(12.0);

        let mut last_y = state.hen.pos.y;
        let mut frames = 0;
        loop {
            let was_rising = state.hen.vel_y + 0.6 < 0.0;
            state.hen.update(550.0, 0.6);
            frames += 1;
            if was_rising {
                assert!(state.hen.pos.y < last_y, "hen should rise on frame {}", frames);
            }
            last_y = state.hen.pos.y;
            if state.hen.grounded {
                break;
            }
            assert!(frames < 100, "hen never landed");
        }
        assert_eq!(state.hen.pos.y, 510.0);
        assert_eq!(state.hen.vel_y, 0.0);
    }

    #[test]
    fn test_reset_mid_game() {
        let mut state = landscape();
        state.score = 7;
        state.frame = 420;
        state.speed = 6.0;
        state.has_collectible = true;
        state.phase = GamePhase::GameOver;
        state.obstacles.push(Obstacle::at_right_edge(&state.bounds, 40.0, 12));
        state.obstacles.push(Obstacle::at_right_edge(&state.bounds, 40.0, 90));
        state.collectible.item = Some(Collectible::at_right_edge(&state.bounds, 30.0, 300));
        state.hen.jump(12.0);

        state.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.frame, 0);
        assert_eq!(state.speed, 5.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.obstacles.spawn_countdown, 0);
        assert!(state.collectible.item.is_none());
        assert!(!state.has_collectible);
        assert!(!state.is_game_over());
        assert_eq!(state.hen.pos.y, 510.0);
        assert_eq!(state.hen.vel_y, 0.0);
    }

    #[test]
    fn test_resize_reanchors_entities() {
        let mut state = landscape();
        state.obstacles.push(Obstacle::at_right_edge(&state.bounds, 40.0, 1));
        state.obstacles.obstacles_mut()[0].pos.x = 123.0;
        state.collectible.item = Some(Collectible::at_right_edge(&state.bounds, 30.0, 2));
        state.score = 3;

        // Portrait: ground height = 900 / 3 = 300, ground line at 600
        state.resize(400.0, 900.0);

        assert_eq!(state.hen.pos, Vec2::new(180.0, 560.0));
        let obstacle = &state.obstacles.obstacles()[0];
        assert_eq!(obstacle.pos, Vec2::new(123.0, 560.0));
        let egg = state.collectible.item.as_ref().unwrap();
        assert_eq!(egg.pos, Vec2::new(800.0, 570.0));
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_resize_keeps_airborne_height_and_velocity() {
        let mut state = landscape();
        state.hen.jump(12.0);
        state.hen.update(550.0, 0.6);
        let height_above_ground = 550.0 - state.hen.pos.y;
        let vel = state.hen.vel_y;

        state.resize(1000.0, 700.0);

        assert!((650.0 - state.hen.pos.y - height_above_ground).abs() < 1e-4);
        assert_eq!(state.hen.vel_y, vel);
        assert!(!state.hen.grounded);
    }

    #[test]
    fn test_reanchor_lands_hen_caught_by_floor() {
        let tuning = Tuning::default();
        let bounds = WorldBounds::new(800.0, 600.0, &tuning);
        let mut hen = Hen::new(&bounds, 40.0);
        // Falling, bottom edge 0.5 above the floor at 550
        hen.pos.y = 509.5;
        hen.vel_y = 3.0;
        hen.grounded = false;

        // Old floor was 10 higher, so the shift pushes the hen through the floor
        hen.reanchor(540.0, &bounds);

        assert_eq!(hen.pos.y, 510.0);
        assert!(hen.grounded);
        assert_eq!(hen.vel_y, 0.0);
    }

    proptest! {
        #[test]
        fn prop_grounded_hen_stays_put(frames in 1usize..500, w in 200.0f32..2000.0, h in 200.0f32..2000.0) {
            let mut state = GameState::new(Tuning::default(), w, h);
            let rest_y = state.bounds.ground_y() - state.hen.size.y;
            for _ in 0..frames {
                state.hen.update(state.bounds.ground_y(), state.tuning.gravity);
                prop_assert_eq!(state.hen.pos.y, rest_y);
                prop_assert_eq!(state.hen.vel_y, 0.0);
                prop_assert!(state.hen.grounded);
            }
        }

        #[test]
        fn prop_hen_never_sinks_below_ground(jumps in proptest::collection::vec(any::<bool>(), 1..300)) {
            let mut state = landscape();
            let ground_y = state.bounds.ground_y();
            for jump in jumps {
                if jump {
                    state.hen.jump(state.tuning.jump_strength);
                }
                state.hen.update(ground_y, state.tuning.gravity);
                prop_assert!(state.hen.pos.y + state.hen.size.y <= ground_y);
            }
        }
    }
}
