//! Obstacle spawner and the owned obstacle collection
//!
//! Obstacles are kept in spawn order. Culling only marks entries during the
//! update pass; marked entries are compacted out once at the end.

use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::random::RandomSource;
use super::state::{Obstacle, WorldBounds};
use crate::tuning::Tuning;

/// What happened to the obstacle field during one update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOutcome {
    /// An obstacle was spawned this frame
    pub spawned: bool,
    /// Obstacles that scrolled off the left edge this frame
    pub culled: u32,
    /// The hen hit an obstacle
    pub collided: bool,
}

/// Active obstacles plus the countdown to the next one
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleField {
    /// Frames until the next spawn; a spawn happens once this reaches zero
    pub spawn_countdown: i32,
    /// Oldest first
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    /// Empty field whose first spawn fires on the next update
    pub fn new() -> Self {
        Self::default()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Append an obstacle (newest last)
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Remove every obstacle and rearm the spawner for an immediate spawn
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.spawn_countdown = 0;
    }

    /// Keep every obstacle resting on a moved floor
    pub fn reanchor(&mut self, ground_y: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.pos.y = ground_y - obstacle.size.y;
        }
    }

    /// Draw the next spawn delay: whole frames in [min, min + span)
    pub fn next_delay(tuning: &Tuning, rng: &mut impl RandomSource) -> i32 {
        let extra = (rng.next_unit() * tuning.spawn_delay_span as f32).floor() as u32;
        // f32 rounding can land exactly on span for draws just below 1.0
        let extra = extra.min(tuning.spawn_delay_span.saturating_sub(1));
        i32::try_from(tuning.spawn_delay_min.saturating_add(extra)).unwrap_or(i32::MAX)
    }

    /// Advance the field by one frame: spawn, scroll, collide, cull.
    ///
    /// Processing stops at the first collision; the remaining obstacles
    /// are left where they were for the frozen final frame.
    pub fn update(
        &mut self,
        bounds: &WorldBounds,
        speed: f32,
        frame: u64,
        hen: &Aabb,
        tuning: &Tuning,
        rng: &mut impl RandomSource,
    ) -> FieldOutcome {
        let mut outcome = FieldOutcome::default();

        // One spawn per expiry, however far the countdown has fallen
        self.spawn_countdown -= 1;
        if self.spawn_countdown <= 0 {
            self.obstacles
                .push(Obstacle::at_right_edge(bounds, tuning.obstacle_size, frame));
            self.spawn_countdown = Self::next_delay(tuning, rng);
            outcome.spawned = true;
            log::debug!(
                "Obstacle spawned on frame {} (next in {} frames)",
                frame,
                self.spawn_countdown
            );
        }

        for obstacle in &mut self.obstacles {
            obstacle.pos.x -= speed;

            if obstacle.rect().overlaps(hen) {
                outcome.collided = true;
                break;
            }

            if obstacle.is_off_screen() {
                obstacle.culled = true;
                outcome.culled += 1;
            }
        }

        self.obstacles.retain(|o| !o.culled);
        outcome
    }
}
