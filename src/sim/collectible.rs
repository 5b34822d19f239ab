//! The single optional collectible
//!
//! At most one egg exists at a time. It can only appear once the run has
//! scored enough and the hen has not already picked one up this session.

use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::random::RandomSource;
use super::state::{Collectible, WorldBounds};
use crate::tuning::Tuning;

/// Result of one collectible update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectibleOutcome {
    pub spawned: bool,
    pub collected: bool,
    /// Scrolled away without being picked up
    pub missed: bool,
}

/// Holds the collectible, if any
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectibleSlot {
    pub item: Option<Collectible>,
}

impl CollectibleSlot {
    pub fn is_active(&self) -> bool {
        self.item.is_some()
    }

    pub fn clear(&mut self) {
        self.item = None;
    }

    pub fn reanchor(&mut self, ground_y: f32) {
        if let Some(item) = &mut self.item {
            item.pos.y = ground_y - item.size.y;
        }
    }

    /// Spawn gate, scroll, then pickup check.
    ///
    /// The random draw only happens while the gate is open, so scripted
    /// sources stay aligned with obstacle delays.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        bounds: &WorldBounds,
        speed: f32,
        frame: u64,
        score: u32,
        already_collected: bool,
        hen: &Aabb,
        tuning: &Tuning,
        rng: &mut impl RandomSource,
    ) -> CollectibleOutcome {
        let mut outcome = CollectibleOutcome::default();

        let gate_open = self.item.is_none()
            && !already_collected
            && score >= tuning.collectible_min_score;
        if gate_open && rng.next_unit() < tuning.collectible_spawn_chance {
            self.item = Some(Collectible::at_right_edge(
                bounds,
                tuning.collectible_size,
                frame,
            ));
            outcome.spawned = true;
            log::debug!("Collectible spawned on frame {}", frame);
        }

        let Some(item) = &mut self.item else {
            return outcome;
        };
        item.pos.x -= speed;

        if item.rect().overlaps(hen) {
            self.item = None;
            outcome.collected = true;
            log::debug!("Collectible picked up on frame {}", frame);
        } else if item.is_off_screen() {
            self.item = None;
            outcome.missed = true;
        }

        outcome
    }
}
