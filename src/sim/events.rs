//! Gameplay events and the observer hooks that consume them
//!
//! The simulation never touches presentation. It reports what happened and
//! whoever drives it decides how to show it.

use serde::{Deserialize, Serialize};

/// Something noteworthy that happened during a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An obstacle was cleared; carries the new score
    ScoreChanged { score: u32 },
    ObstacleSpawned { frame: u64 },
    CollectibleSpawned { frame: u64 },
    CollectibleCollected { frame: u64 },
    /// Speed ramp reached; carries the new speed
    SpeedIncreased { speed: f32 },
    /// Run ended. `bonus` selects the golden-egg ending.
    GameOver { score: u32, bonus: bool },
    /// A new run started
    Reset,
}

/// Receives session notifications. All hooks default to doing nothing.
pub trait SessionObserver {
    /// Fired once per obstacle cleared
    fn on_score_changed(&mut self, _score: u32) {}

    /// Fired once per transition into game over
    fn on_game_over(&mut self, _final_score: u32, _bonus: bool) {}

    /// Fired once per transition back into play
    fn on_reset(&mut self) {}

    /// Entry point for every event; routes to the typed hooks by default
    fn on_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::ScoreChanged { score } => self.on_score_changed(score),
            GameEvent::GameOver { score, bonus } => self.on_game_over(score, bonus),
            GameEvent::Reset => self.on_reset(),
            _ => {}
        }
    }
}

/// Ignores everything
impl SessionObserver for () {}

/// Records every event in order
impl SessionObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

impl<O: SessionObserver + ?Sized> SessionObserver for &mut O {
    fn on_score_changed(&mut self, score: u32) {
        (**self).on_score_changed(score);
    }

    fn on_game_over(&mut self, final_score: u32, bonus: bool) {
        (**self).on_game_over(final_score, bonus);
    }

    fn on_reset(&mut self) {
        (**self).on_reset();
    }

    fn on_event(&mut self, event: &GameEvent) {
        (**self).on_event(event);
    }
}
