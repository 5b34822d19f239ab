//! Session controller
//!
//! Owns one run's state and random source, enforces the playing/game-over
//! state machine, and forwards every frame's events to an observer.

use rand_pcg::Pcg32;

use crate::sim::random::seeded;
use crate::sim::{GameEvent, GamePhase, GameState, RandomSource, SessionObserver, tick};
use crate::tuning::Tuning;

/// A single player's run, from reset to game over and back
#[derive(Debug, Clone)]
pub struct Session<R: RandomSource = Pcg32> {
    state: GameState,
    rng: R,
}

impl Session<Pcg32> {
    /// Seeded session for reproducible runs
    pub fn with_seed(tuning: Tuning, width: f32, height: f32, seed: u64) -> Self {
        log::info!("Session created with seed: {}", seed);
        Self::new(GameState::new(tuning, width, height), seeded(seed))
    }
}

impl<R: RandomSource> Session<R> {
    pub fn new(state: GameState, rng: R) -> Self {
        Self { state, rng }
    }

    /// Read-only view for renderers and HUDs
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for tooling and tests
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Run one frame. Returns true while the run is still going.
    pub fn update(&mut self, observer: &mut impl SessionObserver) -> bool {
        let events = tick(&mut self.state, &mut self.rng);
        for event in &events {
            observer.on_event(event);
        }
        !self.state.is_game_over()
    }

    /// Jump signal. Ignored after game over or while airborne.
    pub fn jump(&mut self) -> bool {
        if self.state.is_game_over() {
            return false;
        }
        self.state.hen.jump(self.state.tuning.jump_strength)
    }

    /// Start a new run. Only valid after game over; a no-op while playing.
    pub fn reset(&mut self, observer: &mut impl SessionObserver) -> bool {
        if !self.state.is_game_over() {
            return false;
        }
        self.state.reset();
        log::info!("Session reset");
        observer.on_event(&GameEvent::Reset);
        true
    }

    /// Viewport changed; valid in any phase
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::SequenceRandom;
    use crate::sim::state::Obstacle;

    fn session() -> Session<SequenceRandom> {
        Session::new(
            GameState::new(Tuning::default(), 800.0, 600.0),
            SequenceRandom::constant(0.5),
        )
    }

    /// Put an obstacle right in front of the hen and run a frame
    fn crash(session: &mut Session<SequenceRandom>, observer: &mut Vec<GameEvent>) {
        let state = session.state_mut();
        state.obstacles.spawn_countdown = 1000;
        let mut obstacle = Obstacle::at_right_edge(&state.bounds, 40.0, state.frame);
        obstacle.pos.x = state.hen.rect().right() + 2.0;
        state.obstacles.push(obstacle);
        assert!(!session.update(observer));
    }

    #[test]
    fn test_game_over_notifies_once() {
        let mut session = session();
        let mut events = Vec::new();
        crash(&mut session, &mut events);

        for _ in 0..5 {
            assert!(!session.update(&mut events));
        }
        let game_overs = events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
        assert_eq!(session.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_jump_ignored_after_game_over() {
        let mut session = session();
        let mut events = Vec::new();
        crash(&mut session, &mut events);

        let vel = session.state().hen.vel_y;
        assert!(!session.jump());
        assert_eq!(session.state().hen.vel_y, vel);
    }

    #[test]
    fn test_jump_while_playing() {
        let mut session = session();
        assert!(session.jump());
        assert_eq!(session.state().hen.vel_y, -12.0);
        assert!(!session.state().hen.grounded);
        // Double jump is refused
        assert!(!session.jump());
        assert_eq!(session.state().hen.vel_y, -12.0);
    }

    #[test]
    fn test_reset_while_playing_is_noop() {
        let mut session = session();
        let mut events = Vec::new();
        for _ in 0..10 {
            session.update(&mut events);
        }
        let frame = session.state().frame;

        assert!(!session.reset(&mut events));
        assert_eq!(session.state().frame, frame);
        assert!(!events.contains(&GameEvent::Reset));
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut session = session();
        let mut events = Vec::new();
        session.state_mut().score = 7;
        session.state_mut().has_collectible = true;
        crash(&mut session, &mut events);
        assert_eq!(
            events.last(),
            Some(&GameEvent::GameOver {
                score: 7,
                bonus: true
            })
        );

        events.clear();
        assert!(session.reset(&mut events));
        assert_eq!(events, vec![GameEvent::Reset]);

        let state = session.state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.frame, 0);
        assert_eq!(state.speed, 5.0);
        assert!(state.obstacles.is_empty());
        assert!(!state.has_collectible);

        // Second reset is a no-op
        assert!(!session.reset(&mut events));
        assert_eq!(events.len(), 1);

        // First update after reset spawns immediately
        session.update(&mut events);
        assert!(events.contains(&GameEvent::ObstacleSpawned { frame: 1 }));
    }

    #[test]
    fn test_resize_mid_game() {
        let mut session = session();
        session.update(&mut ());
        session.state_mut().score = 2;

        session.resize(300.0, 900.0);

        let state = session.state();
        assert_eq!(state.bounds.ground_height, 300.0);
        assert_eq!(state.hen.pos.y, 600.0 - 40.0);
        assert_eq!(state.score, 2);
        assert_eq!(state.obstacles.obstacles()[0].pos.y, 560.0);
    }

    #[test]
    fn test_seeded_sessions_match() {
        let mut a = Session::with_seed(Tuning::default(), 800.0, 600.0, 3);
        let mut b = Session::with_seed(Tuning::default(), 800.0, 600.0, 3);
        let mut events_a = Vec::new();
        let mut events_b = Vec::new();
        for _ in 0..200 {
            a.update(&mut events_a);
            b.update(&mut events_b);
        }
        assert_eq!(events_a, events_b);
    }
}
