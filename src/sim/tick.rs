//! Per-frame simulation step
//!
//! Core game loop that advances the simulation by exactly one frame. The
//! update order is fixed: frame counter, hen, obstacles, collectible, speed
//! ramp.

use super::events::GameEvent;
use super::random::RandomSource;
use super::state::{GamePhase, GameState};

/// Advance the game state by one frame and report what happened.
///
/// Does nothing once the run is over.
pub fn tick(state: &mut GameState, rng: &mut impl RandomSource) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.frame += 1;
    let frame = state.frame;

    state
        .hen
        .update(state.bounds.ground_y(), state.tuning.gravity);
    let hen_rect = state.hen.rect();

    let field = state.obstacles.update(
        &state.bounds,
        state.speed,
        frame,
        &hen_rect,
        &state.tuning,
        rng,
    );
    if field.spawned {
        events.push(GameEvent::ObstacleSpawned { frame });
    }
    for _ in 0..field.culled {
        state.score += 1;
        events.push(GameEvent::ScoreChanged { score: state.score });
    }
    if field.collided {
        end_run(state, &mut events);
        return events;
    }

    let egg = state.collectible.update(
        &state.bounds,
        state.speed,
        frame,
        state.score,
        state.has_collectible,
        &hen_rect,
        &state.tuning,
        rng,
    );
    if egg.spawned {
        events.push(GameEvent::CollectibleSpawned { frame });
    }
    if egg.collected {
        state.has_collectible = true;
        events.push(GameEvent::CollectibleCollected { frame });
    }

    // Frame-count cadence, independent of wall-clock time
    if frame % state.tuning.speed_ramp_interval.max(1) == 0 {
        state.speed += state.tuning.speed_ramp_step;
        log::info!("Speed up to {:.1} on frame {}", state.speed, frame);
        events.push(GameEvent::SpeedIncreased { speed: state.speed });
    }

    events
}

fn end_run(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    let bonus = state.has_collectible;
    log::info!(
        "Game over on frame {} with score {}{}",
        state.frame,
        state.score,
        if bonus { " (golden egg ending)" } else { "" }
    );
    events.push(GameEvent::GameOver {
        score: state.score,
        bonus,
    });
}
