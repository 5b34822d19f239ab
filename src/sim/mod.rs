//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per frame
//! - Injected randomness only
//! - Stable iteration order (by spawn time)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collectible;
pub mod collision;
pub mod events;
pub mod obstacles;
pub mod random;
pub mod state;
pub mod tick;

pub use collectible::{CollectibleOutcome, CollectibleSlot};
pub use collision::{Aabb, aabb_overlap};
pub use events::{GameEvent, SessionObserver};
pub use obstacles::{FieldOutcome, ObstacleField};
pub use random::{RandomSource, SequenceRandom, seeded};
pub use state::{Collectible, GamePhase, GameState, Hen, Obstacle, WorldBounds};
pub use tick::tick;
