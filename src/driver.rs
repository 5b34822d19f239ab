//! Frame driver
//!
//! Runs one simulation step per display frame, hands the result to a
//! renderer, and tells the host loop whether to schedule another frame.
//! Input that arrives between frames is latched and applied at the start
//! of the next one.

use crate::session::Session;
use crate::sim::{GameState, RandomSource, SessionObserver};

/// Draws a frame from read-only simulation state
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

/// Renderer that draws nothing (headless runs, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _state: &GameState) {}
}

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Drives a session one frame at a time
#[derive(Debug)]
pub struct Driver<R: RandomSource> {
    session: Session<R>,
    /// Jump requested since the last frame
    jump_latched: bool,
    running: bool,
}

impl<R: RandomSource> Driver<R> {
    pub fn new(session: Session<R>) -> Self {
        let running = !session.is_game_over();
        Self {
            session,
            jump_latched: false,
            running,
        }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<R> {
        &mut self.session
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Latch a jump for the next frame. Ignored after game over.
    pub fn request_jump(&mut self) {
        if !self.session.is_game_over() {
            self.jump_latched = true;
        }
    }

    /// Restart after game over. Returns `Continue` if the loop should be
    /// scheduled again.
    pub fn request_reset(&mut self, observer: &mut impl SessionObserver) -> LoopControl {
        if self.session.reset(observer) {
            self.jump_latched = false;
            self.running = true;
            LoopControl::Continue
        } else if self.running {
            LoopControl::Continue
        } else {
            LoopControl::Stop
        }
    }

    /// Forward a viewport change; valid at any time
    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.resize(width, height);
    }

    /// Run one frame: apply latched input, update, render.
    ///
    /// The frame that ends the run is still rendered; after that the
    /// driver stays idle until reset.
    pub fn frame(
        &mut self,
        renderer: &mut impl Renderer,
        observer: &mut impl SessionObserver,
    ) -> LoopControl {
        if !self.running {
            return LoopControl::Stop;
        }

        if std::mem::take(&mut self.jump_latched) {
            self.session.jump();
        }

        let still_playing = self.session.update(observer);
        renderer.render(self.session.state());

        if still_playing {
            LoopControl::Continue
        } else {
            self.running = false;
            LoopControl::Stop
        }
    }
}
