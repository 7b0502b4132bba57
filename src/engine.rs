//! Frame orchestration
//!
//! One `frame` call is one display refresh: update every component, draw
//! back-to-front, then advance the frame counter.

use crate::audio::CuePlayer;
use crate::best_score::ScoreStore;
use crate::input;
use crate::renderer::{self, Surface};
use crate::settings::Settings;
use crate::sim::{self, GameState, RunState};

pub struct Engine {
    state: GameState,
    cues: Box<dyn CuePlayer>,
    store: Box<dyn ScoreStore>,
}

impl Engine {
    pub fn new(state: GameState, cues: Box<dyn CuePlayer>, store: Box<dyn ScoreStore>) -> Self {
        Self { state, cues, store }
    }

    /// Build from host settings with the given seed
    pub fn from_settings(
        settings: &Settings,
        seed: u64,
        cues: Box<dyn CuePlayer>,
        store: Box<dyn ScoreStore>,
    ) -> Self {
        let state = GameState::new(settings.tuning.clone(), settings.metrics, seed);
        log::info!("Engine ready with seed {}", seed);
        Self::new(state, cues, store)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> RunState {
        self.state.phase
    }

    /// Pointer press
    pub fn tap(&mut self) {
        input::handle_tap(&mut self.state, self.cues.as_mut());
    }

    /// Key press by `KeyboardEvent.code`; true when consumed
    pub fn key(&mut self, code: &str) -> bool {
        input::handle_key(&mut self.state, self.cues.as_mut(), code)
    }

    /// Run one full frame
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        sim::tick(&mut self.state, self.cues.as_mut());
        renderer::draw_frame(&mut self.state, surface, self.store.as_mut());
        self.state.clock.advance();
    }
}
