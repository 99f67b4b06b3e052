/// Frame driver: one cooperative tick at a time.
///
/// The environment owns scheduling. It calls `step` once per frame and stops
/// calling it when `step` answers `LoopControl::Halt`.

use std::time::Instant;

use rand::Rng;

use crate::assets::Assets;
use crate::audio::AudioSink;
use crate::compute::{idle_state, resize, restart, tick};
use crate::entities::{Canvas, SessionState, Update};
use crate::input::InputSnapshot;
use crate::render::{render, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    /// Schedule another tick.
    Continue,
    /// Terminal state; do not schedule again.
    Halt,
}

pub struct FrameDriver {
    state: SessionState,
    assets: Assets,
}

impl FrameDriver {
    pub fn new(canvas: Canvas, assets: Assets) -> Self {
        Self {
            state: idle_state(canvas),
            assets,
        }
    }

    /// Resume from an existing session, e.g. one built by hand.
    pub fn with_state(state: SessionState, assets: Assets) -> Self {
        Self { state, assets }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut Assets {
        &mut self.assets
    }

    /// Start (or restart) a session. The previous session is replaced
    /// wholesale, whatever state it was in.
    pub fn start(&mut self, rng: &mut impl Rng, audio: &mut impl AudioSink) {
        let update = restart(&self.state, rng);
        self.apply(update, audio);
    }

    pub fn set_canvas(&mut self, canvas: Canvas) {
        if canvas != self.state.canvas {
            log::info!("canvas resized to {}x{}", canvas.width, canvas.height);
            self.state = resize(&self.state, canvas);
        }
    }

    /// Run one tick: simulation, sound cues, then render.
    ///
    /// A session that is not running is left alone and nothing is drawn.
    /// The frame in which the session ends is still rendered before `Halt`
    /// is returned.
    pub fn step<S: Surface>(
        &mut self,
        input: &InputSnapshot,
        now: Instant,
        rng: &mut impl Rng,
        surface: &mut S,
        audio: &mut impl AudioSink,
    ) -> Result<LoopControl, S::Error> {
        if !self.state.is_running() {
            return Ok(LoopControl::Halt);
        }

        let update = tick(&self.state, input, now, rng);
        self.apply(update, audio);
        render(surface, &self.state, &self.assets)?;

        if self.state.is_running() {
            Ok(LoopControl::Continue)
        } else {
            Ok(LoopControl::Halt)
        }
    }

    fn apply(&mut self, update: Update, audio: &mut impl AudioSink) {
        self.state = update.state;
        for cue in update.cues {
            audio.play(cue);
        }
    }
}
