//! Game loop driver
//!
//! Samples a timestamp each frame, clamps the delta, steps the simulation and
//! hands a read-only view to the renderer. The timing source stays outside:
//! callers pass `now_ms` in, so the loop works the same under a browser
//! animation callback, a native timer or a test.

use crate::consts::MAX_FRAME_DT_MS;
use crate::sim::{FrameTime, GameState, Playfield, TickInput, reset, step};
use crate::tuning::Config;

/// Turns timestamps into clamped frame deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt_ms: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT_MS)
    }
}

impl FrameClock {
    pub fn new(max_dt_ms: f32) -> Self {
        Self {
            last_ms: None,
            max_dt_ms,
        }
    }

    /// Delta since the previous call, clamped to `[0, max_dt_ms]`; the first call yields 0
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) as f32).clamp(0.0, self.max_dt_ms),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    /// Forget the previous timestamp (e.g. after the loop was suspended)
    pub fn restart(&mut self) {
        self.last_ms = None;
    }
}

/// What a renderer gets to see: the state between steps, never during one
pub struct FrameView<'a> {
    pub state: &'a GameState,
    pub playfield: Playfield,
    /// Render target scale relative to the playfield
    pub scale: f32,
}

/// Draws frames; must not mutate the simulation
pub trait Renderer {
    fn draw(&mut self, view: &FrameView<'_>);
}

/// Renderer that draws nothing
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _view: &FrameView<'_>) {}
}

/// Owns the game state and runs one frame at a time
pub struct GameLoop<R: Renderer> {
    pub state: GameState,
    pub config: Config,
    pub renderer: R,
    clock: FrameClock,
    restart_held: bool,
    frames: u64,
}

impl<R: Renderer> GameLoop<R> {
    pub fn new(seed: u64, playfield: Playfield, config: Config, renderer: R) -> Self {
        Self {
            state: GameState::new(seed, playfield),
            config,
            renderer,
            clock: FrameClock::default(),
            restart_held: false,
            frames: 0,
        }
    }

    /// Use a different dt clamp
    pub fn with_max_dt(mut self, max_dt_ms: f32) -> Self {
        self.clock = FrameClock::new(max_dt_ms);
        self
    }

    /// Begin the first game
    pub fn start(&mut self, now_ms: f64) {
        reset(&mut self.state, &self.config, now_ms);
        self.clock.advance(now_ms);
    }

    /// Run one frame: clamp dt, step, draw. Returns the dt used.
    pub fn frame(&mut self, now_ms: f64, input: &TickInput) -> f32 {
        let dt_ms = self.clock.advance(now_ms);

        // Restart fires once per press, not every frame it is held
        let mut input = *input;
        let pressed = input.restart && !self.restart_held;
        self.restart_held = input.restart;
        input.restart = pressed;

        step(
            &mut self.state,
            &input,
            FrameTime::new(now_ms, dt_ms),
            &self.config,
        );
        self.frames += 1;

        let view = FrameView {
            state: &self.state,
            playfield: self.state.playfield,
            scale: self.config.settings.resolution.factor(),
        };
        self.renderer.draw(&view);
        dt_ms
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Call after a pause in frame delivery so the next delta starts at 0
    pub fn resume(&mut self) {
        self.clock.restart();
    }
}
