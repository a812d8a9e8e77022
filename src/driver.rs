//! Fixed-rate physics decoupled from the render cadence
//!
//! The host calls [`Animation::update`] with wall-clock time and
//! [`Animation::render`] whenever the display wants a frame. Physics runs at
//! `TICK_DT` no matter how often frames are drawn; a frame always shows the
//! latest completed tick.

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS, TICK_DT};
use crate::renderer::{Palette, Surface, draw_frame};
use crate::sim::{Constellation, Edge, Viewport};

/// Accumulator turning elapsed time into whole physics ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    accumulator: f32,
    dt: f32,
    max_substeps: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self {
            accumulator: 0.0,
            dt: TICK_DT,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl FixedStep {
    /// Clock with a custom timestep; `None` unless `dt` is positive and finite
    pub fn new(dt: f32, max_substeps: u32) -> Option<Self> {
        (dt.is_finite() && dt > 0.0).then_some(Self {
            accumulator: 0.0,
            dt,
            max_substeps,
        })
    }

    /// Add `elapsed` seconds and return how many ticks are now due.
    ///
    /// At most `max_substeps` ticks are returned; any backlog beyond that is
    /// dropped so a stalled host catches up instead of spiralling. A
    /// non-finite `elapsed` counts as no time passing.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if elapsed.is_finite() {
            self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);
        }

        let mut due = 0;
        while self.accumulator >= self.dt && due < self.max_substeps {
            self.accumulator -= self.dt;
            due += 1;
        }

        if self.accumulator >= self.dt {
            log::warn!(
                "Dropping {:.1} ms of physics backlog",
                self.accumulator * 1000.0
            );
            self.accumulator %= self.dt;
        }
        due
    }

    /// Time carried over to the next call (seconds)
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Counts for one rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub dots: usize,
    pub edges: usize,
}

/// A constellation plus its physics clock
#[derive(Debug, Clone)]
pub struct Animation {
    constellation: Constellation,
    clock: FixedStep,
    palette: Palette,
}

impl Animation {
    pub fn new(constellation: Constellation) -> Self {
        let palette = Palette::from_options(constellation.options());
        Self {
            constellation,
            clock: FixedStep::default(),
            palette,
        }
    }

    /// Run the physics ticks due after `elapsed` seconds; returns how many ran
    pub fn update(&mut self, elapsed: f32) -> u32 {
        let due = self.clock.advance(elapsed);
        for _ in 0..due {
            self.constellation.tick();
        }
        if due > 0 {
            log::trace!(
                "Ran {due} ticks (total {})",
                self.constellation.time_ticks()
            );
        }
        due
    }

    /// Draw the latest completed tick onto `surface`
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> FrameStats {
        let edges: Vec<Edge> = self.constellation.edges();
        let dots = self.constellation.dots();
        draw_frame(surface, dots, &edges, &self.palette);
        FrameStats {
            dots: dots.len(),
            edges: edges.len(),
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.constellation.resize(viewport);
    }

    pub fn constellation(&self) -> &Constellation {
        &self.constellation
    }

    pub fn clock(&self) -> &FixedStep {
        &self.clock
    }
}
