//! Simulation state
//!
//! `Constellation` owns the only copy of the dot collection. Each tick builds
//! a whole new collection and swaps it in; readers only ever see snapshots of
//! a completed tick.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::dot::{Dot, create_field};
use super::motion::advance_field;
use super::proximity::{Edge, edges_for};
use super::rng::RngState;
use crate::geometry::diagonal_length;
use crate::options::Options;

/// Size of the visible drawing area (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn diagonal(&self) -> f32 {
        diagonal_length(self.width, self.height)
    }
}

/// The animation core: viewport, options, RNG stream and current dots
#[derive(Debug, Clone)]
pub struct Constellation {
    viewport: Viewport,
    options: Options,
    rng_state: RngState,
    rng: Pcg32,
    dots: Vec<Dot>,
    time_ticks: u64,
}

impl Constellation {
    /// Seed the RNG and create the dot field for `viewport`.
    ///
    /// Options are used as given; call [`Options::validate`] first if they
    /// come from an untrusted source.
    pub fn new(viewport: Viewport, options: Options, seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        let mut rng = rng_state.to_rng();
        let dots = create_field(&mut rng, viewport.width, viewport.height, &options);
        log::debug!(
            "Created {} dots for {}x{} (seed {seed})",
            dots.len(),
            viewport.width,
            viewport.height
        );
        Self {
            viewport,
            options,
            rng_state,
            rng,
            dots,
            time_ticks: 0,
        }
    }

    /// Advance every dot by one physics tick
    pub fn tick(&mut self) {
        let next = advance_field(
            &mut self.rng,
            &self.dots,
            self.viewport.width,
            self.viewport.height,
            &self.options,
        );
        self.dots = next;
        self.time_ticks += 1;
    }

    /// Current dot collection (result of the latest completed tick)
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Proximity graph of the current dot collection
    pub fn edges(&self) -> Vec<Edge> {
        edges_for(
            &self.dots,
            self.viewport.width,
            self.viewport.height,
            &self.options,
        )
    }

    /// Change the viewport used for wrapping and connection radius.
    ///
    /// The dot field keeps its size; see [`Constellation::reseed_field`].
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!(
            "Viewport resized to {}x{}; keeping {} dots",
            viewport.width,
            viewport.height,
            self.dots.len()
        );
        self.viewport = viewport;
    }

    /// Replace the field with a fresh population sized to the current viewport
    pub fn reseed_field(&mut self) {
        self.dots = create_field(
            &mut self.rng,
            self.viewport.width,
            self.viewport.height,
            &self.options,
        );
        log::debug!("Reseeded field with {} dots", self.dots.len());
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    /// Physics ticks run since creation
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EdgeStrategy;

    #[test]
    fn test_new_sizes_field() {
        let c = Constellation::new(Viewport::new(1350.0, 1000.0), Options::default(), 1);
        assert_eq!(c.dots().len(), 100);
        assert_eq!(c.time_ticks(), 0);
        assert_eq!(c.seed(), 1);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = Constellation::new(Viewport::new(800.0, 600.0), Options::default(), 77);
        let mut b = Constellation::new(Viewport::new(800.0, 600.0), Options::default(), 77);
        for _ in 0..30 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.dots(), b.dots());
        assert_eq!(a.time_ticks(), 30);
    }

    #[test]
    fn test_tick_keeps_cardinality_and_fixed_properties() {
        let mut c = Constellation::new(Viewport::new(1024.0, 768.0), Options::default(), 5);
        let before = c.dots().to_vec();
        for _ in 0..200 {
            c.tick();
        }
        assert_eq!(c.dots().len(), before.len());
        for (a, b) in before.iter().zip(c.dots()) {
            assert_eq!(a.radius, b.radius);
            assert_eq!(a.speed, b.speed);
        }
    }

    #[test]
    fn test_positions_stay_in_wrap_band() {
        let viewport = Viewport::new(640.0, 480.0);
        let mut c = Constellation::new(viewport, Options::default(), 9);
        let half_margin = viewport.diagonal() * c.options().max_vertex_length / 2.0;
        for _ in 0..300 {
            c.tick();
            for d in c.dots() {
                assert!(d.x >= -half_margin - 1e-3 && d.x <= viewport.width + half_margin + 1e-3);
                assert!(d.y >= -half_margin - 1e-3 && d.y <= viewport.height + half_margin + 1e-3);
            }
        }
    }

    #[test]
    fn test_resize_keeps_field() {
        let mut c = Constellation::new(Viewport::new(1350.0, 1000.0), Options::default(), 3);
        c.resize(Viewport::new(400.0, 300.0));
        assert_eq!(c.dots().len(), 100);
        assert_eq!(c.viewport(), Viewport::new(400.0, 300.0));

        c.reseed_field();
        assert_eq!(c.dots().len(), 8);
    }

    #[test]
    fn test_edges_use_configured_strategy() {
        let grid = Options {
            edge_strategy: EdgeStrategy::Grid,
            ..Default::default()
        };
        let a = Constellation::new(Viewport::new(1600.0, 900.0), Options::default(), 4);
        let b = Constellation::new(Viewport::new(1600.0, 900.0), grid, 4);
        assert_eq!(a.dots(), b.dots());
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn test_empty_viewport_draws_nothing() {
        let mut c = Constellation::new(Viewport::new(0.0, 0.0), Options::default(), 1);
        c.tick();
        assert!(c.dots().is_empty());
        assert!(c.edges().is_empty());
    }
}
