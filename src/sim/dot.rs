//! Dots and the initial dot field

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geometry::{padding_margin, random_between};
use crate::options::Options;

/// A single drifting particle.
///
/// `radius` and `speed` are fixed at creation; position and heading change
/// every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub x: f32,
    pub y: f32,
    /// Drawn radius (pixels)
    pub radius: f32,
    /// Distance moved per tick (pixels)
    pub speed: f32,
    /// Direction of travel (radians)
    pub heading: f32,
}

impl Dot {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Displacement applied by one tick at the current heading
    pub fn step(&self) -> Vec2 {
        Vec2::new(self.heading.cos(), self.heading.sin()) * self.speed
    }

    pub fn distance_to(&self, other: &Dot) -> f32 {
        crate::geometry::diagonal_length(self.x - other.x, self.y - other.y)
    }
}

/// Number of dots for a viewport: `floor(w * h / pixels_per_dot)`.
///
/// Empty, negative or degenerate inputs give zero dots.
pub fn dot_count(viewport_w: f32, viewport_h: f32, pixels_per_dot: f32) -> usize {
    let n = (viewport_w * viewport_h / pixels_per_dot).floor();
    if n.is_finite() && n > 0.0 { n as usize } else { 0 }
}

/// Sample one dot somewhere in the padded viewport.
///
/// Positions keep their fractional part; they are not snapped to whole pixels.
pub fn create_dot<R: Rng + ?Sized>(
    rng: &mut R,
    viewport_w: f32,
    viewport_h: f32,
    options: &Options,
) -> Dot {
    let margin = padding_margin(viewport_w, viewport_h, options.max_vertex_length);
    Dot {
        x: random_between(rng, -margin, viewport_w + margin),
        y: random_between(rng, -margin, viewport_h + margin),
        radius: random_between(rng, options.dot_size.min, options.dot_size.max),
        speed: random_between(rng, options.dot_speed.min, options.dot_speed.max),
        heading: rng.random::<f32>() * TAU,
    }
}

/// Create the full dot population for a viewport
pub fn create_field<R: Rng + ?Sized>(
    rng: &mut R,
    viewport_w: f32,
    viewport_h: f32,
    options: &Options,
) -> Vec<Dot> {
    let count = dot_count(viewport_w, viewport_h, options.pixels_per_dot);
    (0..count)
        .map(|_| create_dot(rng, viewport_w, viewport_h, options))
        .collect()
}
