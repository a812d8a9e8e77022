//! Animation options
//!
//! Keys mirror the browser option names (`pixelsPerDot`, `dotSize`, ...) so an
//! existing options object can be loaded as JSON unchanged. Every key is
//! optional and falls back to its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgba;
use crate::consts::*;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{name}: max ({max}) is below min ({min})")]
    InvalidRange { name: &'static str, min: f32, max: f32 },
    #[error("pixelsPerDot must be positive, got {0}")]
    NonPositiveDensity(f32),
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
}

/// Closed range of a per-dot property
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f32) -> bool {
        self.min <= v && v <= self.max
    }

    fn check(&self, name: &'static str) -> Result<(), OptionsError> {
        if self.max < self.min {
            return Err(OptionsError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// How the proximity graph is computed each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum EdgeStrategy {
    /// Test every pair
    #[default]
    BruteForce,
    /// Uniform grid index; same edges, fewer distance tests on large fields
    Grid,
}

impl EdgeStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeStrategy::BruteForce => "bruteForce",
            EdgeStrategy::Grid => "grid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bruteforce" | "brute-force" | "brute" => Some(EdgeStrategy::BruteForce),
            "grid" => Some(EdgeStrategy::Grid),
            _ => None,
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Dot density: viewport pixels per dot. Higher means fewer dots.
    ///
    /// Proximity cost grows with the square of the dot count, so values well
    /// under ~5000 slow every frame down noticeably.
    pub pixels_per_dot: f32,
    pub dot_color: Rgba,
    /// Dot radius (pixels)
    pub dot_size: Range,
    /// Dot speed (pixels per tick)
    pub dot_speed: Range,
    /// Heading drift per tick (radians)
    #[serde(alias = "dotCourseDeviations")]
    pub dot_course_deviation: f32,
    pub vertex_color: Rgba,
    /// Fraction of the viewport diagonal used for padding and connection radius
    pub max_vertex_length: f32,
    pub edge_strategy: EdgeStrategy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pixels_per_dot: PIXELS_PER_DOT,
            dot_color: Rgba::new(127.0 / 255.0, 127.0 / 255.0, 127.0 / 255.0, 1.0),
            dot_size: Range::new(DOT_SIZE_MIN, DOT_SIZE_MAX),
            dot_speed: Range::new(DOT_SPEED_MIN, DOT_SPEED_MAX),
            dot_course_deviation: DOT_COURSE_DEVIATION,
            vertex_color: Rgba::BLACK,
            max_vertex_length: MAX_VERTEX_LENGTH,
            edge_strategy: EdgeStrategy::BruteForce,
        }
    }
}

impl Options {
    /// Parse options from JSON. Does not validate.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, OptionsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject options the simulation cannot honour.
    ///
    /// Reversed ranges are reported, never swapped. A density below the
    /// recommended floor is accepted with a warning.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.pixels_per_dot > 0.0) {
            return Err(OptionsError::NonPositiveDensity(self.pixels_per_dot));
        }
        self.dot_size.check("dotSize")?;
        self.dot_speed.check("dotSpeed")?;
        if self.dot_course_deviation < 0.0 {
            return Err(OptionsError::Negative {
                name: "dotCourseDeviation",
                value: self.dot_course_deviation,
            });
        }
        if self.max_vertex_length < 0.0 {
            return Err(OptionsError::Negative {
                name: "maxVertexLength",
                value: self.max_vertex_length,
            });
        }
        if self.pixels_per_dot < MIN_RECOMMENDED_PIXELS_PER_DOT {
            log::warn!(
                "pixelsPerDot {} is below {}; expect slow frames",
                self.pixels_per_dot,
                MIN_RECOMMENDED_PIXELS_PER_DOT
            );
        }
        Ok(())
    }
}
