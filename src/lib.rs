//! Constellation - a drifting particle-network animation
//!
//! Core modules:
//! - `geometry`: Scalar helpers (distance, random ranges, padding margin)
//! - `sim`: Dot field, motion integration and the proximity graph
//! - `driver`: Fixed-rate physics ticks decoupled from the render cadence
//! - `renderer`: Drawing-surface abstraction and a CPU tessellator
//! - `options`: Data-driven configuration

pub mod color;
pub mod driver;
pub mod geometry;
pub mod options;
pub mod renderer;
pub mod sim;

pub use color::Rgba;
pub use driver::{Animation, FixedStep};
pub use options::{EdgeStrategy, Options, Range};
pub use sim::{Constellation, Dot, Edge, Viewport};

/// Configuration constants
pub mod consts {
    /// Fixed physics timestep (60 Hz)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum physics ticks per update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest host frame we account for; anything longer is treated as a stall
    pub const MAX_FRAME_TIME: f32 = 0.25;

    /// Dot density divisor (viewport pixels per dot)
    pub const PIXELS_PER_DOT: f32 = 13_500.0;
    /// Below this density the O(n²) proximity pass gets noticeably expensive
    pub const MIN_RECOMMENDED_PIXELS_PER_DOT: f32 = 5_000.0;

    /// Dot radius range (pixels)
    pub const DOT_SIZE_MIN: f32 = 2.0;
    pub const DOT_SIZE_MAX: f32 = 6.0;

    /// Dot speed range (pixels per tick)
    pub const DOT_SPEED_MIN: f32 = 3.0;
    pub const DOT_SPEED_MAX: f32 = 3.1;

    /// Heading drift per tick (radians, full symmetric width)
    pub const DOT_COURSE_DEVIATION: f32 = 0.05;

    /// Connection radius and padding, as a fraction of the viewport diagonal
    pub const MAX_VERTEX_LENGTH: f32 = 0.2;

    /// Peak opacity of an edge between two coincident dots
    pub const MAX_EDGE_OPACITY: f32 = 0.5;
    /// Stroke width of edges (pixels)
    pub const EDGE_WIDTH: f32 = 1.0;
}
