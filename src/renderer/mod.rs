//! Rendering collaborators
//!
//! `surface` defines what the core hands to a renderer; `shapes` tessellates
//! it into GPU-ready vertices.

pub mod shapes;
pub mod surface;
pub mod vertex;

pub use shapes::VertexSurface;
pub use surface::{DrawCall, Palette, RecordingSurface, Surface, draw_frame};
pub use vertex::Vertex;
