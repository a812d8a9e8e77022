//! Drawing-surface boundary
//!
//! The core never talks to a concrete graphics API. A host implements
//! [`Surface`] for whatever it draws on and hands it to [`draw_frame`].

use glam::Vec2;

use crate::color::Rgba;
use crate::consts::EDGE_WIDTH;
use crate::options::Options;
use crate::sim::{Dot, Edge};

/// Minimal 2D drawing interface, in viewport pixel coordinates
pub trait Surface {
    /// Erase the previous frame
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// Colors used to draw a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub dot: Rgba,
    pub vertex: Rgba,
}

impl Palette {
    pub fn from_options(options: &Options) -> Self {
        Self {
            dot: options.dot_color,
            vertex: options.vertex_color,
        }
    }
}

/// Draw one frame: edges first, then dots on top
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    dots: &[Dot],
    edges: &[Edge],
    palette: &Palette,
) {
    surface.clear();
    for edge in edges {
        let (a, b) = edge.endpoints(dots);
        surface.stroke_line(
            a.position(),
            b.position(),
            EDGE_WIDTH,
            palette.vertex.with_alpha(edge.opacity),
        );
    }
    for dot in dots {
        surface.fill_circle(dot.position(), dot.radius, palette.dot);
    }
}

/// A recorded [`Surface`] call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
}

/// Surface that only records what it was asked to draw
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            width,
            color,
        });
    }
}
