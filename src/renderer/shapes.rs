//! Shape generation for 2D primitives
//!
//! `VertexSurface` turns draw calls into triangle lists ready for a GPU
//! vertex buffer, in viewport pixel coordinates or clip space.

use glam::Vec2;
use std::f32::consts::PI;

use super::surface::Surface;
use super::vertex::Vertex;
use crate::color::Rgba;
use crate::sim::Viewport;

/// Segments used for a dot of the given radius
fn circle_segments(radius: f32) -> u32 {
    // Small dots look round with very few segments
    (radius * 2.0).ceil().clamp(8.0, 32.0) as u32
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a line of constant width (two triangles)
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let a2 = from - perp;
    let b1 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Surface that tessellates everything into one triangle list
#[derive(Debug, Clone, Default)]
pub struct VertexSurface {
    pub vertices: Vec<Vertex>,
}

impl VertexSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Vertices mapped from pixel space (y down) to clip space (y up)
    pub fn to_clip_space(&self, viewport: Viewport) -> Vec<Vertex> {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return Vec::new();
        }
        self.vertices
            .iter()
            .map(|v| {
                let x = v.position[0] / viewport.width * 2.0 - 1.0;
                let y = 1.0 - v.position[1] / viewport.height * 2.0;
                Vertex::new(x, y, v.color)
            })
            .collect()
    }
}

impl Surface for VertexSurface {
    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.vertices.extend(circle(
            center,
            radius,
            color.to_array(),
            circle_segments(radius),
        ));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.vertices
            .extend(line(from, to, width, color.to_array()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertex_count() {
        let v = circle(Vec2::new(5.0, 5.0), 3.0, [1.0; 4], 12);
        assert_eq!(v.len(), 36);
        assert!(v.iter().all(|v| {
            let p = Vec2::from(v.position) - Vec2::new(5.0, 5.0);
            p.length() <= 3.0 + 1e-4
        }));
    }

    #[test]
    fn test_line_quad() {
        let v = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.0, [0.0, 0.0, 0.0, 0.5]);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [0.0, 0.5]);
        assert_eq!(v[1].position, [0.0, -0.5]);
        assert_eq!(v[5].position, [10.0, -0.5]);
        assert_eq!(v[0].color[3], 0.5);
    }

    #[test]
    fn test_degenerate_line_is_skipped() {
        assert!(line(Vec2::ONE, Vec2::ONE, 1.0, [1.0; 4]).is_empty());
    }

    #[test]
    fn test_surface_clear_and_clip_space() {
        let mut s = VertexSurface::new();
        s.fill_circle(Vec2::new(50.0, 50.0), 2.0, Rgba::WHITE);
        assert_eq!(s.vertex_count(), 8 * 3);
        assert_eq!(s.as_bytes().len(), 8 * 3 * Vertex::STRIDE);

        let clip = s.to_clip_space(Viewport::new(100.0, 100.0));
        assert_eq!(clip[0].position, [0.0, 0.0]);
        assert!(s.to_clip_space(Viewport::new(0.0, 100.0)).is_empty());

        s.clear();
        assert_eq!(s.vertex_count(), 0);
    }
}
