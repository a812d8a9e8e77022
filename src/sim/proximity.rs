//! Proximity graph between dots
//!
//! Every unordered pair of dots within the connection radius becomes an
//! edge. Closer pairs get more opaque lines. The graph is rebuilt from scratch
//! every frame and never stored.

use serde::{Deserialize, Serialize};

use super::dot::Dot;
use super::grid;
use crate::consts::MAX_EDGE_OPACITY;
use crate::geometry::padding_margin;
use crate::options::{EdgeStrategy, Options};

/// Connection between two dots, by index into the dot collection (`a < b`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    /// Line opacity in `[0, 0.5]`
    pub opacity: f32,
}

impl Edge {
    /// The two dots this edge joins
    pub fn endpoints<'a>(&self, dots: &'a [Dot]) -> (&'a Dot, &'a Dot) {
        (&dots[self.a], &dots[self.b])
    }
}

/// Lazy enumeration of every unordered index pair `(i, j)` with `i < j`
#[derive(Debug, Clone)]
pub struct AllPairs<'a> {
    dots: &'a [Dot],
    i: usize,
    j: usize,
}

/// Every unordered pair of distinct dots, each exactly once (`n*(n-1)/2` pairs)
pub fn all_pairs(dots: &[Dot]) -> AllPairs<'_> {
    AllPairs { dots, i: 0, j: 1 }
}

impl<'a> AllPairs<'a> {
    /// Resolve the next pair to the dots themselves
    pub fn dots(self) -> impl Iterator<Item = (&'a Dot, &'a Dot)> {
        let dots = self.dots;
        self.map(move |(i, j)| (&dots[i], &dots[j]))
    }
}

impl Iterator for AllPairs<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.dots.len();
        if self.j >= n {
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= n {
                return None;
            }
        }
        let pair = (self.i, self.j);
        self.j += 1;
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl ExactSizeIterator for AllPairs<'_> {}

impl AllPairs<'_> {
    fn remaining(&self) -> usize {
        let n = self.dots.len();
        if self.i >= n {
            return 0;
        }
        // Rest of the current row, then every full row after it
        let row = n.saturating_sub(self.j);
        let after = n - self.i - 1;
        row + after * after.saturating_sub(1) / 2
    }
}

/// Linear falloff: `0.5` for coincident dots down to `0` at `max_distance`
#[inline]
pub fn edge_opacity(distance: f32, max_distance: f32) -> f32 {
    (1.0 - distance / max_distance) * MAX_EDGE_OPACITY
}

/// Connection radius for a viewport: the full padding margin
#[inline]
pub fn connection_radius(viewport_w: f32, viewport_h: f32, options: &Options) -> f32 {
    padding_margin(viewport_w, viewport_h, options.max_vertex_length)
}

/// Test a single pair; `Some(edge)` when within `max_distance`.
///
/// A connection radius that is not positive connects nothing.
#[inline]
pub(crate) fn pair_edge(dots: &[Dot], a: usize, b: usize, max_distance: f32) -> Option<Edge> {
    if !(max_distance > 0.0) {
        return None;
    }
    let distance = dots[a].distance_to(&dots[b]);
    (distance <= max_distance).then(|| Edge {
        a,
        b,
        opacity: edge_opacity(distance, max_distance),
    })
}

/// Brute-force proximity graph, in `all_pairs` order
pub fn build_edges(dots: &[Dot], viewport_w: f32, viewport_h: f32, options: &Options) -> Vec<Edge> {
    let max_distance = connection_radius(viewport_w, viewport_h, options);
    all_pairs(dots)
        .filter_map(|(a, b)| pair_edge(dots, a, b, max_distance))
        .collect()
}

/// Grid-indexed proximity graph; identical output to [`build_edges`]
pub fn build_edges_indexed(
    dots: &[Dot],
    viewport_w: f32,
    viewport_h: f32,
    options: &Options,
) -> Vec<Edge> {
    let max_distance = connection_radius(viewport_w, viewport_h, options);
    grid::edges_within(dots, max_distance)
}

/// Proximity graph using the configured strategy
pub fn edges_for(dots: &[Dot], viewport_w: f32, viewport_h: f32, options: &Options) -> Vec<Edge> {
    match options.edge_strategy {
        EdgeStrategy::BruteForce => build_edges(dots, viewport_w, viewport_h, options),
        EdgeStrategy::Grid => build_edges_indexed(dots, viewport_w, viewport_h, options),
    }
}
