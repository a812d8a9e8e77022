//! Uniform grid index for the proximity graph
//!
//! Cells are as wide as the connection radius, so any pair within range sits
//! in the same cell or in adjacent cells. Only half of the neighbourhood is
//! scanned per cell so each pair is tested once.

use std::collections::HashMap;

use super::dot::Dot;
use super::proximity::{Edge, pair_edge};

/// Own cell plus the forward half of the 8-neighbourhood
const FORWARD_NEIGHBOURS: [(i64, i64); 5] = [(0, 0), (1, -1), (1, 0), (1, 1), (0, 1)];

/// Past this many cells along an axis the index degenerates; scan pairs instead
const MAX_CELLS_PER_AXIS: f32 = i32::MAX as f32;

type Cell = (i64, i64);

fn scan_all_pairs(dots: &[Dot], max_distance: f32) -> Vec<Edge> {
    super::proximity::all_pairs(dots)
        .filter_map(|(a, b)| pair_edge(dots, a, b, max_distance))
        .collect()
}

/// Cells needed along the widest axis of the field
fn cells_per_axis(dots: &[Dot], cell_size: f32) -> f32 {
    let (min_x, max_x) = dots
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), d| (lo.min(d.x), hi.max(d.x)));
    let (min_y, max_y) = dots
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), d| (lo.min(d.y), hi.max(d.y)));
    ((max_x - min_x) / cell_size).max((max_y - min_y) / cell_size)
}

fn bucket(dots: &[Dot], cell_size: f32) -> HashMap<Cell, Vec<usize>> {
    let min_x = dots.iter().map(|d| d.x).fold(f32::INFINITY, f32::min);
    let min_y = dots.iter().map(|d| d.y).fold(f32::INFINITY, f32::min);

    let mut cells: HashMap<Cell, Vec<usize>> = HashMap::new();
    for (i, dot) in dots.iter().enumerate() {
        let cx = ((dot.x - min_x) / cell_size).floor() as i64;
        let cy = ((dot.y - min_y) / cell_size).floor() as i64;
        cells.entry((cx, cy)).or_default().push(i);
    }
    cells
}

/// All pairs within `max_distance`, sorted into `(a, b)` order
pub fn edges_within(dots: &[Dot], max_distance: f32) -> Vec<Edge> {
    if dots.len() < 2 || !(max_distance > 0.0) {
        return Vec::new();
    }
    let span = cells_per_axis(dots, max_distance);
    if !max_distance.is_finite() || !(span <= MAX_CELLS_PER_AXIS) {
        // No usable cell size for this field
        return scan_all_pairs(dots, max_distance);
    }

    let cells = bucket(dots, max_distance);
    let mut edges = Vec::new();

    for (&(cx, cy), members) in &cells {
        for (dx, dy) in FORWARD_NEIGHBOURS {
            if (dx, dy) == (0, 0) {
                for (k, &i) in members.iter().enumerate() {
                    for &j in &members[k + 1..] {
                        edges.extend(pair_edge(dots, i, j, max_distance));
                    }
                }
                continue;
            }
            let neighbour = cx.checked_add(dx).zip(cy.checked_add(dy));
            let Some(others) = neighbour.and_then(|cell| cells.get(&cell)) else {
                continue;
            };
            for &i in members {
                for &j in others {
                    edges.extend(pair_edge(dots, i.min(j), i.max(j), max_distance));
                }
            }
        }
    }

    edges.sort_unstable_by_key(|e| (e.a, e.b));
    edges
}
