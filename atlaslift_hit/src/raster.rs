// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aliased even-odd scanline fill.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{BezPath, PathEl, Point};

/// Flattening tolerance in pixels.
const TOLERANCE: f64 = 0.1;

/// A non-horizontal line segment with `y0 < y1`.
#[derive(Copy, Clone, Debug)]
struct Edge {
    x0: f64,
    y0: f64,
    y1: f64,
    /// `dx / dy`.
    slope: f64,
}

impl Edge {
    fn new(a: Point, b: Point) -> Option<Self> {
        if !(a.is_finite() && b.is_finite()) || a.y == b.y {
            return None;
        }
        let (top, bottom) = if a.y < b.y { (a, b) } else { (b, a) };
        Some(Self {
            x0: top.x,
            y0: top.y,
            y1: bottom.y,
            slope: (bottom.x - top.x) / (bottom.y - top.y),
        })
    }

    /// Crossing at scanline `y`, half-open so shared vertices count once.
    fn crossing(&self, y: f64) -> Option<f64> {
        (self.y0 <= y && y < self.y1).then(|| self.x0 + (y - self.y0) * self.slope)
    }
}

/// Flattens `path` into closed polygons, as edges. Open subpaths are closed.
fn edges(path: &BezPath) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut start = Point::ZERO;
    let mut last = Point::ZERO;
    kurbo::flatten(path, TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => {
            edges.extend(Edge::new(last, start));
            start = p;
            last = p;
        }
        PathEl::LineTo(p) => {
            edges.extend(Edge::new(last, p));
            last = p;
        }
        PathEl::ClosePath => {
            edges.extend(Edge::new(last, start));
            last = start;
        }
        // `flatten` only emits lines.
        PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    });
    edges.extend(Edge::new(last, start));
    edges
}

/// First pixel index whose center is at or right of `x`, clamped to `0..=limit`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "value is clamped to 0..=limit before the cast"
)]
fn first_center_at_or_after(x: f64, limit: usize) -> usize {
    (x - 0.5).ceil().clamp(0.0, limit as f64) as usize
}

/// Calls `span(row, x_start, x_end)` for each run of pixels whose center lies
/// inside `path` under the even-odd rule. Spans are clipped to `width x height`.
pub(crate) fn fill_spans(
    path: &BezPath,
    width: usize,
    height: usize,
    mut span: impl FnMut(usize, usize, usize),
) {
    let edges = edges(path);
    if edges.is_empty() || width == 0 || height == 0 {
        return;
    }
    let top = edges.iter().map(|e| e.y0).fold(f64::INFINITY, f64::min);
    let bottom = edges.iter().map(|e| e.y1).fold(f64::NEG_INFINITY, f64::max);
    let first_row = first_center_at_or_after(top, height);
    let end_row = first_center_at_or_after(bottom, height);

    let mut crossings: Vec<f64> = Vec::new();
    for row in first_row..end_row {
        let y = row as f64 + 0.5;
        crossings.clear();
        crossings.extend(edges.iter().filter_map(|e| e.crossing(y)));
        crossings.sort_by(f64::total_cmp);
        for pair in crossings.chunks_exact(2) {
            let x0 = first_center_at_or_after(pair[0], width);
            let x1 = first_center_at_or_after(pair[1], width);
            if x0 < x1 {
                span(row, x0, x1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::{Circle, Rect, Shape};

    fn coverage(path: &BezPath, width: usize, height: usize) -> Vec<Vec<bool>> {
        let mut rows = vec![vec![false; width]; height];
        fill_spans(path, width, height, |row, x0, x1| {
            for px in &mut rows[row][x0..x1] {
                *px = true;
            }
        });
        rows
    }

    #[test]
    fn rect_on_pixel_grid_covers_exactly_its_pixels() {
        let rows = coverage(&Rect::new(2.0, 1.0, 5.0, 3.0).to_path(0.1), 8, 4);
        let covered: usize = rows.iter().map(|r| r.iter().filter(|c| **c).count()).sum();
        assert_eq!(covered, 6);
        assert!(rows[1][2] && rows[2][4]);
        assert!(!rows[0][2] && !rows[1][5] && !rows[3][3]);
    }

    #[test]
    fn inner_ring_punches_a_hole_regardless_of_winding() {
        let mut path = Rect::new(0.0, 0.0, 10.0, 10.0).to_path(0.1);
        // Same orientation as the outer ring.
        path.extend(Rect::new(3.0, 3.0, 7.0, 7.0).to_path(0.1));
        let rows = coverage(&path, 10, 10);
        assert!(rows[1][1]);
        assert!(!rows[5][5]);
        assert!(rows[5][8]);
    }

    #[test]
    fn open_subpaths_are_closed() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((8.0, 0.0));
        path.line_to((8.0, 8.0));
        path.line_to((0.0, 8.0));
        let rows = coverage(&path, 8, 8);
        assert!(rows.iter().all(|r| r.iter().all(|c| *c)));
    }

    #[test]
    fn geometry_outside_the_surface_is_clipped() {
        let rows = coverage(&Circle::new((0.0, 0.0), 100.0).to_path(0.1), 4, 4);
        assert!(rows.iter().all(|r| r.iter().all(|c| *c)));
        let rows = coverage(&Rect::new(-9.0, -9.0, -1.0, -1.0).to_path(0.1), 4, 4);
        assert!(rows.iter().all(|r| r.iter().all(|c| !*c)));
    }
}
