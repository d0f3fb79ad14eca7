// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projected feature outlines.

use core::iter;

use geo::Coord;
use kurbo::BezPath;

use crate::{Dataset, Feature, LonLat, Projection};

/// Builds the pixel-space outline of `feature`: one closed subpath per ring.
///
/// A closing position equal to the first is dropped (the subpath is closed
/// explicitly), and rings with fewer than three distinct positions are skipped.
#[must_use]
pub fn feature_path<P: Projection + ?Sized>(feature: &Feature, projection: &P) -> BezPath {
    let mut path = BezPath::new();
    let rings = feature
        .geometry
        .iter()
        .flat_map(|p| iter::once(p.exterior()).chain(p.interiors()));
    for ring in rings {
        let ring = open_ring(&ring.0);
        if ring.len() < 3 {
            continue;
        }
        let mut points = ring.iter().map(|&c| projection.project(LonLat::from(c)));
        if let Some(first) = points.next() {
            path.move_to(first);
            for pt in points {
                path.line_to(pt);
            }
            path.close_path();
        }
    }
    path
}

/// Projects every feature of `dataset`; the result is index-aligned with it.
#[must_use]
pub fn project_dataset<P: Projection + ?Sized>(dataset: &Dataset, projection: &P) -> Vec<BezPath> {
    dataset
        .iter()
        .map(|feature| feature_path(feature, projection))
        .collect()
}

fn open_ring(ring: &[Coord<f64>]) -> &[Coord<f64>] {
    match ring {
        [first, rest @ .., last] if !rest.is_empty() && first == last => &ring[..ring.len() - 1],
        _ => ring,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FittedProjection, ProjectionKind};
    use geo::{LineString, MultiPolygon, Polygon};
    use kurbo::{PathEl, Vec2};

    /// One pixel per degree, with the equator at y = 100.
    fn degrees_as_pixels() -> FittedProjection {
        FittedProjection::new(
            ProjectionKind::Equirectangular,
            180.0 / core::f64::consts::PI,
            Vec2::new(0.0, 100.0),
        )
    }

    fn ring(points: &[(f64, f64)]) -> LineString<f64> {
        LineString::from(points.to_vec())
    }

    #[test]
    fn closing_duplicate_is_dropped() {
        let f = Feature::new(
            None,
            "tri",
            Polygon::new(
                ring(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (0.0, 0.0)]),
                vec![],
            ),
        );
        let path = feature_path(&f, &degrees_as_pixels());
        let els = path.elements();
        assert_eq!(els.len(), 4, "move + 2 lines + close: {els:?}");
        assert!(matches!(els[0], PathEl::MoveTo(p) if (p.y - 100.0).abs() < 1e-9));
        assert!(matches!(els[3], PathEl::ClosePath));
    }

    #[test]
    fn holes_and_parts_become_subpaths() {
        let outer = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let hole = ring(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0)]);
        let island = ring(&[(20.0, 0.0), (21.0, 0.0), (21.0, 1.0)]);
        let f = Feature::new(
            None,
            "multi",
            vec![Polygon::new(outer, vec![hole]), Polygon::new(island, vec![])],
        );
        let path = feature_path(&f, &degrees_as_pixels());
        let moves = path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count();
        assert_eq!(moves, 3);
    }

    #[test]
    fn degenerate_rings_are_skipped() {
        let f = Feature::new(
            None,
            "line",
            Polygon::new(ring(&[(0.0, 0.0), (5.0, 5.0), (0.0, 0.0)]), vec![]),
        );
        assert!(feature_path(&f, &degrees_as_pixels()).elements().is_empty());
    }

    #[test]
    fn project_dataset_is_index_aligned() {
        let a = Feature::new(None, "a", MultiPolygon::<f64>::new(vec![]));
        let b = Feature::new(
            None,
            "b",
            Polygon::new(ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]), vec![]),
        );
        let paths = project_dataset(&Dataset::new(vec![a, b]), &degrees_as_pixels());
        assert_eq!(paths.len(), 2);
        assert!(paths[0].elements().is_empty());
        assert!(!paths[1].elements().is_empty());
    }
}
