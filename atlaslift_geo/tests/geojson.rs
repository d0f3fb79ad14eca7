// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading and projecting a small country collection.

use atlaslift_geo::{
    Dataset, LonLat, ParsedCollection, Projection, ProjectionKind, project_dataset,
};
use kurbo::{Shape, Size};

const THREE_COUNTRIES: &str = include_str!("fixtures/three_countries.geojson");

#[test]
fn collection_loads_polygon_features_in_order() {
    let parsed = ParsedCollection::parse(THREE_COUNTRIES).expect("parse fixture");
    assert_eq!(parsed.skipped, 1, "the point feature is skipped");
    assert_eq!(
        parsed.dataset.names().collect::<Vec<_>>(),
        ["Alphaland", "Antarctica", "Betaland", "Gammaland"]
    );

    let gamma = parsed.dataset.get(3).expect("gammaland");
    assert_eq!(gamma.geometry.0.len(), 2);
    // Altitude values are ignored.
    assert_eq!(
        LonLat::from(gamma.geometry.0[1].exterior().0[0]),
        LonLat::new(40.0, 30.0)
    );

    let beta = parsed.dataset.get(2).expect("betaland");
    assert_eq!(beta.geometry.0[0].interiors().len(), 1);
}

#[test]
fn excluding_by_id_reindexes_densely() {
    let ds = Dataset::from_geojson_str(THREE_COUNTRIES)
        .expect("parse fixture")
        .without_ids(&["ATA"]);
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.position_by_id("AAA"), Some(0));
    assert_eq!(ds.position_by_id("BBB"), Some(1));
    assert_eq!(ds.position_by_id("CCC"), Some(2));
}

#[test]
fn fitted_paths_stay_inside_the_surface() {
    let ds = Dataset::from_geojson_str(THREE_COUNTRIES).expect("parse fixture");
    let size = Size::new(640.0, 360.0);
    for kind in [ProjectionKind::Mercator, ProjectionKind::Equirectangular] {
        let projection = kind.fit_size(size, &ds).expect("fit");
        let paths = project_dataset(&ds, &projection);
        assert_eq!(paths.len(), ds.len());

        let union = paths
            .iter()
            .map(Shape::bounding_box)
            .reduce(|a, b| a.union(b))
            .expect("non-empty");
        assert!(union.x0 >= -1e-6 && union.y0 >= -1e-6, "{kind:?}: {union:?}");
        assert!(union.x1 <= size.width + 1e-6, "{kind:?}: {union:?}");
        assert!(union.y1 <= size.height + 1e-6, "{kind:?}: {union:?}");
        // Fitting touches at least one pair of opposite edges.
        let touches_x = union.x0.abs() < 1e-6 && (union.x1 - size.width).abs() < 1e-6;
        let touches_y = union.y0.abs() < 1e-6 && (union.y1 - size.height).abs() < 1e-6;
        assert!(touches_x || touches_y, "{kind:?}: {union:?}");

        // North is up: Gammaland's island sits above its mainland.
        let island = projection.project(LonLat::new(45.0, 35.0));
        let mainland = projection.project(LonLat::new(45.0, 0.0));
        assert!(island.y < mainland.y);
    }
}
