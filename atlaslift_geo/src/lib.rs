// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlaslift Geo: the geographic side of an Atlaslift map.
//!
//! This crate owns everything between a geographic document and pixel-space
//! geometry:
//!
//! - [`Dataset`] / [`Feature`]: an ordered, immutable list of named polygon
//!   features, each holding a [`geo::MultiPolygon`]. The index of a feature is
//!   its identity everywhere else in the stack, so order is preserved by every
//!   operation here.
//! - [`Dataset::from_geojson_str`]: GeoJSON `FeatureCollection` loading on top of
//!   the `geojson` crate.
//! - [`ProjectionKind`] / [`FittedProjection`]: Mercator and equirectangular
//!   projections fitted to an output size, behind the [`Projection`] trait.
//! - [`feature_path`] / [`project_dataset`]: projected [`kurbo::BezPath`]s ready
//!   to be filled or stroked by any renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use atlaslift_geo::{Dataset, ProjectionKind, project_dataset};
//! use kurbo::Size;
//!
//! let doc = r#"{
//!   "type": "FeatureCollection",
//!   "features": [{
//!     "type": "Feature",
//!     "id": "SQR",
//!     "properties": { "name": "Square" },
//!     "geometry": {
//!       "type": "Polygon",
//!       "coordinates": [[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]]
//!     }
//!   }]
//! }"#;
//!
//! let dataset = Dataset::from_geojson_str(doc).unwrap();
//! let projection = ProjectionKind::Mercator
//!     .fit_size(Size::new(200.0, 100.0), &dataset)
//!     .unwrap();
//! let paths = project_dataset(&dataset, &projection);
//!
//! assert_eq!(paths.len(), 1);
//! // The fitted feature touches the top and bottom of the output.
//! let bounds = kurbo::Shape::bounding_box(&paths[0]);
//! assert!((bounds.y0 - 0.0).abs() < 1e-9 && (bounds.y1 - 100.0).abs() < 1e-9);
//! ```

mod dataset;
mod geojson;
mod path;
mod projection;

pub use dataset::{Dataset, Feature, LonLat};
pub use crate::geojson::{GeoJsonError, ParsedCollection};
pub use path::{feature_path, project_dataset};
pub use projection::{FittedProjection, MERCATOR_MAX_LATITUDE, Projection, ProjectionKind};
