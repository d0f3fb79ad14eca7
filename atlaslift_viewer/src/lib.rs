// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlaslift Viewer: an interactive world map with a lifted hover highlight.
//!
//! Countries are drawn as filled and outlined polygons. The one under the
//! pointer is redrawn on top, raised by an animated vertical offset and cast
//! with a drop shadow that grows as it rises, and its name is put on a label.
//!
//! The pieces:
//!
//! - [`load_dataset`] reads GeoJSON from a file, a URL (feature `fetch`) or
//!   memory, and drops excluded features before indices are assigned.
//! - [`MapViewer`] is the context a host keeps while the map is up. It owns
//!   the projection, the projected paths, a [`HitSurface`] for picking, and
//!   the selection and hover offset.
//! - [`render_scene`] draws one frame onto any [`Surface`].
//! - [`ViewerConfig`] gathers every tunable, and loads from TOML.
//!
//! The host drives the viewer from its event loop: `pointer_move` on pointer
//! events, `tick` every frame, `resize` when the surface changes size.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use atlaslift_imaging::RecordingSurface;
//! use atlaslift_viewer::{
//!     Cursor, DatasetSource, HoverChange, MapViewer, ViewerConfig, load_dataset,
//! };
//! use atlaslift_geo::{LonLat, Projection};
//!
//! let geojson = r#"{ "type": "FeatureCollection", "features": [
//!     { "type": "Feature", "id": "W", "properties": { "name": "West" },
//!       "geometry": { "type": "Polygon",
//!         "coordinates": [[[-40, -20], [-5, -20], [-5, 20], [-40, 20], [-40, -20]]] } },
//!     { "type": "Feature", "id": "E", "properties": { "name": "East" },
//!       "geometry": { "type": "Polygon",
//!         "coordinates": [[[5, -20], [40, -20], [40, 20], [5, 20], [5, -20]]] } }
//! ] }"#;
//! let dataset = load_dataset::<&str>(&DatasetSource::Inline(geojson.into()), &[]).unwrap();
//! let mut viewer =
//!     MapViewer::new(dataset, RecordingSurface::new(320, 200), ViewerConfig::default()).unwrap();
//!
//! let east = viewer.projection().unwrap().project(LonLat::new(20.0, 0.0));
//! assert_eq!(viewer.pointer_move(east), Some(HoverChange::Entered(1)));
//! assert_eq!(viewer.label().text, "East");
//! assert_eq!(viewer.cursor(), Cursor::Pointer);
//!
//! while viewer.tick(Duration::from_millis(16)) {}
//! assert_eq!(viewer.hover_offset(), -15.0);
//! ```

mod config;
mod error;
mod loader;
mod scene;
mod viewer;

pub use config::{DEFAULT_DATASET_URL, StyleConfig, ViewerConfig, ViewportPolicy};
pub use error::{ConfigError, LoadError, ViewerError};
pub use loader::{DatasetSource, MapStatus, load_dataset};
pub use scene::{SceneStyle, render_scene};
pub use viewer::{Cursor, HoverChange, Label, MapViewer};

pub use atlaslift_hit::HitSurface;
pub use atlaslift_imaging::Surface;
#[cfg(feature = "vello_cpu")]
pub use atlaslift_imaging::CpuSurface;
