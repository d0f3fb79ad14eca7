// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! GeoJSON loading.
//!
//! Only what a country map needs is understood: `FeatureCollection` and single
//! `Feature` documents whose geometries are `Polygon` or `MultiPolygon`. Features
//! with any other (or no) geometry are skipped and counted, not rejected.

use geo::{Geometry, MultiPolygon};
use geojson::{GeoJson, PolygonType, feature::Id};

use crate::{Dataset, Feature};

/// Errors produced while reading a GeoJSON document.
#[derive(Debug, thiserror::Error)]
pub enum GeoJsonError {
    /// The text is not valid JSON, or not shaped like GeoJSON.
    #[error("malformed GeoJSON: {0}")]
    Parse(#[from] geojson::Error),
    /// The document is a bare geometry rather than features.
    #[error("a bare GeoJSON geometry has no features")]
    BareGeometry,
    /// A position has fewer than two finite numbers.
    #[error("feature {feature}: position needs at least two finite numbers")]
    InvalidPosition {
        /// Index of the feature in the source document.
        feature: usize,
    },
}

/// Result of reading a collection: the dataset plus how many features were skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedCollection {
    /// Polygon features in document order.
    pub dataset: Dataset,
    /// Features dropped because their geometry was absent or not polygonal.
    pub skipped: usize,
}

/// Property keys consulted, in order, for a display name.
const NAME_KEYS: [&str; 4] = ["name", "NAME", "ADMIN", "admin"];

impl Dataset {
    /// Parses a GeoJSON document into a dataset, discarding the skip count.
    pub fn from_geojson_str(text: &str) -> Result<Self, GeoJsonError> {
        ParsedCollection::parse(text).map(|parsed| parsed.dataset)
    }
}

impl ParsedCollection {
    /// Parses a GeoJSON `FeatureCollection` or single `Feature`.
    pub fn parse(text: &str) -> Result<Self, GeoJsonError> {
        let raw = match text.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(collection) => collection.features,
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::Geometry(_) => return Err(GeoJsonError::BareGeometry),
        };

        let mut features = Vec::with_capacity(raw.len());
        let mut skipped = 0;
        for (index, feature) in raw.into_iter().enumerate() {
            match convert_feature(index, feature)? {
                Some(f) => features.push(f),
                None => skipped += 1,
            }
        }

        Ok(Self {
            dataset: Dataset::new(features),
            skipped,
        })
    }
}

fn convert_feature(index: usize, raw: geojson::Feature) -> Result<Option<Feature>, GeoJsonError> {
    let Some(geometry) = raw.geometry else {
        return Ok(None);
    };
    let planar = match &geometry.value {
        geojson::Value::Polygon(rings) => is_planar(rings),
        geojson::Value::MultiPolygon(parts) => parts.iter().all(is_planar),
        _ => return Ok(None),
    };
    if !planar {
        return Err(GeoJsonError::InvalidPosition { feature: index });
    }
    let polygons = match Geometry::<f64>::try_from(geometry.value)? {
        Geometry::Polygon(polygon) => MultiPolygon::new(vec![polygon]),
        Geometry::MultiPolygon(parts) => parts,
        _ => return Ok(None),
    };

    let id = raw.id.map(|id| match id {
        Id::String(s) => s,
        Id::Number(n) => n.to_string(),
    });
    let name = raw
        .properties
        .as_ref()
        .and_then(|props| {
            NAME_KEYS
                .iter()
                .find_map(|key| props.get(*key).and_then(|v| v.as_str()))
        })
        .map(str::to_owned)
        .or_else(|| id.clone())
        .unwrap_or_default();

    Ok(Some(Feature::new(id, name, polygons)))
}

/// Every position carries at least a finite longitude and latitude; altitude is ignored.
fn is_planar(rings: &PolygonType) -> bool {
    rings
        .iter()
        .flatten()
        .all(|pos| matches!(pos.as_slice(), [lon, lat, ..] if lon.is_finite() && lat.is_finite()))
}
