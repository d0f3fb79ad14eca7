// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Features and the ordered dataset that owns them.

use geo::{BoundingRect, Coord, CoordsIter, MultiPolygon, Rect};

/// A geographic position in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LonLat {
    /// Longitude in degrees, east positive.
    pub lon: f64,
    /// Latitude in degrees, north positive.
    pub lat: f64,
}

impl LonLat {
    /// Creates a position from longitude and latitude in degrees.
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<Coord<f64>> for LonLat {
    fn from(c: Coord<f64>) -> Self {
        Self::new(c.x, c.y)
    }
}

impl From<LonLat> for Coord<f64> {
    fn from(p: LonLat) -> Self {
        Self { x: p.lon, y: p.lat }
    }
}

/// One named polygon feature (a country).
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    /// Stable identifier from the source document, when it has one.
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Geographic geometry. A single polygon is stored as a one-member
    /// multi-polygon; `x` is longitude and `y` latitude.
    pub geometry: MultiPolygon<f64>,
}

impl Feature {
    /// Creates a feature.
    #[must_use]
    pub fn new(
        id: Option<String>,
        name: impl Into<String>,
        geometry: impl Into<MultiPolygon<f64>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            geometry: geometry.into(),
        }
    }

    /// Every position of every ring, exteriors before holes.
    pub fn positions(&self) -> impl Iterator<Item = LonLat> + '_ {
        self.geometry.coords_iter().map(LonLat::from)
    }
}

/// An ordered sequence of features indexed `0..len`.
///
/// The index a feature has here is its key in every other part of the map
/// (hit colors, selection), so nothing in this type reorders features.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    features: Vec<Feature>,
}

impl Dataset {
    /// Creates a dataset from features, keeping their order.
    #[must_use]
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if there are no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// The feature at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }

    /// All features in index order.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Iterates over features in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// Display names in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.features.iter().map(|f| f.name.as_str())
    }

    /// Index of the first feature whose id equals `id`.
    #[must_use]
    pub fn position_by_id(&self, id: &str) -> Option<usize> {
        self.features
            .iter()
            .position(|f| f.id.as_deref() == Some(id))
    }

    /// Returns a dataset without the features whose id is listed in `ids`.
    ///
    /// Remaining features keep their relative order and are re-indexed densely.
    #[must_use]
    pub fn without_ids<S: AsRef<str>>(mut self, ids: &[S]) -> Self {
        if ids.is_empty() {
            return self;
        }
        self.features.retain(|f| {
            f.id
                .as_deref()
                .is_none_or(|id| !ids.iter().any(|x| x.as_ref() == id))
        });
        self
    }

    /// Geographic bounds over every position (`x` longitude, `y` latitude), or
    /// `None` when no feature has any.
    #[must_use]
    pub fn geo_bounds(&self) -> Option<Rect<f64>> {
        self.features
            .iter()
            .filter_map(|f| f.geometry.bounding_rect())
            .reduce(|a, b| {
                Rect::new(
                    Coord {
                        x: a.min().x.min(b.min().x),
                        y: a.min().y.min(b.min().y),
                    },
                    Coord {
                        x: a.max().x.max(b.max().x),
                        y: a.max().y.max(b.max().y),
                    },
                )
            })
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Feature;
    type IntoIter = core::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

impl FromIterator<Feature> for Dataset {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, Polygon};

    fn square(id: &str, x: f64) -> Feature {
        let ring = LineString::from(vec![(x, 0.0), (x + 1.0, 0.0), (x + 1.0, 1.0), (x, 1.0)]);
        Feature::new(
            Some(id.to_owned()),
            id.to_lowercase(),
            Polygon::new(ring, vec![]),
        )
    }

    #[test]
    fn without_ids_preserves_order() {
        let ds: Dataset = ["AAA", "ATA", "BBB", "CCC"]
            .iter()
            .enumerate()
            .map(|(i, id)| square(id, i as f64))
            .collect();

        let ds = ds.without_ids(&["ATA"]);
        assert_eq!(ds.names().collect::<Vec<_>>(), ["aaa", "bbb", "ccc"]);
        assert_eq!(ds.position_by_id("BBB"), Some(1));
        assert_eq!(ds.position_by_id("ATA"), None);
    }

    #[test]
    fn without_ids_keeps_features_without_ids() {
        let mut anon = square("X", 0.0);
        anon.id = None;
        let ds = Dataset::new(vec![anon, square("ATA", 2.0)]).without_ids(&["ATA"]);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.get(0).map(|f| f.id.clone()), Some(None));
    }

    #[test]
    fn empty_exclusion_list_is_identity() {
        let ds = Dataset::new(vec![square("ATA", 0.0)]);
        let none: [&str; 0] = [];
        assert_eq!(ds.clone().without_ids(&none), ds);
    }

    #[test]
    fn geo_bounds_cover_every_position() {
        let ds = Dataset::new(vec![square("A", -5.0), square("B", 7.0)]);
        let b = ds.geo_bounds().expect("bounds");
        assert_eq!(b.min(), Coord { x: -5.0, y: 0.0 });
        assert_eq!(b.max(), Coord { x: 8.0, y: 1.0 });
        assert!(Dataset::default().geo_bounds().is_none());
    }

    #[test]
    fn positions_walk_exterior_then_holes() {
        let outer = LineString::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let hole = LineString::from(vec![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0)]);
        let f = Feature::new(None, "holed", Polygon::new(outer, vec![hole]));
        let positions: Vec<_> = f.positions().collect();
        // Both rings are closed on construction.
        assert_eq!(positions.len(), 5 + 4);
        assert_eq!(positions[0], LonLat::new(0.0, 0.0));
        assert_eq!(positions[5], LonLat::new(1.0, 1.0));
    }
}
