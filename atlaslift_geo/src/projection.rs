// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map projections fitted to an output surface.
//!
//! A projection is computed in two stages: a *raw* projection maps degrees to
//! unitless plane coordinates (radians for both supported kinds), then a uniform
//! scale and translation place the whole dataset inside the output rectangle,
//! centered, preserving aspect ratio. Pixel `y` grows downward, so north is up.

use core::f64::consts::FRAC_PI_4;
use core::fmt::Debug;

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

use crate::{Dataset, Feature, LonLat};

/// Latitude limit (degrees) of the square Web-Mercator world; positions beyond it
/// are clamped before projecting so the poles stay finite.
pub const MERCATOR_MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Maps geographic positions to pixel positions.
pub trait Projection: Debug {
    /// Projects a position to pixel space.
    fn project(&self, position: LonLat) -> Point;

    /// Inverse of [`Projection::project`], or `None` if it is not defined at `point`.
    fn invert(&self, point: Point) -> Option<LonLat>;
}

/// The supported raw projections.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    /// Spherical Mercator; conformal, exaggerates high latitudes.
    #[default]
    Mercator,
    /// Plate carrée; longitude and latitude map linearly.
    Equirectangular,
}

impl ProjectionKind {
    /// Raw plane coordinates for a position (y grows northward).
    #[must_use]
    pub fn raw(self, p: LonLat) -> Point {
        let lambda = p.lon.to_radians();
        match self {
            Self::Mercator => {
                let lat = p.lat.clamp(-MERCATOR_MAX_LATITUDE, MERCATOR_MAX_LATITUDE);
                let phi = lat.to_radians();
                Point::new(lambda, (FRAC_PI_4 + phi / 2.0).tan().ln())
            }
            Self::Equirectangular => Point::new(lambda, p.lat.to_radians()),
        }
    }

    /// Inverse of [`ProjectionKind::raw`].
    #[must_use]
    pub fn raw_invert(self, p: Point) -> LonLat {
        let lon = p.x.to_degrees();
        let lat = match self {
            Self::Mercator => (2.0 * p.y.exp().atan() - 2.0 * FRAC_PI_4).to_degrees(),
            Self::Equirectangular => p.y.to_degrees(),
        };
        LonLat::new(lon, lat)
    }

    /// Raw-space bounds of every position in `dataset`.
    #[must_use]
    pub fn raw_bounds(self, dataset: &Dataset) -> Option<Rect> {
        let mut points = dataset
            .iter()
            .flat_map(Feature::positions)
            .map(|p| self.raw(p));
        let first = points.next()?;
        Some(points.fold(Rect::from_points(first, first), |r, p| r.union_pt(p)))
    }

    /// Fits this projection so that `dataset` fills `size`, centered.
    ///
    /// Returns `None` when the dataset is empty, when `size` has no area, or when
    /// every position projects to the same point.
    #[must_use]
    pub fn fit_size(self, size: Size, dataset: &Dataset) -> Option<FittedProjection> {
        self.fit_extent(Rect::from_origin_size(Point::ORIGIN, size), dataset)
    }

    /// Fits this projection so that `dataset` fills `extent`, centered.
    #[must_use]
    pub fn fit_extent(self, extent: Rect, dataset: &Dataset) -> Option<FittedProjection> {
        if !(extent.width() > 0.0 && extent.height() > 0.0) {
            return None;
        }
        let bounds = self.raw_bounds(dataset)?;
        let sx = extent.width() / bounds.width();
        let sy = extent.height() / bounds.height();
        // A zero-width or zero-height dataset still fits along its other axis.
        let scale = match (sx.is_finite(), sy.is_finite()) {
            (true, true) => sx.min(sy),
            (true, false) => sx,
            (false, true) => sy,
            (false, false) => return None,
        };
        if !(scale.is_finite() && scale > 0.0) {
            return None;
        }
        let center = bounds.center();
        let target = extent.center();
        let translate = Vec2::new(target.x - scale * center.x, target.y + scale * center.y);
        Some(FittedProjection {
            kind: self,
            scale,
            translate,
        })
    }
}

/// A raw projection with a uniform scale and a translation into pixel space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FittedProjection {
    kind: ProjectionKind,
    scale: f64,
    translate: Vec2,
}

impl FittedProjection {
    /// Creates a projection from explicit parameters.
    #[must_use]
    pub const fn new(kind: ProjectionKind, scale: f64, translate: Vec2) -> Self {
        Self {
            kind,
            scale,
            translate,
        }
    }

    /// The raw projection.
    #[must_use]
    pub const fn kind(&self) -> ProjectionKind {
        self.kind
    }

    /// Pixels per raw unit.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Pixel position of the raw origin.
    #[must_use]
    pub const fn translate(&self) -> Vec2 {
        self.translate
    }
}

impl Projection for FittedProjection {
    fn project(&self, position: LonLat) -> Point {
        let raw = self.kind.raw(position);
        Point::new(
            self.translate.x + self.scale * raw.x,
            self.translate.y - self.scale * raw.y,
        )
    }

    fn invert(&self, point: Point) -> Option<LonLat> {
        if self.scale == 0.0 {
            return None;
        }
        let raw = Point::new(
            (point.x - self.translate.x) / self.scale,
            (self.translate.y - point.y) / self.scale,
        );
        let ll = self.kind.raw_invert(raw);
        (ll.lon.is_finite() && ll.lat.is_finite()).then_some(ll)
    }
}
