// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{BezPath, Point};
use peniko::color::Rgba8;

use crate::codec::{MAX_FEATURES, decode_color, encode_index};
use crate::raster::fill_spans;

const BACKGROUND: Rgba8 = Rgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 0,
};

/// Offscreen buffer whose pixel colors encode feature indices.
///
/// Keep it the same size as the visible surface and [`rebuild`](Self::rebuild)
/// it whenever the projected paths change; a stale surface answers for the old
/// geometry.
#[derive(Clone, Debug, Default)]
pub struct HitSurface {
    width: u16,
    height: u16,
    pixels: Vec<Rgba8>,
}

impl HitSurface {
    /// Creates a cleared surface.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; usize::from(width) * usize::from(height)],
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resizes and clears the surface.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize(usize::from(width) * usize::from(height), BACKGROUND);
    }

    /// Resets every pixel to the background.
    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }

    /// Fills `path` with `color`, aliased, even-odd, without stroking.
    pub fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        let width = usize::from(self.width);
        let pixels = &mut self.pixels;
        fill_spans(path, width, usize::from(self.height), |row, x0, x1| {
            let start = row * width;
            pixels[start + x0..start + x1].fill(color);
        });
    }

    /// Clears and repaints the surface from `paths`, one color per index.
    ///
    /// Later paths overwrite earlier ones where they overlap. Paths past
    /// [`MAX_FEATURES`] are not painted. Returns the number of paths painted.
    pub fn rebuild(&mut self, paths: &[BezPath]) -> usize {
        self.clear();
        let mut painted = 0;
        for (index, path) in paths.iter().enumerate().take(MAX_FEATURES) {
            if let Some(color) = encode_index(index) {
                self.fill_path(path, color);
                painted += 1;
            }
        }
        painted
    }

    /// The pixel at `(x, y)`, or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(usize::from(y) * usize::from(self.width) + usize::from(x))
            .copied()
    }

    /// All pixels, row-major, top row first.
    #[must_use]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Resolves a surface position to a feature index in `0..len`.
    ///
    /// Positions outside the surface, non-finite positions and the background
    /// all give `None`.
    #[must_use]
    pub fn pick(&self, pos: Point, len: usize) -> Option<usize> {
        let (x, y) = self.pixel_coords(pos)?;
        decode_color(self.pixel(x, y)?, len)
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "coordinates are range-checked against the u16 size first"
    )]
    fn pixel_coords(&self, pos: Point) -> Option<(u16, u16)> {
        if !pos.is_finite() {
            return None;
        }
        let (x, y) = (pos.x.floor(), pos.y.floor());
        let inside = x >= 0.0
            && y >= 0.0
            && x < f64::from(self.width)
            && y < f64::from(self.height);
        inside.then_some((x as u16, y as u16))
    }
}
