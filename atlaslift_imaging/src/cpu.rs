// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Cap, Join, PathEl};
use peniko::color::Rgba8;
use vello_common::filter_effects::{EdgeMode, Filter, FilterPrimitive};
use vello_cpu::kurbo::{
    Affine as CpuAffine, BezPath as CpuBezPath, Cap as CpuCap, Join as CpuJoin,
    Stroke as CpuStroke,
};
use vello_cpu::{Pixmap, RenderContext, RenderMode, RenderSettings};

use crate::{Shadow, StateStack, Surface, SurfaceState};

/// A [`Surface`] rasterized by `vello_cpu`.
///
/// Draws are queued in a [`RenderContext`] and only rendered when pixels are
/// read back. Shadows are drawn per operation, like a 2D canvas: each shadowed
/// fill or stroke is wrapped in its own drop-shadow layer.
///
/// Shadow offsets are passed to `vello_cpu` unscaled; they are only exact in
/// device pixels while the current transform has no scale.
pub struct CpuSurface {
    ctx: RenderContext,
    width: u16,
    height: u16,
    states: StateStack,
    /// Unpremultiplied pixels of the last readback, dropped on every draw.
    pixels: Option<Vec<Rgba8>>,
}

impl fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("depth", &self.states.depth())
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    /// Creates a transparent surface.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            ctx: Self::context(width, height),
            width,
            height,
            states: StateStack::default(),
            pixels: None,
        }
    }

    fn context(width: u16, height: u16) -> RenderContext {
        let settings = RenderSettings {
            render_mode: RenderMode::OptimizeSpeed,
            ..RenderSettings::default()
        };
        RenderContext::new_with(width, height, settings)
    }

    /// Renders pending draws and returns the surface as unpremultiplied RGBA8,
    /// row-major, top row first.
    pub fn pixels(&mut self) -> &[Rgba8] {
        if self.pixels.is_none() {
            let mut pixmap = Pixmap::new(self.width, self.height);
            self.ctx.flush();
            self.ctx.render_to_pixmap(&mut pixmap);
            let pixels = pixmap
                .take_unpremultiplied()
                .into_iter()
                .map(|p| Rgba8 {
                    r: p.r,
                    g: p.g,
                    b: p.b,
                    a: p.a,
                })
                .collect();
            self.pixels = Some(pixels);
        }
        self.pixels.as_deref().unwrap_or_default()
    }

    /// Reads one pixel; `None` outside the surface.
    pub fn pixel(&mut self, x: u16, y: u16) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = usize::from(y) * usize::from(self.width) + usize::from(x);
        self.pixels().get(idx).copied()
    }

    /// Pixels as a tightly packed RGBA byte buffer.
    pub fn to_rgba_bytes(&mut self) -> Vec<u8> {
        let pixels = self.pixels();
        let mut bytes = Vec::with_capacity(pixels.len() * 4);
        for p in pixels {
            bytes.extend_from_slice(&[p.r, p.g, p.b, p.a]);
        }
        bytes
    }

    fn apply_state(&mut self, state: &SurfaceState) {
        self.ctx
            .set_transform(CpuAffine::new(state.transform.as_coeffs()));
        self.ctx.set_fill_rule(state.fill_rule);
    }

    fn draw(&mut self, path: &kurbo::BezPath, fill: bool) {
        self.pixels = None;
        let state = self.states.current().clone();
        self.apply_state(&state);
        let path = to_cpu_path(path);

        let filter = state
            .shadow
            .filter(Shadow::is_visible)
            .map(|shadow| shadow_filter(&shadow));
        let layered = filter.is_some();
        if layered {
            self.ctx.push_layer(None, None, None, None, filter);
        }
        if fill {
            self.ctx.set_paint(state.fill);
            self.ctx.fill_path(&path);
        } else {
            self.ctx.set_paint(state.stroke_color);
            self.ctx.set_stroke(to_cpu_stroke(&state.stroke));
            self.ctx.stroke_path(&path);
        }
        if layered {
            self.ctx.pop_layer();
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "vello_cpu filter parameters are f32"
)]
fn shadow_filter(shadow: &Shadow) -> Filter {
    Filter::from_primitive(FilterPrimitive::DropShadow {
        dx: shadow.offset.x as f32,
        dy: shadow.offset.y as f32,
        std_deviation: shadow.std_deviation() as f32,
        color: shadow.color,
        edge_mode: EdgeMode::None,
    })
}

fn to_cpu_path(path: &kurbo::BezPath) -> CpuBezPath {
    let mut out = CpuBezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to((p.x, p.y)),
            PathEl::LineTo(p) => out.line_to((p.x, p.y)),
            PathEl::QuadTo(p1, p) => out.quad_to((p1.x, p1.y), (p.x, p.y)),
            PathEl::CurveTo(p1, p2, p) => {
                out.curve_to((p1.x, p1.y), (p2.x, p2.y), (p.x, p.y));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn to_cpu_cap(cap: Cap) -> CpuCap {
    match cap {
        Cap::Butt => CpuCap::Butt,
        Cap::Round => CpuCap::Round,
        Cap::Square => CpuCap::Square,
    }
}

fn to_cpu_stroke(style: &kurbo::Stroke) -> CpuStroke {
    let mut stroke = CpuStroke::new(style.width);
    stroke.miter_limit = style.miter_limit;
    stroke.join = match style.join {
        Join::Bevel => CpuJoin::Bevel,
        Join::Miter => CpuJoin::Miter,
        Join::Round => CpuJoin::Round,
    };
    stroke.start_cap = to_cpu_cap(style.start_cap);
    stroke.end_cap = to_cpu_cap(style.end_cap);
    stroke
}

impl Surface for CpuSurface {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.ctx = Self::context(width, height);
        self.states.reset();
        self.pixels = None;
    }

    fn clear(&mut self) {
        self.ctx = Self::context(self.width, self.height);
        self.pixels = None;
    }

    fn fill_path(&mut self, path: &kurbo::BezPath) {
        self.draw(path, true);
    }

    fn stroke_path(&mut self, path: &kurbo::BezPath) {
        self.draw(path, false);
    }

    fn states(&self) -> &StateStack {
        &self.states
    }

    fn states_mut(&mut self) -> &mut StateStack {
        &mut self.states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Rect, Shape, Vec2};
    use peniko::Color;

    fn square(x: f64, y: f64, side: f64) -> kurbo::BezPath {
        Rect::new(x, y, x + side, y + side).to_path(0.1)
    }

    #[test]
    fn fill_lands_where_transform_puts_it() {
        let mut s = CpuSurface::new(32, 32);
        s.set_fill(Color::WHITE);
        s.translate(Vec2::new(0.0, -8.0));
        s.fill_path(&square(8.0, 16.0, 8.0));

        let inside = s.pixel(12, 12).unwrap();
        assert_eq!((inside.r, inside.a), (255, 255));
        assert_eq!(s.pixel(12, 20).unwrap().a, 0);
        assert_eq!(s.pixel(32, 0), None);
    }

    #[test]
    fn clear_erases_but_keeps_state() {
        let mut s = CpuSurface::new(16, 16);
        s.set_fill(Color::WHITE);
        s.fill_path(&square(0.0, 0.0, 16.0));
        assert_eq!(s.pixel(8, 8).unwrap().a, 255);
        s.clear();
        assert_eq!(s.pixel(8, 8).unwrap().a, 0);
        assert_eq!(s.state().fill, Color::WHITE);
    }

    #[test]
    fn shadow_darkens_below_the_shape() {
        let mut s = CpuSurface::new(48, 48);
        s.set_fill(Color::WHITE);
        s.set_shadow(Some(Shadow::new(Color::BLACK, 2.0, Vec2::new(0.0, 12.0))));
        s.fill_path(&square(12.0, 4.0, 16.0));

        // Below the shape, inside the shadow's footprint.
        assert!(s.pixel(20, 26).unwrap().a > 0);
        // Far left of both.
        assert_eq!(s.pixel(2, 10).unwrap().a, 0);
    }

    #[test]
    fn rgba_bytes_have_four_bytes_per_pixel() {
        let mut s = CpuSurface::new(5, 3);
        assert_eq!(s.to_rgba_bytes().len(), 5 * 3 * 4);
    }
}
