// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-frame map rendering with a lifted highlight.

use atlaslift_imaging::{Shadow, Surface};
use kurbo::{BezPath, Cap, Join, Stroke, Vec2};
use peniko::Color;

/// Colors, widths and shadow parameters of a map frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneStyle {
    /// Fill of features that are not hovered.
    pub inactive_fill: Color,
    /// Outline of features that are not hovered.
    pub border: Color,
    /// Outline width of features that are not hovered.
    pub border_width: f64,
    /// Fill of the hovered feature.
    pub active_fill: Color,
    /// Outline of the hovered feature.
    pub active_border: Color,
    /// Outline width of the hovered feature.
    pub active_border_width: f64,
    /// Color of the hovered feature's shadow.
    pub shadow_color: Color,
    /// Shadow distance per pixel of lift.
    pub shadow_factor: f64,
    /// Shadow blur at rest.
    pub shadow_base_blur: f64,
    /// Outline joins.
    pub join: Join,
    /// Outline caps.
    pub cap: Cap,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            inactive_fill: Color::from_rgb8(0x22, 0x22, 0x22),
            border: Color::from_rgb8(0x33, 0x33, 0x33),
            border_width: 0.5,
            active_fill: Color::from_rgb8(0x00, 0xd2, 0xff),
            active_border: Color::WHITE,
            active_border_width: 1.5,
            shadow_color: Color::BLACK,
            shadow_factor: 1.5,
            shadow_base_blur: 5.0,
            join: Join::Round,
            cap: Cap::Round,
        }
    }
}

impl SceneStyle {
    /// Shadow under a feature lifted by `offset` pixels.
    ///
    /// Distance and blur both grow linearly with `|offset|`; the shadow always
    /// falls downward.
    #[must_use]
    pub fn shadow_for(&self, offset: f64) -> Shadow {
        let distance = offset.abs() * self.shadow_factor;
        Shadow::new(
            self.shadow_color,
            distance + self.shadow_base_blur,
            Vec2::new(0.0, distance),
        )
    }

    fn outline(&self, width: f64) -> Stroke {
        Stroke::new(width).with_join(self.join).with_caps(self.cap)
    }
}

/// Redraws a whole frame.
///
/// Clears `surface`, then draws every path except `selection` in the base
/// style, in order. If `selection` names a path, it is drawn last, translated
/// vertically by `offset` and shadowed. The surface state is left as it was
/// found, so calling this again with the same inputs draws the same frame.
pub fn render_scene<S: Surface + ?Sized>(
    surface: &mut S,
    paths: &[BezPath],
    selection: Option<usize>,
    offset: f64,
    style: &SceneStyle,
) {
    surface.clear();
    surface.save();

    surface.set_shadow(None);
    surface.set_fill(style.inactive_fill);
    surface.set_stroke(style.border, style.outline(style.border_width));
    for (index, path) in paths.iter().enumerate() {
        if Some(index) == selection {
            continue;
        }
        surface.fill_path(path);
        surface.stroke_path(path);
    }

    if let Some(path) = selection.and_then(|i| paths.get(i)) {
        surface.set_shadow(Some(style.shadow_for(offset)));
        surface.translate(Vec2::new(0.0, offset));
        surface.set_fill(style.active_fill);
        surface.set_stroke(
            style.active_border,
            style.outline(style.active_border_width),
        );
        surface.fill_path(path);
        surface.stroke_path(path);
    }

    surface.restore();
}
