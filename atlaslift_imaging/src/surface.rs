// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, BezPath, Stroke, Vec2};
use peniko::{Color, Fill};

use crate::{Shadow, StateStack, SurfaceState};

/// An immediate-mode 2D drawing surface.
///
/// Implementors provide storage for the [`StateStack`] plus the three operations
/// that touch pixels (`clear`, `fill_path`, `stroke_path`); everything else is
/// state bookkeeping provided here. Draws use the state current at the time of
/// the call.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (u16, u16);

    /// Resizes the surface. Contents are discarded and the state is reset.
    fn resize(&mut self, width: u16, height: u16);

    /// Clears every pixel to transparent. The drawing state is kept.
    fn clear(&mut self);

    /// Fills `path` with the current fill paint, fill rule, transform and shadow.
    fn fill_path(&mut self, path: &BezPath);

    /// Strokes `path` with the current stroke paint and style, transform and shadow.
    fn stroke_path(&mut self, path: &BezPath);

    /// The state stack.
    fn states(&self) -> &StateStack;

    /// Mutable access to the state stack.
    fn states_mut(&mut self) -> &mut StateStack;

    /// The current drawing state.
    fn state(&self) -> &SurfaceState {
        self.states().current()
    }

    /// Saves the current drawing state.
    fn save(&mut self) {
        self.states_mut().save();
    }

    /// Restores the most recently saved drawing state.
    fn restore(&mut self) {
        self.states_mut().restore();
    }

    /// Replaces the current transform.
    fn set_transform(&mut self, transform: Affine) {
        self.states_mut().current_mut().transform = transform;
    }

    /// Translates the current transform; later geometry moves by `offset`.
    fn translate(&mut self, offset: Vec2) {
        let state = self.states_mut().current_mut();
        state.transform = state.transform * Affine::translate(offset);
    }

    /// Sets or clears the shadow.
    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.states_mut().current_mut().shadow = shadow;
    }

    /// Sets the fill paint.
    fn set_fill(&mut self, color: Color) {
        self.states_mut().current_mut().fill = color;
    }

    /// Sets the stroke paint and style.
    fn set_stroke(&mut self, color: Color, style: Stroke) {
        let state = self.states_mut().current_mut();
        state.stroke_color = color;
        state.stroke = style;
    }

    /// Sets the fill rule.
    fn set_fill_rule(&mut self, rule: Fill) {
        self.states_mut().current_mut().fill_rule = rule;
    }
}
