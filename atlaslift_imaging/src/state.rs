// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Affine, Cap, Join, Stroke, Vec2};
use peniko::{Color, Fill};

/// A canvas-style drop shadow.
///
/// `blur` follows the 2D canvas `shadowBlur` convention: the Gaussian standard
/// deviation is half of it. `offset` is in device pixels and is not affected by
/// the current transform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shadow {
    /// Shadow color.
    pub color: Color,
    /// Blur amount (canvas `shadowBlur`).
    pub blur: f64,
    /// Shadow displacement.
    pub offset: Vec2,
}

impl Shadow {
    /// Creates a shadow.
    #[must_use]
    pub const fn new(color: Color, blur: f64, offset: Vec2) -> Self {
        Self {
            color,
            blur,
            offset,
        }
    }

    /// Gaussian standard deviation of the blur.
    #[must_use]
    pub fn std_deviation(&self) -> f64 {
        (self.blur / 2.0).max(0.0)
    }

    /// Returns `false` for shadows that cannot produce any visible pixels.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.color.components[3] > 0.0
    }
}

/// The drawing state scoped by `save`/`restore`.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceState {
    /// Current transform, applied to path geometry.
    pub transform: Affine,
    /// Current shadow, if any.
    pub shadow: Option<Shadow>,
    /// Paint used by fills.
    pub fill: Color,
    /// Paint used by strokes.
    pub stroke_color: Color,
    /// Stroke geometry.
    pub stroke: Stroke,
    /// Fill rule for fills.
    pub fill_rule: Fill,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            shadow: None,
            fill: Color::BLACK,
            stroke_color: Color::BLACK,
            stroke: Stroke::new(1.0).with_join(Join::Round).with_caps(Cap::Round),
            fill_rule: Fill::EvenOdd,
        }
    }
}

/// The current [`SurfaceState`] plus the states saved beneath it.
#[derive(Clone, Debug, Default)]
pub struct StateStack {
    current: SurfaceState,
    saved: Vec<SurfaceState>,
}

impl StateStack {
    /// The state draws use right now.
    #[must_use]
    pub fn current(&self) -> &SurfaceState {
        &self.current
    }

    /// Mutable access to the current state.
    pub fn current_mut(&mut self) -> &mut SurfaceState {
        &mut self.current
    }

    /// Pushes a copy of the current state.
    pub fn save(&mut self) {
        self.saved.push(self.current.clone());
    }

    /// Pops the most recently saved state. Unmatched restores are ignored.
    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.current = state;
        }
    }

    /// Number of saved states.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Drops all saved states and resets the current one to the default.
    pub fn reset(&mut self) {
        self.saved.clear();
        self.current = SurfaceState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_pops_in_lifo_order() {
        let mut stack = StateStack::default();
        stack.current_mut().fill = Color::WHITE;
        stack.save();
        stack.current_mut().fill = Color::from_rgba8(0, 210, 255, 255);
        stack.save();
        stack.current_mut().transform = Affine::translate((0.0, -15.0));
        assert_eq!(stack.depth(), 2);

        stack.restore();
        assert_eq!(stack.current().transform, Affine::IDENTITY);
        assert_eq!(stack.current().fill, Color::from_rgba8(0, 210, 255, 255));
        stack.restore();
        assert_eq!(stack.current().fill, Color::WHITE);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn unmatched_restore_is_ignored() {
        let mut stack = StateStack::default();
        stack.current_mut().shadow = Some(Shadow::new(Color::BLACK, 5.0, Vec2::ZERO));
        stack.restore();
        assert!(stack.current().shadow.is_some());
    }

    #[test]
    fn shadow_sigma_is_half_the_blur() {
        let shadow = Shadow::new(Color::BLACK, 27.5, Vec2::new(0.0, 22.5));
        assert_eq!(shadow.std_deviation(), 13.75);
        assert!(shadow.is_visible());
        assert!(!Shadow::new(Color::TRANSPARENT, 5.0, Vec2::ZERO).is_visible());
    }
}
