// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scalar with at most one active animation.

use core::time::Duration;

use crate::{Easing, Tween};

/// A scalar value that owns at most one in-flight [`Tween`].
///
/// State machine: idle → animating on [`AnimatedValue::animate_to`] → idle when
/// the tween completes, when [`AnimatedValue::cancel`] or [`AnimatedValue::set`]
/// is called, or when a newer `animate_to` supersedes it. A superseded or
/// cancelled tween is dropped; it never produces another value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimatedValue {
    value: f64,
    active: Option<Tween>,
    starts: u64,
}

impl AnimatedValue {
    /// Creates an idle value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            active: None,
            starts: 0,
        }
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Snaps to `value`, cancelling any in-flight animation.
    pub fn set(&mut self, value: f64) {
        self.active = None;
        self.value = value;
    }

    /// Starts animating from the current value to `target`.
    ///
    /// Any animation already in flight is cancelled first, so the settled value is
    /// always the most recently requested target.
    pub fn animate_to(&mut self, target: f64, duration: Duration, easing: Easing) {
        self.active = Some(Tween::new(self.value, target, duration, easing));
        self.starts = self.starts.wrapping_add(1);
    }

    /// Cancels the in-flight animation, leaving the value where it is.
    ///
    /// Returns `true` if an animation was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Target of the in-flight animation, if any.
    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.active.as_ref().map(Tween::target)
    }

    /// The in-flight tween, if any.
    #[must_use]
    pub const fn active(&self) -> Option<&Tween> {
        self.active.as_ref()
    }

    /// Number of animations started over the lifetime of this value.
    #[must_use]
    pub const fn starts(&self) -> u64 {
        self.starts
    }

    /// Advances the in-flight animation by `dt`.
    ///
    /// Returns the updated value while animating (including the final, settled
    /// value), and `None` when idle. Hosts redraw on every `Some`.
    pub fn tick(&mut self, dt: Duration) -> Option<f64> {
        let tween = self.active.as_mut()?;
        let step = tween.advance(dt);
        self.value = step.value;
        if step.done {
            self.active = None;
        }
        Some(step.value)
    }
}
