// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single interpolation between two values.
//!
//! ## Usage
//!
//! 1) Create a [`Tween`] with [`Tween::new`].
//! 2) On each host frame, call [`Tween::advance`] with the elapsed time.
//! 3) Use [`Step::value`]; stop polling once [`Step::done`] is `true`.
//!
//! ```
//! use core::time::Duration;
//! use atlaslift_motion::{Easing, Tween};
//!
//! let mut tween = Tween::new(0.0, 10.0, Duration::from_millis(100), Easing::Linear);
//! let step = tween.advance(Duration::from_millis(50));
//! assert_eq!(step.value, 5.0);
//! assert!(!step.done);
//!
//! let step = tween.advance(Duration::from_millis(80));
//! assert_eq!(step.value, 10.0);
//! assert!(step.done);
//! ```

use core::time::Duration;

use crate::Easing;

/// Result of advancing a [`Tween`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    /// Interpolated value after the advance.
    pub value: f64,
    /// `true` once the tween has reached its end value.
    pub done: bool,
}

/// Interpolates from `from` to `to` over `duration` along an [`Easing`] curve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    /// Creates a tween that has not advanced yet.
    #[must_use]
    pub const fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Start value.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.from
    }

    /// End value.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.to
    }

    /// Total duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Time advanced so far, saturating at [`Tween::duration`].
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Easing curve.
    #[must_use]
    pub const fn easing(&self) -> Easing {
        self.easing
    }

    /// Returns `true` once the full duration has elapsed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Normalized time in `[0, 1]`. A zero-length tween is always at `1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Current interpolated value without advancing.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_done() {
            // Land exactly on the target; lerp can be off by an ulp.
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Advances the tween by `dt` and returns the new value.
    pub fn advance(&mut self, dt: Duration) -> Step {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        Step {
            value: self.value(),
            done: self.is_done(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut tween = Tween::new(3.0, 9.0, Duration::ZERO, Easing::OutCubic);
        let step = tween.advance(Duration::ZERO);
        assert_eq!(step, Step { value: 9.0, done: true });
    }

    #[test]
    fn overshooting_dt_clamps_to_end() {
        let mut tween = Tween::new(0.0, -15.0, 600 * MS, Easing::OutCubic);
        let step = tween.advance(Duration::from_secs(5));
        assert!(step.done);
        assert_eq!(step.value, -15.0);
        assert_eq!(tween.elapsed(), tween.duration());
    }

    #[test]
    fn out_cubic_moves_monotonically_toward_target() {
        let mut tween = Tween::new(0.0, -15.0, 600 * MS, Easing::OutCubic);
        let mut prev = 0.0;
        loop {
            let step = tween.advance(16 * MS);
            assert!(step.value <= prev, "value moved away from target");
            prev = step.value;
            if step.done {
                break;
            }
        }
        assert_eq!(prev, -15.0);
    }

    #[test]
    fn halfway_linear_is_midpoint() {
        let mut tween = Tween::new(2.0, 4.0, 200 * MS, Easing::Linear);
        assert_eq!(tween.progress(), 0.0);
        let step = tween.advance(100 * MS);
        assert!((step.value - 3.0).abs() < 1e-12);
        assert!((tween.progress() - 0.5).abs() < 1e-12);
    }
}
