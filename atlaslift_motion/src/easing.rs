// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized easing curves.

use core::fmt;
use core::str::FromStr;

/// An easing curve mapping normalized time `t` in `[0, 1]` to progress in `[0, 1]`.
///
/// Every curve satisfies `apply(0.0) == 0.0` and `apply(1.0) == 1.0` and is
/// monotonic non-decreasing in between.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant speed.
    #[cfg_attr(feature = "serde", serde(rename = "linear"))]
    Linear,
    /// Quadratic, slow start.
    #[cfg_attr(feature = "serde", serde(rename = "easeInQuad"))]
    InQuad,
    /// Quadratic, slow settle.
    #[cfg_attr(feature = "serde", serde(rename = "easeOutQuad"))]
    OutQuad,
    /// Quadratic, slow start and settle.
    #[cfg_attr(feature = "serde", serde(rename = "easeInOutQuad"))]
    InOutQuad,
    /// Cubic, slow start.
    #[cfg_attr(feature = "serde", serde(rename = "easeInCubic"))]
    InCubic,
    /// Cubic, fast start and slow settle.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "easeOutCubic"))]
    OutCubic,
    /// Cubic, slow start and settle.
    #[cfg_attr(feature = "serde", serde(rename = "easeInOutCubic"))]
    InOutCubic,
    /// Quartic, fast start and slow settle.
    #[cfg_attr(feature = "serde", serde(rename = "easeOutQuart"))]
    OutQuart,
    /// Quintic, fast start and slow settle.
    #[cfg_attr(feature = "serde", serde(rename = "easeOutQuint"))]
    OutQuint,
}

impl Easing {
    /// All supported curves, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Linear,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
        Self::OutQuart,
        Self::OutQuint,
    ];

    /// Evaluates the curve at `t`, clamping `t` into `[0, 1]` first.
    ///
    /// A NaN `t` is treated as `0.0`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - inv_pow(t, 2),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * inv_pow(t, 2)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - inv_pow(t, 3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - 4.0 * inv_pow(t, 3)
                }
            }
            Self::OutQuart => 1.0 - inv_pow(t, 4),
            Self::OutQuint => 1.0 - inv_pow(t, 5),
        }
    }

    /// Returns the web-animation style name of this curve (e.g. `"easeOutCubic"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "easeInQuad",
            Self::OutQuad => "easeOutQuad",
            Self::InOutQuad => "easeInOutQuad",
            Self::InCubic => "easeInCubic",
            Self::OutCubic => "easeOutCubic",
            Self::InOutCubic => "easeInOutCubic",
            Self::OutQuart => "easeOutQuart",
            Self::OutQuint => "easeOutQuint",
        }
    }
}

/// `(1 - t)^n`.
fn inv_pow(t: f64, n: u32) -> f64 {
    let u = 1.0 - t;
    let mut acc = 1.0;
    for _ in 0..n {
        acc *= u;
    }
    acc
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown easing name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownEasing;

impl fmt::Display for UnknownEasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown easing name")
    }
}

impl core::error::Error for UnknownEasing {}

impl FromStr for Easing {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|easing| easing.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownEasing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{easing} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in Easing::ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(f64::from(i) / 100.0);
                assert!(v + 1e-12 >= prev, "{easing} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn out_cubic_starts_fast() {
        // Ease-out: more than half the distance is covered in the first quarter.
        assert!(Easing::OutCubic.apply(0.25) > 0.5);
        assert!(Easing::InCubic.apply(0.25) < 0.25);
    }

    #[test]
    fn in_out_halves_meet() {
        assert!((Easing::InOutQuad.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((Easing::InOutCubic.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_time_is_clamped() {
        assert_eq!(Easing::OutCubic.apply(-3.0), 0.0);
        assert_eq!(Easing::OutCubic.apply(7.0), 1.0);
        assert_eq!(Easing::Linear.apply(f64::NAN), 0.0);
    }

    #[test]
    fn parses_web_names() {
        assert_eq!("easeOutCubic".parse::<Easing>(), Ok(Easing::OutCubic));
        assert_eq!("LINEAR".parse::<Easing>(), Ok(Easing::Linear));
        assert_eq!("bounce".parse::<Easing>(), Err(UnknownEasing));
        for easing in Easing::ALL {
            assert_eq!(easing.name().parse::<Easing>(), Ok(easing));
        }
    }

    #[test]
    fn default_is_out_cubic() {
        assert_eq!(Easing::default(), Easing::OutCubic);
    }
}
