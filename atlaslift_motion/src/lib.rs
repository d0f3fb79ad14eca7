// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlaslift Motion: host-driven easing and scalar animation.
//!
//! This crate drives a single numeric value from where it is to where it should be,
//! one host frame at a time. It does not own a clock or a thread: the host's frame
//! loop calls [`AnimatedValue::tick`] with the elapsed time and redraws whenever a
//! new value comes back.
//!
//! - [`Easing`]: normalized easing curves, named the way web animation libraries
//!   name them (`"easeOutCubic"`, `"linear"`, ...).
//! - [`Tween`]: a single interpolation with an `advance(dt) -> Step` driver.
//! - [`AnimatedValue`]: a scalar that owns at most one active [`Tween`]. Starting a
//!   new animation replaces the previous one, so two animations never race on the
//!   same value.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use atlaslift_motion::{AnimatedValue, Easing};
//!
//! let mut offset = AnimatedValue::new(0.0);
//! offset.animate_to(-15.0, Duration::from_millis(600), Easing::OutCubic);
//!
//! // The host frame loop polls the value and redraws on every update.
//! let mut redraws = 0;
//! while let Some(_value) = offset.tick(Duration::from_millis(16)) {
//!     redraws += 1;
//! }
//!
//! assert!(redraws > 1);
//! assert_eq!(offset.value(), -15.0);
//! assert!(!offset.is_animating());
//! ```
//!
//! This crate is `no_std` and has no required dependencies.

#![no_std]

mod easing;
mod tween;
mod value;

pub use easing::{Easing, UnknownEasing};
pub use tween::{Step, Tween};
pub use value::AnimatedValue;
