// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlaslift Hit: pointer-to-feature lookup through a color-indexed raster.
//!
//! Every feature is filled once into an offscreen [`HitSurface`] with a solid
//! color that encodes `index + 1` as a 24-bit integer (red holds bits 16-23,
//! green bits 8-15, blue bits 0-7). Picking is then a single pixel read and a
//! decode, independent of how many features there are. The background stays
//! `(0, 0, 0, 0)` and decodes to "no feature".
//!
//! The fill is aliased: pixel centers are sampled, coverage is all or nothing,
//! and nothing is ever stroked, so the colors at feature borders are exact.
//! Fills use the even-odd rule, so holes are honored whatever the ring winding.
//!
//! ## Example
//!
//! ```rust
//! use atlaslift_hit::{HitSurface, decode_color, encode_index};
//! use kurbo::{Point, Rect, Shape};
//!
//! let paths = [
//!     Rect::new(0.0, 0.0, 10.0, 10.0).to_path(0.1),
//!     Rect::new(10.0, 0.0, 20.0, 10.0).to_path(0.1),
//! ];
//! let mut hit = HitSurface::new(20, 10);
//! hit.rebuild(&paths);
//!
//! assert_eq!(hit.pick(Point::new(3.0, 4.0), paths.len()), Some(0));
//! assert_eq!(hit.pick(Point::new(15.5, 9.5), paths.len()), Some(1));
//! assert_eq!(hit.pick(Point::new(25.0, 4.0), paths.len()), None);
//!
//! let color = encode_index(1).unwrap();
//! assert_eq!((color.r, color.g, color.b), (0, 0, 2));
//! assert_eq!(decode_color(color, 2), Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod codec;
mod raster;
mod surface;

pub use codec::{MAX_FEATURES, decode_color, encode_index};
pub use surface::HitSurface;

pub use peniko::color::Rgba8;
