// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlaslift Imaging: canvas-style drawing surfaces.
//!
//! The map renderer draws through the small [`Surface`] trait, which models the
//! part of an immediate-mode 2D canvas the map needs:
//!
//! - clear, fill and stroke a [`kurbo::BezPath`],
//! - fill color, stroke color and [`kurbo::Stroke`] style,
//! - a current transform and an optional [`Shadow`],
//! - `save`/`restore` of all of the above through a [`StateStack`].
//!
//! Implementations:
//!
//! - [`RecordingSurface`]: records every draw together with the state it was
//!   drawn with. It does **not** rasterize; it exists so tests can assert on what
//!   a renderer emitted.
//! - `CpuSurface` (feature `vello_cpu`): rasterizes with `vello_cpu` and reads
//!   pixels back as unpremultiplied RGBA8.
//!
//! ## Example
//!
//! ```rust
//! use atlaslift_imaging::{DrawEvent, RecordingSurface, Surface};
//! use kurbo::{BezPath, Rect, Shape, Vec2};
//! use peniko::Color;
//!
//! let mut surface = RecordingSurface::new(64, 64);
//! let square: BezPath = Rect::new(8.0, 8.0, 24.0, 24.0).to_path(0.1);
//!
//! surface.clear();
//! surface.save();
//! surface.translate(Vec2::new(0.0, -4.0));
//! surface.set_fill(Color::WHITE);
//! surface.fill_path(&square);
//! surface.restore();
//!
//! let DrawEvent::Fill { state, .. } = &surface.events()[1] else {
//!     unreachable!()
//! };
//! assert_eq!(state.transform.translation(), Vec2::new(0.0, -4.0));
//! assert_eq!(surface.state().transform.translation(), Vec2::ZERO);
//! ```

#![no_std]

extern crate alloc;

mod recording;
mod state;
mod surface;

#[cfg(feature = "vello_cpu")]
mod cpu;

#[cfg(feature = "vello_cpu")]
pub use cpu::CpuSurface;
pub use recording::{DrawEvent, RecordingSurface};
pub use state::{Shadow, StateStack, SurfaceState};
pub use surface::Surface;

pub use peniko::color::Rgba8;
pub use peniko::{Color, Fill as FillRule};
