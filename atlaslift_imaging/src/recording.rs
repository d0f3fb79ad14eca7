// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::BezPath;

use crate::{StateStack, Surface, SurfaceState};

/// Event recorded by [`RecordingSurface`].
#[derive(Clone, Debug)]
pub enum DrawEvent {
    /// The surface was cleared.
    Clear,
    /// A path was filled.
    Fill {
        /// Path as passed in (untransformed).
        path: BezPath,
        /// Snapshot of the state used for the fill.
        state: SurfaceState,
    },
    /// A path was stroked.
    Stroke {
        /// Path as passed in (untransformed).
        path: BezPath,
        /// Snapshot of the state used for the stroke.
        state: SurfaceState,
    },
}

impl DrawEvent {
    /// State snapshot of a draw event; `None` for [`DrawEvent::Clear`].
    #[must_use]
    pub fn state(&self) -> Option<&SurfaceState> {
        match self {
            Self::Clear => None,
            Self::Fill { state, .. } | Self::Stroke { state, .. } => Some(state),
        }
    }

    /// Path of a draw event; `None` for [`DrawEvent::Clear`].
    #[must_use]
    pub fn path(&self) -> Option<&BezPath> {
        match self {
            Self::Clear => None,
            Self::Fill { path, .. } | Self::Stroke { path, .. } => Some(path),
        }
    }
}

/// A [`Surface`] that records draws instead of rasterizing them.
///
/// Every draw is logged with a snapshot of the state it used, so tests can check
/// paint, transform and shadow per draw. Clears are logged too, which makes it
/// easy to split the log into frames.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: u16,
    height: u16,
    states: StateStack,
    events: Vec<DrawEvent>,
}

impl RecordingSurface {
    /// Creates an empty recording surface of the given size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// All events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[DrawEvent] {
        &self.events
    }

    /// Events since the most recent clear (the clear itself excluded).
    #[must_use]
    pub fn last_frame(&self) -> &[DrawEvent] {
        let start = self
            .events
            .iter()
            .rposition(|e| matches!(e, DrawEvent::Clear))
            .map_or(0, |i| i + 1);
        &self.events[start..]
    }

    /// Number of clears recorded.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DrawEvent::Clear))
            .count()
    }

    /// Forgets all recorded events; size and state are kept.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.states.reset();
    }

    fn clear(&mut self) {
        self.events.push(DrawEvent::Clear);
    }

    fn fill_path(&mut self, path: &BezPath) {
        self.events.push(DrawEvent::Fill {
            path: path.clone(),
            state: self.states.current().clone(),
        });
    }

    fn stroke_path(&mut self, path: &BezPath) {
        self.events.push(DrawEvent::Stroke {
            path: path.clone(),
            state: self.states.current().clone(),
        });
    }

    fn states(&self) -> &StateStack {
        &self.states
    }

    fn states_mut(&mut self) -> &mut StateStack {
        &mut self.states
    }
}
