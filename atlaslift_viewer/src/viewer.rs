// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use atlaslift_geo::{Dataset, Feature, FittedProjection, project_dataset};
use atlaslift_hit::{HitSurface, MAX_FEATURES};
use atlaslift_imaging::Surface;
use atlaslift_motion::AnimatedValue;
use kurbo::{BezPath, Point, Size};
use tracing::debug;

use crate::{SceneStyle, ViewerConfig, ViewerError, render_scene};

/// Pointer cursor requested by the viewer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    /// Over open water.
    #[default]
    Default,
    /// Over a feature.
    Pointer,
}

/// The name label shown for the hovered feature.
///
/// Hiding the label keeps its text, so a host can fade it out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Label {
    /// Name of the most recently hovered feature.
    pub text: String,
    /// Whether the label should be shown.
    pub visible: bool,
}

/// A change of hovered feature reported by [`MapViewer::pointer_move`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverChange {
    /// The pointer moved onto this feature, possibly straight from another one.
    Entered(usize),
    /// The pointer left this feature for open water.
    Left(usize),
}

/// An interactive map bound to one drawing surface.
///
/// The viewer owns everything that changes while the map is up: the fitted
/// projection, the projected paths, the hit surface, the selection and the
/// hover offset. All of it is single-threaded and driven by the host:
///
/// - [`resize`](Self::resize) when the surface size changes,
/// - [`pointer_move`](Self::pointer_move) for every pointer event,
/// - [`tick`](Self::tick) once per host frame.
///
/// The hit surface always has the size of the drawing surface and is rebuilt
/// before `resize` returns, so no pointer event is ever resolved against stale
/// geometry.
#[derive(Debug)]
pub struct MapViewer<S: Surface> {
    dataset: Dataset,
    config: ViewerConfig,
    style: SceneStyle,
    surface: S,
    projection: Option<FittedProjection>,
    paths: Vec<BezPath>,
    hit: HitSurface,
    selection: Option<usize>,
    offset: AnimatedValue,
    label: Label,
    cursor: Cursor,
    frames: u64,
}

impl<S: Surface> MapViewer<S> {
    /// Fits the dataset to `surface`, builds the hit surface and draws the
    /// first frame.
    pub fn new(dataset: Dataset, surface: S, config: ViewerConfig) -> Result<Self, ViewerError> {
        if dataset.len() > MAX_FEATURES {
            return Err(ViewerError::TooManyFeatures {
                count: dataset.len(),
                max: MAX_FEATURES,
            });
        }
        config.validate()?;
        let style = config.style.resolve()?;
        let (width, height) = surface.size();
        let mut viewer = Self {
            dataset,
            config,
            style,
            surface,
            projection: None,
            paths: Vec::new(),
            hit: HitSurface::default(),
            selection: None,
            offset: AnimatedValue::new(0.0),
            label: Label::default(),
            cursor: Cursor::Default,
            frames: 0,
        };
        viewer.resize(width, height)?;
        Ok(viewer)
    }

    /// Refits the projection to a new surface size, rebuilds the hit surface
    /// and redraws.
    ///
    /// On error nothing is changed.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<(), ViewerError> {
        if width == 0 || height == 0 {
            return Err(ViewerError::ZeroSize { width, height });
        }
        let size = Size::new(f64::from(width), f64::from(height));
        let projection = self
            .config
            .projection
            .fit_size(size, &self.dataset)
            .ok_or(ViewerError::NoProjection)?;

        self.surface.resize(width, height);
        self.paths = project_dataset(&self.dataset, &projection);
        self.projection = Some(projection);
        self.hit.resize(width, height);
        let painted = self.hit.rebuild(&self.paths);
        debug!(width, height, painted, "hit surface rebuilt");
        self.draw();
        Ok(())
    }

    /// Resizes to the surface size the configured
    /// [`ViewportPolicy`](crate::ViewportPolicy) derives from `viewport`.
    pub fn resize_to_viewport(&mut self, viewport: Size) -> Result<(), ViewerError> {
        let (width, height) = self.config.viewport.surface_size(viewport);
        self.resize(width, height)
    }

    /// Handles a pointer move to `pos`, in surface pixels.
    ///
    /// Returns `None` when the hovered feature did not change; nothing else
    /// happens in that case, so moving within a feature never restarts its
    /// animation.
    ///
    /// Entering a feature drops the offset to rest and starts the lift from
    /// there; the next [`tick`](Self::tick) draws. Leaving for open water snaps
    /// the offset back to rest and redraws at once.
    pub fn pointer_move(&mut self, pos: Point) -> Option<HoverChange> {
        let picked = self.hit.pick(pos, self.dataset.len());
        if picked == self.selection {
            return None;
        }
        let previous = self.selection;
        self.selection = picked;

        if let Some(index) = picked {
            self.offset.set(0.0);
            self.offset.animate_to(
                self.config.lift_distance,
                self.config.animation_duration(),
                self.config.easing,
            );
            self.label.text.clone_from(&self.dataset.features()[index].name);
            self.label.visible = true;
            self.cursor = Cursor::Pointer;
            debug!(index, name = %self.label.text, "hover entered");
            Some(HoverChange::Entered(index))
        } else {
            self.offset.set(0.0);
            self.draw();
            self.label.visible = false;
            self.cursor = Cursor::Default;
            debug!(index = ?previous, "hover left");
            previous.map(HoverChange::Left)
        }
    }

    /// Advances the hover animation by `dt`, redrawing if the offset moved.
    ///
    /// Returns `true` if a frame was drawn. Hosts keep ticking while this
    /// returns `true` or [`is_animating`](Self::is_animating) holds.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.offset.tick(dt).is_some() {
            self.draw();
            true
        } else {
            false
        }
    }

    /// Redraws the current frame.
    pub fn draw(&mut self) {
        render_scene(
            &mut self.surface,
            &self.paths,
            self.selection,
            self.offset.value(),
            &self.style,
        );
        self.frames += 1;
    }

    /// The hovered feature, if any.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Current vertical offset of the hovered feature.
    #[must_use]
    pub fn hover_offset(&self) -> f64 {
        self.offset.value()
    }

    /// Returns `true` while the lift animation runs.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.offset.is_animating()
    }

    /// Lift animations started so far.
    #[must_use]
    pub fn animation_starts(&self) -> u64 {
        self.offset.starts()
    }

    /// The name label.
    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// The requested pointer cursor.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Frames drawn so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The drawing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the drawing surface, e.g. for pixel readback.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the viewer, returning its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// The hit surface.
    #[must_use]
    pub fn hit_surface(&self) -> &HitSurface {
        &self.hit
    }

    /// The dataset being shown.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The fitted projection.
    #[must_use]
    pub fn projection(&self) -> Option<&FittedProjection> {
        self.projection.as_ref()
    }

    /// Projected feature paths, index aligned with the dataset.
    #[must_use]
    pub fn paths(&self) -> &[BezPath] {
        &self.paths
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// The feature under `pos`, without changing the selection.
    #[must_use]
    pub fn feature_at(&self, pos: Point) -> Option<&Feature> {
        self.hit
            .pick(pos, self.dataset.len())
            .and_then(|i| self.dataset.get(i))
    }
}
