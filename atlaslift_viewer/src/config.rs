// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewer configuration, loadable from TOML.
//!
//! Every field has a default, so a config file only lists what it changes:
//!
//! ```toml
//! excluded_ids = []
//! projection = "equirectangular"
//! lift_distance = -20.0
//!
//! [style]
//! active_fill = "#ff8800"
//! ```

use std::path::Path;
use std::time::Duration;

use atlaslift_geo::ProjectionKind;
use atlaslift_motion::Easing;
use kurbo::Size;
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, SceneStyle};

/// Country outlines used when no dataset is given.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/holtzy/D3-graph-gallery/master/DATA/world.geojson";

/// Everything a [`MapViewer`](crate::MapViewer) and its host can tune.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Dataset location: a URL or a local path.
    pub dataset: String,
    /// Feature ids removed right after loading. Empty keeps every feature.
    pub excluded_ids: Vec<String>,
    /// Projection fitted to the surface.
    pub projection: ProjectionKind,
    /// Resting offset of the hovered feature, in pixels; negative lifts it up.
    pub lift_distance: f64,
    /// Length of the lift animation, in milliseconds.
    pub animation_ms: u64,
    /// Curve of the lift animation.
    pub easing: Easing,
    /// How the surface size follows the host viewport.
    pub viewport: ViewportPolicy,
    /// Colors and line widths.
    pub style: StyleConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            dataset: DEFAULT_DATASET_URL.to_owned(),
            excluded_ids: vec!["ATA".to_owned()],
            projection: ProjectionKind::Mercator,
            lift_distance: -15.0,
            animation_ms: 600,
            easing: Easing::OutCubic,
            viewport: ViewportPolicy::default(),
            style: StyleConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Parses a TOML document; missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every value that reaches the renderer or the animator.
    ///
    /// The lift must be a finite negative offset (features rise), and the style
    /// must resolve, see [`StyleConfig::resolve`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        in_range(
            "lift_distance",
            self.lift_distance,
            "a finite negative number",
            |v| v < 0.0,
        )?;
        self.style.resolve().map(drop)
    }

    /// Reads and parses a TOML file.
    pub fn from_toml_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The lift animation length.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

/// Derives the surface size from the host viewport.
///
/// Each dimension is the viewport dimension times its fraction, floored. A
/// dimension that comes out as zero (or is not a number) uses the fallback.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportPolicy {
    /// Share of the viewport width used by the surface.
    pub width_fraction: f64,
    /// Share of the viewport height used by the surface.
    pub height_fraction: f64,
    /// Width used when the scaled viewport width is zero.
    pub fallback_width: u16,
    /// Height used when the scaled viewport height is zero.
    pub fallback_height: u16,
}

impl Default for ViewportPolicy {
    fn default() -> Self {
        Self {
            width_fraction: 0.95,
            height_fraction: 0.9,
            fallback_width: 800,
            fallback_height: 600,
        }
    }
}

impl ViewportPolicy {
    /// Surface size for a viewport of `viewport` pixels.
    #[must_use]
    pub fn surface_size(&self, viewport: Size) -> (u16, u16) {
        (
            scaled(viewport.width, self.width_fraction, self.fallback_width),
            scaled(viewport.height, self.height_fraction, self.fallback_height),
        )
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is floored and clamped to the u16 range first"
)]
fn scaled(extent: f64, fraction: f64, fallback: u16) -> u16 {
    let v = (extent * fraction).floor();
    if v.is_finite() && v >= 1.0 {
        v.min(f64::from(u16::MAX)) as u16
    } else {
        fallback
    }
}

/// Scene colors as CSS color strings, plus line widths.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Fill of features that are not hovered.
    pub inactive_fill: String,
    /// Outline of features that are not hovered.
    pub border: String,
    /// Outline width of features that are not hovered.
    pub border_width: f64,
    /// Fill of the hovered feature.
    pub active_fill: String,
    /// Outline of the hovered feature.
    pub active_border: String,
    /// Outline width of the hovered feature.
    pub active_border_width: f64,
    /// Color of the hovered feature's shadow.
    pub shadow_color: String,
    /// Shadow distance per pixel of lift.
    pub shadow_factor: f64,
    /// Shadow blur at rest.
    pub shadow_base_blur: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            inactive_fill: "#222".to_owned(),
            border: "#333".to_owned(),
            border_width: 0.5,
            active_fill: "#00d2ff".to_owned(),
            active_border: "white".to_owned(),
            active_border_width: 1.5,
            shadow_color: "black".to_owned(),
            shadow_factor: 1.5,
            shadow_base_blur: 5.0,
        }
    }
}

impl StyleConfig {
    /// Parses the colors into a [`SceneStyle`].
    ///
    /// Widths, the shadow factor and the base blur must be finite and not negative.
    pub fn resolve(&self) -> Result<SceneStyle, ConfigError> {
        for (field, value) in [
            ("style.border_width", self.border_width),
            ("style.active_border_width", self.active_border_width),
            ("style.shadow_factor", self.shadow_factor),
            ("style.shadow_base_blur", self.shadow_base_blur),
        ] {
            in_range(field, value, "a finite number >= 0", |v| v >= 0.0)?;
        }
        Ok(SceneStyle {
            inactive_fill: color("inactive_fill", &self.inactive_fill)?,
            border: color("border", &self.border)?,
            border_width: self.border_width,
            active_fill: color("active_fill", &self.active_fill)?,
            active_border: color("active_border", &self.active_border)?,
            active_border_width: self.active_border_width,
            shadow_color: color("shadow_color", &self.shadow_color)?,
            shadow_factor: self.shadow_factor,
            shadow_base_blur: self.shadow_base_blur,
            ..SceneStyle::default()
        })
    }
}

fn color(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    parse_color(value)
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|err| ConfigError::InvalidColor {
            field,
            value: value.to_owned(),
            reason: err.to_string(),
        })
}

fn in_range(
    field: &'static str,
    value: f64,
    expected: &'static str,
    allowed: impl Fn(f64) -> bool,
) -> Result<(), ConfigError> {
    if value.is_finite() && allowed(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            expected,
        })
    }
}
