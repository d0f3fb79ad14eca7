// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use atlaslift_geo::GeoJsonError;

/// Errors from reading a [`ViewerConfig`](crate::ViewerConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The config is not valid TOML for [`ViewerConfig`](crate::ViewerConfig).
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    /// A style color is not a CSS color.
    #[error("style.{field}: `{value}` is not a color ({reason})")]
    InvalidColor {
        /// Style field holding the color.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Parser message.
        reason: String,
    },
    /// A numeric setting is not finite or outside its allowed range.
    #[error("{field} = {value} is out of range: expected {expected}")]
    OutOfRange {
        /// Dotted path of the setting.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// The allowed range, in words.
        expected: &'static str,
    },
}

/// Errors that abort loading a dataset.
///
/// There is no retry: a host shows the message and stops, see
/// [`MapStatus`](crate::MapStatus).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A local dataset file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The HTTP request failed.
    #[cfg(feature = "fetch")]
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        /// Requested URL.
        url: String,
        /// Underlying HTTP error.
        source: Box<ureq::Error>,
    },
    /// The dataset is remote but this build cannot fetch.
    #[error("cannot fetch {url}: built without the `fetch` feature")]
    FetchUnavailable {
        /// Requested URL.
        url: String,
    },
    /// The document is not usable GeoJSON.
    #[error(transparent)]
    Parse(#[from] GeoJsonError),
    /// No polygon features remained after parsing and exclusion.
    #[error("dataset contains no polygon features")]
    Empty,
    /// More features than the hit surface can encode.
    #[error("dataset has {count} features; at most {max} can be picked")]
    TooManyFeatures {
        /// Features in the dataset.
        count: usize,
        /// Hit surface capacity.
        max: usize,
    },
}

/// Errors from building or resizing a [`MapViewer`](crate::MapViewer).
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// One of the dimensions is zero.
    #[error("surface size {width}x{height} has no area")]
    ZeroSize {
        /// Requested width.
        width: u16,
        /// Requested height.
        height: u16,
    },
    /// The dataset has no positions to fit a projection to.
    #[error("cannot fit a projection: the dataset has no usable positions")]
    NoProjection,
    /// More features than the hit surface can encode.
    #[error("dataset has {count} features; at most {max} can be picked")]
    TooManyFeatures {
        /// Features in the dataset.
        count: usize,
        /// Hit surface capacity.
        max: usize,
    },
    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
