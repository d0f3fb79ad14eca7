// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset loading and the host-visible initialization status.

use std::fmt;
use std::path::PathBuf;

use atlaslift_geo::{Dataset, ParsedCollection};
use atlaslift_hit::MAX_FEATURES;
use tracing::{info, warn};

use crate::LoadError;

/// Where a dataset comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetSource {
    /// A GeoJSON file on disk.
    Path(PathBuf),
    /// A GeoJSON document over HTTP(S). Needs the `fetch` feature.
    Url(String),
    /// GeoJSON text already in memory.
    Inline(String),
}

impl DatasetSource {
    /// Reads `location` as a URL if it has an `http://` or `https://` scheme,
    /// and as a path otherwise.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_owned())
        } else {
            Self::Path(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
            Self::Inline(text) => write!(f, "<inline, {} bytes>", text.len()),
        }
    }
}

/// Loads a dataset and removes the features whose id is in `excluded`.
///
/// Fails if nothing is left, or if more features remain than a hit surface can
/// tell apart. Order is preserved, so indices are stable from here on.
pub fn load_dataset<S: AsRef<str>>(
    source: &DatasetSource,
    excluded: &[S],
) -> Result<Dataset, LoadError> {
    let result = load(source, excluded);
    if let Err(err) = &result {
        warn!(%source, %err, "dataset load failed");
    }
    result
}

fn load<S: AsRef<str>>(source: &DatasetSource, excluded: &[S]) -> Result<Dataset, LoadError> {
    let text = read_source(source)?;
    let ParsedCollection { dataset, skipped } = ParsedCollection::parse(&text)?;
    if skipped > 0 {
        warn!(%source, skipped, "skipped features without polygon geometry");
    }
    let before = dataset.len();
    let dataset = dataset.without_ids(excluded);
    if dataset.is_empty() {
        return Err(LoadError::Empty);
    }
    if dataset.len() > MAX_FEATURES {
        return Err(LoadError::TooManyFeatures {
            count: dataset.len(),
            max: MAX_FEATURES,
        });
    }
    info!(
        %source,
        features = dataset.len(),
        excluded = before - dataset.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

fn read_source(source: &DatasetSource) -> Result<String, LoadError> {
    match source {
        DatasetSource::Path(path) => {
            std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })
        }
        DatasetSource::Url(url) => fetch(url),
        DatasetSource::Inline(text) => Ok(text.clone()),
    }
}

#[cfg(feature = "fetch")]
fn fetch(url: &str) -> Result<String, LoadError> {
    let wrap = |err: ureq::Error| LoadError::Fetch {
        url: url.to_owned(),
        source: Box::new(err),
    };
    let mut response = ureq::get(url).call().map_err(wrap)?;
    response.body_mut().read_to_string().map_err(wrap)
}

#[cfg(not(feature = "fetch"))]
fn fetch(url: &str) -> Result<String, LoadError> {
    Err(LoadError::FetchUnavailable {
        url: url.to_owned(),
    })
}

/// Initialization state shown by a host.
///
/// A failed load is final: the host shows the message and no map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MapStatus {
    /// The dataset has not arrived yet.
    #[default]
    Loading,
    /// The map is up.
    Ready,
    /// Initialization stopped; the message is meant for the user.
    Failed(String),
}

impl MapStatus {
    /// Status after a load attempt.
    #[must_use]
    pub fn from_load<T>(result: &Result<T, LoadError>) -> Self {
        match result {
            Ok(_) => Self::Ready,
            Err(err) => Self::Failed(format!("Could not load map data: {err}")),
        }
    }

    /// User-facing message, if initialization failed.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready => None,
        }
    }
}
