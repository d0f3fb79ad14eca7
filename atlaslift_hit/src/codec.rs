// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::color::Rgba8;

/// Number of features a hit surface can tell apart.
///
/// Ids `1..=0xFF_FFFF` are available; `0` is the background.
pub const MAX_FEATURES: usize = 0xFF_FFFF;

/// Encodes a feature index as an opaque hit color.
///
/// Returns `None` when `index + 1` does not fit in 24 bits.
#[must_use]
pub fn encode_index(index: usize) -> Option<Rgba8> {
    if index >= MAX_FEATURES {
        return None;
    }
    let id = u32::try_from(index + 1).ok()?;
    let [_, r, g, b] = id.to_be_bytes();
    Some(Rgba8 { r, g, b, a: 255 })
}

/// Decodes a hit color back into a feature index.
///
/// Only the color channels take part. The background (`0`) and any id past
/// `len` decode to `None`.
#[must_use]
pub fn decode_color(color: Rgba8, len: usize) -> Option<usize> {
    let id = u32::from_be_bytes([0, color.r, color.g, color.b]);
    let index = usize::try_from(id).ok()?.checked_sub(1)?;
    (index < len).then_some(index)
}
