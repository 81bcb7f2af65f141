// Copyright 2026 the KidiCode Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kidicode_backdrop::TilePlacement;

/// CSS property values for one placed tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileStyle {
    /// Value for `transform`, e.g. `translate(12px, -8px)`.
    pub transform: String,
    /// Value for `width`, e.g. `640px`.
    pub width: String,
    /// Value for `height`, e.g. `360px`.
    pub height: String,
}

impl TileStyle {
    /// Formats a placement as CSS values.
    #[must_use]
    pub fn from_placement(placement: &TilePlacement) -> Self {
        Self {
            transform: format!(
                "translate({}px, {}px)",
                positive_zero(placement.offset.x),
                positive_zero(placement.offset.y)
            ),
            width: format!("{}px", positive_zero(placement.size.width)),
            height: format!("{}px", positive_zero(placement.size.height)),
        }
    }
}

/// Formats `url` as a CSS `background-image` value.
///
/// The URL is quoted, so data URLs and paths with spaces or parentheses are
/// safe to pass through.
#[must_use]
pub fn background_image_css(url: &str) -> String {
    let mut out = String::with_capacity(url.len() + 7);
    out.push_str("url(\"");
    for c in url.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\a "),
            _ => out.push(c),
        }
    }
    out.push_str("\")");
    out
}

// Rounding can produce -0.0, which would format as `-0px`.
fn positive_zero(v: f64) -> f64 {
    v + 0.0
}
