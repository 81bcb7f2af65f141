// Copyright 2026 the KidiCode Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How a tile that crossed the far edge of the viewport is brought back.
///
/// Consulted by [`crate::TileSet::advance`] and therefore by
/// [`crate::BackdropTiler::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Apply at most one correction of twice the viewport extent per axis per
    /// step.
    ///
    /// This matches the long-standing stage behavior. A step that moves a tile
    /// by more than twice the viewport (for example after the page was in the
    /// background for a while) leaves it out of range until later steps
    /// bring it back.
    #[default]
    SingleStep,
    /// Apply as many corrections as needed so the tile lands inside the
    /// viewport's wrap window on the scrolling axis.
    Periodic,
}

impl WrapMode {
    /// Wraps one coordinate on one axis.
    ///
    /// `extent` is the viewport width or height and must be non-zero.
    /// Returns the new coordinate and whether a correction was applied.
    pub(crate) fn wrap(self, pos: f64, velocity: f64, extent: f64) -> (f64, bool) {
        let period = 2.0 * extent;
        if velocity > 0.0 && pos >= extent {
            let cycles = match self {
                Self::SingleStep => 1.0,
                Self::Periodic => whole_periods(pos - extent, period) + 1.0,
            };
            (pos - cycles * period, true)
        } else if velocity < 0.0 && pos <= -extent {
            let cycles = match self {
                Self::SingleStep => 1.0,
                Self::Periodic => whole_periods(-extent - pos, period) + 1.0,
            };
            (pos + cycles * period, true)
        } else {
            (pos, false)
        }
    }
}

/// Number of whole `period`s contained in a non-negative `distance`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Truncating a non-negative quotient is a floor; the cast saturates for huge or infinite steps."
)]
fn whole_periods(distance: f64, period: f64) -> f64 {
    (distance / period) as u64 as f64
}
