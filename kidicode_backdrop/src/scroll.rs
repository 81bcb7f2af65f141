// Copyright 2026 the KidiCode Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll commands: direction names and the speed-percent mapping.

use core::fmt;
use core::str::FromStr;

use kurbo::Vec2;

/// Backdrop speed, in pixels per second, at 100 percent.
pub const MAX_SCROLL_SPEED: f64 = 200.0;

/// Maps a speed percentage to pixels per second.
///
/// The mapping is linear and unclamped: `150.0` yields `300.0`, `-50.0`
/// yields `-100.0`. Block editors clamp to `0..=100` before calling.
#[must_use]
pub fn scroll_rate(speed_percent: f64) -> f64 {
    speed_percent / 100.0 * MAX_SCROLL_SPEED
}

/// Direction a scroll command applies to.
///
/// Horizontal and vertical commands touch separate velocity components, so
/// diagonal motion is one horizontal plus one vertical command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Negative y.
    Up,
    /// Positive y.
    Down,
    /// Negative x.
    Left,
    /// Positive x.
    Right,
}

impl ScrollDirection {
    /// Returns `velocity` with this direction's axis set to `rate`, signed by
    /// direction. The other axis is left as it was.
    #[must_use]
    pub fn apply(self, velocity: Vec2, rate: f64) -> Vec2 {
        match self {
            Self::Right => Vec2::new(rate, velocity.y),
            Self::Left => Vec2::new(-rate, velocity.y),
            Self::Down => Vec2::new(velocity.x, rate),
            Self::Up => Vec2::new(velocity.x, -rate),
        }
    }

    /// The lowercase name used by the block editor.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScrollDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [Self::Up, Self::Down, Self::Left, Self::Right]
            .into_iter()
            .find(|dir| dir.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseDirectionError)
    }
}

/// Returned when a string is not one of `up`, `down`, `left` or `right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of `up`, `down`, `left` or `right`")
    }
}

impl core::error::Error for ParseDirectionError {}
