// Copyright 2026 the KidiCode Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Turns host frame timestamps into frame steps for
/// [`BackdropTiler::advance`](crate::BackdropTiler::advance).
///
/// Timestamps are milliseconds on any monotonic host clock, such as the value
/// `requestAnimationFrame` passes to its callback.
///
/// ```rust
/// use kidicode_backdrop::FrameClock;
///
/// let mut clock = FrameClock::new();
/// assert_eq!(clock.tick(1000.0), None);
/// assert_eq!(clock.tick(1016.0), Some(0.016));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Creates a clock that has not seen a frame yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frame timestamp and returns the step since the previous one,
    /// in seconds.
    ///
    /// Returns `None` for the first frame after construction or
    /// [`reset`](Self::reset), and for timestamps that do not move forward.
    /// A stale timestamp does not move the clock backwards, and non-finite
    /// timestamps are ignored.
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        if !now_ms.is_finite() {
            return None;
        }
        match self.last_ms {
            None => {
                self.last_ms = Some(now_ms);
                None
            }
            Some(last) if now_ms > last => {
                self.last_ms = Some(now_ms);
                Some((now_ms - last) / 1000.0)
            }
            Some(_) => None,
        }
    }

    /// Forgets the last timestamp, e.g. when the frame loop was paused.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
