// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal swipe recognition.
//!
//! Only the horizontal displacement between touch start and touch end is
//! considered. A swipe is recognized when the displacement strictly exceeds
//! [`SwipeConfig::min_distance`] and, if configured, the gesture finished
//! strictly within [`SwipeConfig::max_duration`].

use vitrine_timing::Millis;

/// Which way the finger travelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Toward smaller x. Usually means "show the next item".
    Left,
    /// Toward larger x. Usually means "show the previous item".
    Right,
}

/// Swipe thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Minimum horizontal travel, in pixels, exclusive.
    pub min_distance: f64,
    /// Maximum gesture duration, exclusive. `None` accepts any duration.
    pub max_duration: Option<Millis>,
}

impl SwipeConfig {
    /// Distance-only swipe configuration.
    #[must_use]
    pub const fn new(min_distance: f64) -> Self {
        Self {
            min_distance,
            max_duration: None,
        }
    }

    /// Require the swipe to complete in under `max_duration` milliseconds.
    #[must_use]
    pub const fn with_max_duration(mut self, max_duration: Millis) -> Self {
        self.max_duration = Some(max_duration);
        self
    }

    /// Classify a horizontal displacement `dx` that took `duration` milliseconds.
    #[must_use]
    pub fn classify(&self, dx: f64, duration: Millis) -> Option<SwipeDirection> {
        if let Some(max) = self.max_duration {
            if duration >= max {
                return None;
            }
        }
        if dx < -self.min_distance {
            Some(SwipeDirection::Left)
        } else if dx > self.min_distance {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }
}

/// Remembers where and when a potential swipe began.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f64, Millis)>,
}

impl SwipeTracker {
    /// Record the start of a touch.
    pub fn begin(&mut self, x: f64, now: Millis) {
        self.start = Some((x, now));
    }

    /// Horizontal travel from the start to `x`.
    #[must_use]
    pub fn displacement(&self, x: f64) -> Option<f64> {
        self.start.map(|(start, _)| x - start)
    }

    /// Finish the touch at `x` and classify it. The tracker is reset.
    pub fn finish(&mut self, x: f64, now: Millis, config: &SwipeConfig) -> Option<SwipeDirection> {
        let (start_x, start_t) = self.start.take()?;
        config.classify(x - start_x, now.saturating_sub(start_t))
    }

    /// Forget the current touch.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Returns `true` between `begin` and `finish`.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
