// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch tracking.
//!
//! The pinch ratio is the current inter-finger distance divided by the
//! distance when the gesture started. Multiplying it by the scale at the
//! start of the gesture gives the new (unclamped) scale; callers apply their
//! own limits.
//!
//! ```
//! use kurbo::Point;
//! use vitrine_gesture::pinch::PinchState;
//!
//! let mut pinch = PinchState::default();
//! pinch.begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 1.5);
//! assert_eq!(pinch.scale_for(Point::new(0.0, 0.0), Point::new(200.0, 0.0)), Some(3.0));
//! ```

use kurbo::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Start {
    distance: f64,
    scale: f64,
}

/// Tracks an active pinch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    start: Option<Start>,
}

impl PinchState {
    /// Begin a pinch with fingers at `a` and `b` while the content is at `scale`.
    pub fn begin(&mut self, a: Point, b: Point, scale: f64) {
        self.start = Some(Start {
            distance: a.distance(b),
            scale,
        });
    }

    /// Ratio of the current finger distance to the starting distance.
    ///
    /// Returns `None` when no pinch is active or the fingers started on top of
    /// each other.
    #[must_use]
    pub fn ratio(&self, a: Point, b: Point) -> Option<f64> {
        let start = self.start?;
        if start.distance <= 0.0 {
            return None;
        }
        Some(a.distance(b) / start.distance)
    }

    /// Unclamped scale for fingers at `a` and `b`.
    #[must_use]
    pub fn scale_for(&self, a: Point, b: Point) -> Option<f64> {
        let start = self.start?;
        self.ratio(a, b).map(|ratio| start.scale * ratio)
    }

    /// Scale captured when the pinch began.
    #[must_use]
    pub fn initial_scale(&self) -> Option<f64> {
        self.start.map(|s| s.scale)
    }

    /// End the pinch.
    pub fn end(&mut self) {
        self.start = None;
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spreading_fingers_scales_up() {
        let mut pinch = PinchState::default();
        pinch.begin(Point::new(10.0, 10.0), Point::new(10.0, 60.0), 1.0);
        let scale = pinch
            .scale_for(Point::new(10.0, 0.0), Point::new(10.0, 100.0))
            .unwrap();
        assert!((scale - 2.0).abs() < 1e-12);
    }

    #[test]
    fn closing_fingers_scales_down() {
        let mut pinch = PinchState::default();
        pinch.begin(Point::new(0.0, 0.0), Point::new(3.0, 4.0), 2.0);
        let ratio = pinch
            .ratio(Point::new(0.0, 0.0), Point::new(0.6, 0.8))
            .unwrap();
        assert!((ratio - 0.2).abs() < 1e-12);
        assert_eq!(pinch.initial_scale(), Some(2.0));
    }

    #[test]
    fn degenerate_start_yields_nothing() {
        let mut pinch = PinchState::default();
        pinch.begin(Point::new(5.0, 5.0), Point::new(5.0, 5.0), 1.0);
        assert!(pinch.is_active());
        assert_eq!(pinch.scale_for(Point::new(0.0, 0.0), Point::new(9.0, 0.0)), None);
    }

    #[test]
    fn inactive_pinch_yields_nothing() {
        let mut pinch = PinchState::default();
        assert_eq!(pinch.ratio(Point::ZERO, Point::new(1.0, 0.0)), None);
        pinch.begin(Point::ZERO, Point::new(1.0, 0.0), 1.0);
        pinch.end();
        assert!(!pinch.is_active());
        assert_eq!(pinch.initial_scale(), None);
    }
}
