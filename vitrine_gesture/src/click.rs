// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-vs-drag disambiguation.
//!
//! A press becomes a *drag* as soon as the pointer strays further than the
//! configured slop along either axis. A press that never strayed and was
//! released quickly is a *tap*. A press that never strayed but was held too
//! long is a *hold*, which callers usually ignore.
//!
//! ```
//! use kurbo::Point;
//! use vitrine_gesture::click::{TapConfig, TapResult, TapState};
//!
//! let mut tap = TapState::new(TapConfig::default());
//! tap.on_down(Point::new(0.0, 0.0), 0);
//! assert!(!tap.on_move(Point::new(5.0, 5.0))); // exactly at the slop: still a tap
//! assert_eq!(tap.on_up(299), TapResult::Tap);
//! ```

use kurbo::Point;
use vitrine_timing::Millis;

/// Thresholds for [`TapState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapConfig {
    /// Movement along either axis beyond this many pixels turns a press into a drag.
    pub slop: f64,
    /// A tap must be released strictly before this many milliseconds.
    pub max_duration: Millis,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            slop: 5.0,
            max_duration: 300,
        }
    }
}

/// Outcome of releasing a press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapResult {
    /// Quick press without movement.
    Tap,
    /// The pointer moved beyond the slop at some point during the press.
    Drag,
    /// No movement, but held for at least `max_duration`.
    Hold,
    /// There was no press to release.
    None,
}

/// Tracks a single press from down to up.
#[derive(Clone, Copy, Debug)]
pub struct TapState {
    config: TapConfig,
    down: Option<(Point, Millis)>,
    moved: bool,
}

impl TapState {
    /// Create an idle tracker with the given thresholds.
    #[must_use]
    pub fn new(config: TapConfig) -> Self {
        Self {
            config,
            down: None,
            moved: false,
        }
    }

    /// Thresholds in use.
    #[must_use]
    pub fn config(&self) -> TapConfig {
        self.config
    }

    /// Begin a press at `pos`. Any press in progress is discarded.
    pub fn on_down(&mut self, pos: Point, now: Millis) {
        self.down = Some((pos, now));
        self.moved = false;
    }

    /// Observe pointer movement. Returns `true` once the press has become a drag.
    pub fn on_move(&mut self, pos: Point) -> bool {
        if let Some((start, _)) = self.down {
            let d = pos - start;
            if d.x.abs() > self.config.slop || d.y.abs() > self.config.slop {
                self.moved = true;
            }
        }
        self.moved
    }

    /// Mark the current press as moved without a position, e.g. when a second
    /// finger turns it into a pinch.
    pub fn mark_moved(&mut self) {
        if self.down.is_some() {
            self.moved = true;
        }
    }

    /// Release the press and classify it.
    pub fn on_up(&mut self, now: Millis) -> TapResult {
        let Some((_, start)) = self.down.take() else {
            return TapResult::None;
        };
        if self.moved {
            TapResult::Drag
        } else if now.saturating_sub(start) < self.config.max_duration {
            TapResult::Tap
        } else {
            TapResult::Hold
        }
    }

    /// Abandon the current press without classifying it.
    pub fn cancel(&mut self) {
        self.down = None;
        self.moved = false;
    }

    /// Returns `true` between `on_down` and `on_up`.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.down.is_some()
    }

    /// Returns `true` if the current (or most recent) press moved beyond the slop.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Milliseconds since the press began, if pressed.
    #[must_use]
    pub fn elapsed(&self, now: Millis) -> Option<Millis> {
        self.down.map(|(_, start)| now.saturating_sub(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> TapState {
        TapState::new(TapConfig::default())
    }

    #[test]
    fn release_without_press_is_none() {
        let mut tap = state();
        assert_eq!(tap.on_up(10), TapResult::None);
    }

    #[test]
    fn quick_still_press_is_tap() {
        let mut tap = state();
        tap.on_down(Point::new(10.0, 10.0), 100);
        assert_eq!(tap.on_up(200), TapResult::Tap);
        assert!(!tap.is_pressed());
    }

    #[test]
    fn movement_beyond_slop_on_either_axis_is_drag() {
        let mut tap = state();
        tap.on_down(Point::new(10.0, 10.0), 0);
        assert!(tap.on_move(Point::new(10.0, 15.5)));
        assert_eq!(tap.on_up(50), TapResult::Drag);

        tap.on_down(Point::new(10.0, 10.0), 0);
        assert!(tap.on_move(Point::new(4.0, 10.0)));
        assert_eq!(tap.on_up(50), TapResult::Drag);
    }

    #[test]
    fn moving_back_does_not_undo_drag() {
        let mut tap = state();
        tap.on_down(Point::new(0.0, 0.0), 0);
        tap.on_move(Point::new(30.0, 0.0));
        assert!(tap.on_move(Point::new(0.0, 0.0)));
        assert_eq!(tap.on_up(10), TapResult::Drag);
    }

    #[test]
    fn long_still_press_is_hold() {
        let mut tap = state();
        tap.on_down(Point::new(0.0, 0.0), 0);
        assert_eq!(tap.on_up(300), TapResult::Hold);
    }

    #[test]
    fn mark_moved_requires_press() {
        let mut tap = state();
        tap.mark_moved();
        assert!(!tap.has_moved());

        tap.on_down(Point::new(0.0, 0.0), 0);
        tap.mark_moved();
        assert_eq!(tap.on_up(10), TapResult::Drag);
    }

    #[test]
    fn new_press_resets_moved() {
        let mut tap = state();
        tap.on_down(Point::new(0.0, 0.0), 0);
        tap.on_move(Point::new(50.0, 0.0));
        tap.on_up(10);
        assert!(tap.has_moved());

        tap.on_down(Point::new(0.0, 0.0), 20);
        assert!(!tap.has_moved());
        assert_eq!(tap.elapsed(70), Some(50));
    }

    #[test]
    fn custom_thresholds() {
        let mut tap = TapState::new(TapConfig {
            slop: 1.0,
            max_duration: 1_000,
        });
        tap.on_down(Point::new(0.0, 0.0), 0);
        assert!(tap.on_move(Point::new(1.5, 0.0)));
        tap.on_down(Point::new(0.0, 0.0), 0);
        assert_eq!(tap.on_up(900), TapResult::Tap);
    }
}
