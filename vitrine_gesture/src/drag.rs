// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: incremental deltas and an origin carried along with the pointer.
//!
//! A drag usually moves *something* that already has a position, such as a
//! panned image. [`DragState::start`] records that origin alongside the
//! pointer position, so [`DragState::dragged_origin`] can report where the
//! thing should be now without the caller doing the bookkeeping.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use vitrine_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // The image is already panned by (30, 0) when the pointer goes down.
//! drag.start(Point::new(100.0, 100.0), Vec2::new(30.0, 0.0));
//!
//! assert_eq!(drag.update(Point::new(110.0, 95.0)), Some(Vec2::new(10.0, -5.0)));
//! assert_eq!(drag.dragged_origin(Point::new(110.0, 95.0)), Some(Vec2::new(40.0, -5.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks pointer positions while a drag is active.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
    origin: Vec2,
}

impl DragState {
    /// Begin a drag at `pos`, carrying `origin` (the dragged value at the start).
    pub fn start(&mut self, pos: Point, origin: Vec2) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.origin = origin;
    }

    /// Record a new pointer position, returning the delta since the last one.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// Offset of `pos` from the drag start.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| pos - start)
    }

    /// Where the dragged value is when the pointer sits at `pos`.
    #[must_use]
    pub fn dragged_origin(&self, pos: Point) -> Option<Vec2> {
        self.total_offset(pos).map(|offset| self.origin + offset)
    }

    /// Last recorded pointer position.
    #[must_use]
    pub fn last_pos(&self) -> Option<Point> {
        self.last_pos
    }

    /// End the drag and clear all state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_drag_reports_nothing() {
        let mut drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(Point::new(1.0, 1.0)), None);
        assert_eq!(drag.total_offset(Point::new(1.0, 1.0)), None);
        assert_eq!(drag.dragged_origin(Point::new(1.0, 1.0)), None);
        assert_eq!(drag.last_pos(), None);
    }

    #[test]
    fn incremental_deltas_follow_the_pointer() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), Vec2::ZERO);

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.update(Point::new(2.0, 7.0)), Some(Vec2::new(-6.0, 0.0)));
        assert_eq!(drag.total_offset(Point::new(2.0, 7.0)), Some(Vec2::new(2.0, 7.0)));
    }

    #[test]
    fn dragged_origin_adds_total_offset() {
        let mut drag = DragState::default();
        drag.start(Point::new(50.0, 50.0), Vec2::new(-20.0, 10.0));
        drag.update(Point::new(60.0, 40.0));
        assert_eq!(
            drag.dragged_origin(Point::new(70.0, 45.0)),
            Some(Vec2::new(0.0, 5.0))
        );
    }

    #[test]
    fn restart_replaces_previous_drag() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), Vec2::ZERO);
        drag.update(Point::new(10.0, 10.0));

        drag.start(Point::new(50.0, 60.0), Vec2::new(1.0, 1.0));
        assert_eq!(drag.last_pos(), Some(Point::new(50.0, 60.0)));
        assert_eq!(drag.total_offset(Point::new(55.0, 65.0)), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn end_resets_everything() {
        let mut drag = DragState::default();
        drag.start(Point::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        drag.end();
        assert_eq!(drag, DragState::default());
    }
}
