// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Table-of-contents highlighting for long report pages.
///
/// Unlike [`crate::NavHighlighter`], headings have no extent: the current
/// heading is simply the last one whose top has come within
/// [`TocTracker::offset`] pixels of the window's scroll position.
///
/// ```
/// use vitrine_nav::TocTracker;
///
/// let toc = TocTracker::new(vec![("intro", 0.0), ("methods", 900.0), ("results", 2_000.0)]);
/// assert_eq!(toc.current(0.0), Some(&"intro"));
/// assert_eq!(toc.current(699.0), Some(&"intro"));
/// assert_eq!(toc.current(700.0), Some(&"methods"));
/// ```
#[derive(Clone, Debug)]
pub struct TocTracker<Id> {
    headings: Vec<(Id, f64)>,
    offset: f64,
    current: Option<usize>,
}

impl<Id> TocTracker<Id> {
    /// Headings as `(id, offsetTop)` pairs in document order, with the default 200 px offset.
    #[must_use]
    pub fn new(headings: Vec<(Id, f64)>) -> Self {
        Self::with_offset(headings, 200.0)
    }

    /// Same as [`TocTracker::new`] with a custom activation offset.
    #[must_use]
    pub fn with_offset(headings: Vec<(Id, f64)>, offset: f64) -> Self {
        Self {
            headings,
            offset,
            current: None,
        }
    }

    /// Replace the measured headings. The last reported heading is kept, so
    /// [`TocTracker::update`] still reports only changes.
    pub fn set_headings(&mut self, headings: Vec<(Id, f64)>) {
        self.headings = headings;
    }

    /// Activation offset in pixels.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Index of the current heading at `scroll`.
    ///
    /// `None` until the first heading is reached.
    #[must_use]
    pub fn current_index(&self, scroll: f64) -> Option<usize> {
        self.headings
            .iter()
            .rposition(|(_, top)| scroll >= top - self.offset)
    }

    /// Id of the current heading at `scroll`.
    #[must_use]
    pub fn current(&self, scroll: f64) -> Option<&Id> {
        self.current_index(scroll).map(|i| &self.headings[i].0)
    }

    /// Recompute at `scroll`; returns the new current heading only when it changed.
    ///
    /// The outer `Option` is `None` when nothing changed; the inner one is
    /// `None` when no heading is current anymore.
    pub fn update(&mut self, scroll: f64) -> Option<Option<&Id>> {
        let index = self.current_index(scroll);
        if index == self.current {
            return None;
        }
        self.current = index;
        Some(index.map(|i| &self.headings[i].0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn nothing_current_above_first_heading() {
        let toc = TocTracker::new(vec![("a", 500.0), ("b", 900.0)]);
        assert_eq!(toc.current(299.0), None);
        assert_eq!(toc.current(300.0), Some(&"a"));
    }

    #[test]
    fn last_reached_heading_wins() {
        let toc = TocTracker::new(vec![("a", 0.0), ("b", 100.0), ("c", 150.0)]);
        // All three are within 200 px of the top.
        assert_eq!(toc.current(0.0), Some(&"c"));
    }

    #[test]
    fn update_reports_transitions() {
        let mut toc = TocTracker::with_offset(vec![("a", 100.0), ("b", 400.0)], 0.0);
        assert_eq!(toc.update(0.0), None);
        assert_eq!(toc.update(100.0), Some(Some(&"a")));
        assert_eq!(toc.update(300.0), None);
        assert_eq!(toc.update(400.0), Some(Some(&"b")));
        assert_eq!(toc.update(0.0), Some(None));
    }
}
