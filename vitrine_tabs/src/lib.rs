// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Tabs: a headless tab switcher with directional slide transitions.
//!
//! Switching tabs happens in two phases:
//!
//! 1. [`TabSwitcher::select`] returns a [`TabTransition`] naming the outgoing
//!    and incoming panels and the animation classes to put on each.
//! 2. After [`TabsConfig::swap_delay`] (or as soon as the host reports the
//!    animation finished), [`TabSwitcher::poll`] returns a [`TabSwap`]: the
//!    active tab changes and only the new panel stays displayed.
//!
//! Selecting a tab while a transition is still pending replaces it; the
//! swap delay restarts from the new selection.
//!
//! ```rust
//! use vitrine_tabs::{SlideDirection, TabSwitcher, TabsConfig};
//!
//! let mut tabs = TabSwitcher::new(vec!["day-1", "day-2", "day-3"], TabsConfig::default()).unwrap();
//!
//! let transition = tabs.select(&"day-3", 0).unwrap();
//! assert_eq!(transition.direction, SlideDirection::Forward);
//! assert_eq!(transition.direction.outgoing_class(), "slide-out-left");
//! assert_eq!(transition.direction.incoming_class(), "slide-in-right");
//!
//! // Still animating; the old tab is active.
//! assert_eq!(tabs.poll(399), None);
//! assert_eq!(tabs.active_id(), &"day-1");
//!
//! let swap = tabs.poll(400).unwrap();
//! assert_eq!((swap.previous, swap.active), (0, 2));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use vitrine_gesture::swipe::{SwipeConfig, SwipeDirection, SwipeTracker};
use vitrine_timing::{Millis, TimerQueue};

/// Animation classes every panel may carry during a transition.
pub const ANIMATION_CLASSES: [&str; 4] = [
    "slide-in-left",
    "slide-in-right",
    "slide-out-left",
    "slide-out-right",
];

/// Timing and swipe thresholds for a [`TabSwitcher`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabsConfig {
    /// Delay between starting the slide animation and swapping panels.
    pub swap_delay: Millis,
    /// Swipe recognition on the tab bar and content area.
    pub swipe: SwipeConfig,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            swap_delay: 400,
            swipe: SwipeConfig::new(40.0),
        }
    }
}

/// Which way panels slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    /// Toward a later tab: content slides out to the left.
    Forward,
    /// Toward an earlier tab: content slides out to the right.
    Backward,
}

impl SlideDirection {
    /// Direction of travel from tab `from` to tab `to`.
    #[must_use]
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    /// Class for the panel being left.
    #[must_use]
    pub fn outgoing_class(self) -> &'static str {
        match self {
            Self::Forward => "slide-out-left",
            Self::Backward => "slide-out-right",
        }
    }

    /// Class for the panel being entered.
    #[must_use]
    pub fn incoming_class(self) -> &'static str {
        match self {
            Self::Forward => "slide-in-right",
            Self::Backward => "slide-in-left",
        }
    }
}

/// Phase one of a tab switch: start the slide animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabTransition {
    /// Index of the panel sliding out (the active tab).
    pub from: usize,
    /// Index of the panel sliding in.
    pub to: usize,
    /// Slide direction.
    pub direction: SlideDirection,
}

/// Phase two of a tab switch: make `active` the only visible panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabSwap {
    /// Previously active tab.
    pub previous: usize,
    /// Newly active tab.
    pub active: usize,
}

/// Input events understood by a [`TabSwitcher`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TabsInput<Id> {
    /// A tab link was clicked.
    Select(Id),
    /// A touch started on the tab bar or content area.
    TouchStart {
        /// Horizontal screen coordinate.
        x: f64,
    },
    /// A touch ended on the tab bar or content area.
    TouchEnd {
        /// Horizontal screen coordinate.
        x: f64,
    },
    /// The slide animation finished.
    AnimationEnd,
}

/// Result of [`TabSwitcher::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabsUpdate {
    /// Start a slide animation.
    Animate(TabTransition),
    /// Swap the active panel.
    Swap(TabSwap),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timer {
    Swap,
}

/// Tabs identified by `Id`, with exactly one active.
#[derive(Clone, Debug)]
pub struct TabSwitcher<Id> {
    ids: Vec<Id>,
    active: usize,
    pending: Option<TabTransition>,
    config: TabsConfig,
    timers: TimerQueue<Timer>,
    swipe: SwipeTracker,
}

impl<Id: PartialEq> TabSwitcher<Id> {
    /// Create a switcher with the first tab active. Returns `None` if `ids` is empty.
    #[must_use]
    pub fn new(ids: Vec<Id>, config: TabsConfig) -> Option<Self> {
        Self::with_active(ids, 0, config)
    }

    /// Create a switcher with tab `active` initially active.
    ///
    /// Returns `None` if `ids` is empty or `active` is out of range.
    #[must_use]
    pub fn with_active(ids: Vec<Id>, active: usize, config: TabsConfig) -> Option<Self> {
        if active >= ids.len() {
            return None;
        }
        Some(Self {
            ids,
            active,
            pending: None,
            config,
            timers: TimerQueue::new(),
            swipe: SwipeTracker::default(),
        })
    }

    /// Number of tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always `false`: empty switchers cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Tab ids in display order.
    #[must_use]
    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    /// Index of the active tab.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Id of the active tab.
    #[must_use]
    pub fn active_id(&self) -> &Id {
        &self.ids[self.active]
    }

    /// Position of `id`, if known.
    #[must_use]
    pub fn index_of(&self, id: &Id) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    /// The transition awaiting its swap, if any.
    #[must_use]
    pub fn pending(&self) -> Option<TabTransition> {
        self.pending
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &TabsConfig {
        &self.config
    }

    /// Select the tab with `id`. The active tab and unknown ids are ignored.
    pub fn select(&mut self, id: &Id, now: Millis) -> Option<TabTransition> {
        let index = self.index_of(id)?;
        self.select_index(index, now)
    }

    /// Select the tab at `index`. The active tab and out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize, now: Millis) -> Option<TabTransition> {
        if index >= self.ids.len() || index == self.active {
            return None;
        }
        let transition = TabTransition {
            from: self.active,
            to: index,
            direction: SlideDirection::between(self.active, index),
        };
        self.pending = Some(transition);
        self.timers
            .schedule(Timer::Swap, now.saturating_add(self.config.swap_delay));
        Some(transition)
    }

    /// Record where a touch started.
    pub fn swipe_start(&mut self, x: f64, now: Millis) {
        self.swipe.begin(x, now);
    }

    /// Finish a touch; a recognized swipe moves one tab, stopping at the ends.
    pub fn swipe_end(&mut self, x: f64, now: Millis) -> Option<TabTransition> {
        let target = match self.swipe.finish(x, now, &self.config.swipe)? {
            SwipeDirection::Left => self.active.checked_add(1)?,
            SwipeDirection::Right => self.active.checked_sub(1)?,
        };
        self.select_index(target, now)
    }

    /// Swap immediately because the host saw the slide animation finish.
    pub fn animation_end(&mut self) -> Option<TabSwap> {
        self.timers.cancel(Timer::Swap);
        self.swap()
    }

    /// Swap panels if the swap delay has elapsed.
    pub fn poll(&mut self, now: Millis) -> Option<TabSwap> {
        if self.timers.poll(now).contains(&Timer::Swap) {
            self.swap()
        } else {
            None
        }
    }

    /// Deadline at which [`TabSwitcher::poll`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    /// Dispatch an input event.
    pub fn handle(&mut self, input: TabsInput<Id>, now: Millis) -> Option<TabsUpdate> {
        match input {
            TabsInput::Select(id) => self.select(&id, now).map(TabsUpdate::Animate),
            TabsInput::TouchStart { x } => {
                self.swipe_start(x, now);
                None
            }
            TabsInput::TouchEnd { x } => self.swipe_end(x, now).map(TabsUpdate::Animate),
            TabsInput::AnimationEnd => self.animation_end().map(TabsUpdate::Swap),
        }
    }

    /// Snapshot of the switcher state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TabsDebugInfo {
        TabsDebugInfo {
            active: self.active,
            len: self.ids.len(),
            pending: self.pending,
            swap_at: self.timers.deadline(Timer::Swap),
        }
    }

    fn swap(&mut self) -> Option<TabSwap> {
        let transition = self.pending.take()?;
        self.active = transition.to;
        Some(TabSwap {
            previous: transition.from,
            active: transition.to,
        })
    }
}

/// Debug snapshot of a [`TabSwitcher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabsDebugInfo {
    /// Active tab.
    pub active: usize,
    /// Tab count.
    pub len: usize,
    /// Transition awaiting its swap.
    pub pending: Option<TabTransition>,
    /// When the pending swap falls due.
    pub swap_at: Option<Millis>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn tabs(n: usize) -> TabSwitcher<usize> {
        TabSwitcher::new((0..n).collect(), TabsConfig::default()).unwrap()
    }

    #[test]
    fn empty_or_bad_initial_is_rejected() {
        assert!(TabSwitcher::<u8>::new(vec![], TabsConfig::default()).is_none());
        assert!(TabSwitcher::with_active(vec![1, 2], 2, TabsConfig::default()).is_none());
        let t = TabSwitcher::with_active(vec![1, 2], 1, TabsConfig::default()).unwrap();
        assert_eq!(t.active_id(), &2);
    }

    #[test]
    fn selecting_active_or_unknown_is_noop() {
        let mut t = tabs(3);
        assert_eq!(t.select(&0, 0), None);
        assert_eq!(t.select(&7, 0), None);
        assert_eq!(t.next_deadline(), None);
    }

    #[test]
    fn direction_follows_relative_index() {
        let mut t = TabSwitcher::with_active(vec!['a', 'b', 'c'], 1, TabsConfig::default()).unwrap();
        assert_eq!(t.select(&'c', 0).unwrap().direction, SlideDirection::Forward);
        assert_eq!(t.select(&'a', 0).unwrap().direction, SlideDirection::Backward);
        assert_eq!(SlideDirection::Backward.outgoing_class(), "slide-out-right");
        assert_eq!(SlideDirection::Backward.incoming_class(), "slide-in-left");
    }

    #[test]
    fn swap_waits_for_delay() {
        let mut t = tabs(3);
        t.select(&1, 100);
        assert_eq!(t.poll(499), None);
        assert_eq!(t.active(), 0);
        assert_eq!(t.poll(500), Some(TabSwap { previous: 0, active: 1 }));
        assert_eq!(t.active(), 1);
        assert_eq!(t.poll(10_000), None);
    }

    #[test]
    fn animation_end_swaps_early() {
        let mut t = tabs(2);
        t.select(&1, 0);
        assert_eq!(
            t.handle(TabsInput::AnimationEnd, 50),
            Some(TabsUpdate::Swap(TabSwap { previous: 0, active: 1 }))
        );
        assert_eq!(t.next_deadline(), None);
        assert_eq!(t.animation_end(), None);
    }

    #[test]
    fn reselect_replaces_pending_and_restarts_delay() {
        let mut t = tabs(4);
        t.select(&1, 0);
        let second = t.select(&3, 300).unwrap();
        assert_eq!(second.from, 0);
        assert_eq!(t.poll(400), None);
        assert_eq!(t.poll(700), Some(TabSwap { previous: 0, active: 3 }));
    }

    #[test]
    fn swipes_clamp_at_ends() {
        let mut t = tabs(2);
        t.swipe_start(100.0, 0);
        assert_eq!(t.swipe_end(200.0, 5_000), None);

        t.swipe_start(200.0, 0);
        assert_eq!(t.swipe_end(159.0, 10).map(|tr| tr.to), Some(1));
        t.animation_end();

        t.swipe_start(200.0, 0);
        assert_eq!(t.swipe_end(100.0, 10), None);

        // Exactly 40 px is not a swipe.
        t.swipe_start(100.0, 0);
        assert_eq!(t.swipe_end(140.0, 10), None);
        t.swipe_start(100.0, 0);
        assert_eq!(t.swipe_end(141.0, 10).map(|tr| tr.to), Some(0));
    }

    #[test]
    fn debug_info_reports_pending() {
        let mut t = tabs(3);
        t.select(&2, 10);
        let info = t.debug_info();
        assert_eq!(info.active, 0);
        assert_eq!(info.pending.map(|p| p.to), Some(2));
        assert_eq!(info.swap_at, Some(410));
    }
}
