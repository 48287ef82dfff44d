// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vitrine_gesture::key::Key;
use vitrine_gesture::swipe::{SwipeConfig, SwipeDirection, SwipeTracker};
use vitrine_timing::{Millis, TimerQueue};

/// Timing and gesture thresholds for a carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Fallback duration of the transition lock, matching the CSS transition.
    pub transition: Millis,
    /// Swipe recognition for touch input.
    pub swipe: SwipeConfig,
    /// Period of the shared auto-advance timer used by [`crate::CarouselGroup`].
    pub auto_advance: Millis,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition: 800,
            swipe: SwipeConfig::new(50.0).with_max_duration(300),
            auto_advance: 6_000,
        }
    }
}

/// A slide change the host should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideChange {
    /// The newly active slide (and indicator).
    pub active: usize,
    /// The slide just before `active`, modulo the slide count.
    pub previous: usize,
}

/// Input events understood by a carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselInput {
    /// The "next" control was activated.
    Next,
    /// The "previous" control was activated.
    Prev,
    /// An indicator was activated.
    JumpTo(usize),
    /// A key was pressed while the carousel had focus.
    Key(Key),
    /// A touch started at the given horizontal screen coordinate.
    TouchStart {
        /// Horizontal coordinate.
        x: f64,
    },
    /// A touch ended at the given horizontal screen coordinate.
    TouchEnd {
        /// Horizontal coordinate.
        x: f64,
    },
    /// The pointer entered the carousel. Only meaningful to [`crate::CarouselGroup`].
    PointerEnter,
    /// The pointer left the carousel. Only meaningful to [`crate::CarouselGroup`].
    PointerLeave,
    /// The slide animation finished.
    TransitionEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timer {
    ReleaseLock,
}

/// A carousel over `len` slides.
#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
    config: CarouselConfig,
    timers: TimerQueue<Timer>,
    swipe: SwipeTracker,
}

impl Carousel {
    /// Create a carousel showing slide 0.
    ///
    /// Returns `None` for an empty carousel; hosts skip those.
    #[must_use]
    pub fn new(len: usize, config: CarouselConfig) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            len,
            index: 0,
            config,
            timers: TimerQueue::new(),
            swipe: SwipeTracker::default(),
        })
    }

    /// Index of the active slide.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: empty carousels cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Returns `true` while the transition lock is held at `now`.
    #[must_use]
    pub fn is_transitioning(&self, now: Millis) -> bool {
        self.timers
            .deadline(Timer::ReleaseLock)
            .is_some_and(|deadline| now < deadline)
    }

    /// Advance to the next slide, wrapping after the last.
    pub fn next(&mut self, now: Millis) -> Option<SlideChange> {
        let target = (self.index + 1) % self.len;
        self.go_to(target, now)
    }

    /// Go back to the previous slide, wrapping before the first.
    pub fn prev(&mut self, now: Millis) -> Option<SlideChange> {
        let target = (self.index + self.len - 1) % self.len;
        self.go_to(target, now)
    }

    /// Jump to `index`. Out-of-range indices and the current index are ignored.
    pub fn jump_to(&mut self, index: usize, now: Millis) -> Option<SlideChange> {
        if index >= self.len || index == self.index {
            return None;
        }
        self.go_to(index, now)
    }

    /// Release the transition lock because the animation reported completion.
    pub fn transition_end(&mut self) {
        self.timers.cancel(Timer::ReleaseLock);
    }

    /// Dispatch an input event.
    pub fn handle(&mut self, input: CarouselInput, now: Millis) -> Option<SlideChange> {
        match input {
            CarouselInput::Next | CarouselInput::Key(Key::ArrowRight) => self.next(now),
            CarouselInput::Prev | CarouselInput::Key(Key::ArrowLeft) => self.prev(now),
            CarouselInput::JumpTo(index) => self.jump_to(index, now),
            CarouselInput::TouchStart { x } => {
                self.swipe.begin(x, now);
                None
            }
            CarouselInput::TouchEnd { x } => {
                match self.swipe.finish(x, now, &self.config.swipe)? {
                    SwipeDirection::Left => self.next(now),
                    SwipeDirection::Right => self.prev(now),
                }
            }
            CarouselInput::TransitionEnd => {
                self.transition_end();
                None
            }
            CarouselInput::Key(_) | CarouselInput::PointerEnter | CarouselInput::PointerLeave => {
                None
            }
        }
    }

    /// Release the transition lock if its fallback deadline has passed.
    ///
    /// Returns `true` if the lock was released.
    pub fn poll(&mut self, now: Millis) -> bool {
        !self.timers.poll(now).is_empty()
    }

    /// Deadline at which [`Carousel::poll`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    /// Snapshot of the carousel state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self, now: Millis) -> CarouselDebugInfo {
        CarouselDebugInfo {
            index: self.index,
            len: self.len,
            transitioning: self.is_transitioning(now),
            lock_release: self.timers.deadline(Timer::ReleaseLock),
        }
    }

    fn go_to(&mut self, target: usize, now: Millis) -> Option<SlideChange> {
        self.poll(now);
        if self.timers.is_pending(Timer::ReleaseLock) {
            return None;
        }
        self.index = target;
        self.timers
            .schedule(Timer::ReleaseLock, now.saturating_add(self.config.transition));
        Some(SlideChange {
            active: target,
            previous: (target + self.len - 1) % self.len,
        })
    }
}

/// Debug snapshot of a [`Carousel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselDebugInfo {
    /// Active slide.
    pub index: usize,
    /// Slide count.
    pub len: usize,
    /// Whether the transition lock is held.
    pub transitioning: bool,
    /// When the lock falls back to released, if held.
    pub lock_release: Option<Millis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(len, CarouselConfig::default()).unwrap()
    }

    #[test]
    fn empty_carousel_is_skipped() {
        assert!(Carousel::new(0, CarouselConfig::default()).is_none());
    }

    #[test]
    fn next_then_prev_restores_every_index() {
        for len in 1..6 {
            let mut c = carousel(len);
            let mut now = 0;
            for start in 0..len {
                while c.index() != start {
                    c.next(now);
                    now += 1_000;
                }
                c.next(now);
                now += 1_000;
                c.prev(now);
                now += 1_000;
                assert_eq!(c.index(), start, "len {len}, start {start}");
            }
        }
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut c = carousel(3);
        assert_eq!(c.prev(0).map(|s| s.active), Some(2));
        c.transition_end();
        assert_eq!(c.next(1).map(|s| s.active), Some(0));
    }

    #[test]
    fn previous_slide_is_modulo() {
        let mut c = carousel(4);
        assert_eq!(c.jump_to(3, 0), Some(SlideChange { active: 3, previous: 2 }));
        c.transition_end();
        assert_eq!(c.next(0), Some(SlideChange { active: 0, previous: 3 }));
    }

    #[test]
    fn lock_blocks_until_deadline() {
        let mut c = carousel(5);
        assert!(c.next(1_000).is_some());
        assert!(c.is_transitioning(1_000));
        assert_eq!(c.next(1_799), None);
        assert_eq!(c.prev(1_500), None);
        assert_eq!(c.jump_to(4, 1_500), None);
        assert_eq!(c.index(), 1);
        assert!(!c.is_transitioning(1_800));
        assert!(c.next(1_800).is_some());
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn transition_end_releases_early() {
        let mut c = carousel(5);
        c.next(0);
        c.handle(CarouselInput::TransitionEnd, 10);
        assert!(!c.is_transitioning(10));
        assert_eq!(c.next(20).map(|s| s.active), Some(2));
    }

    #[test]
    fn poll_reports_release() {
        let mut c = carousel(2);
        c.next(0);
        assert_eq!(c.next_deadline(), Some(800));
        assert!(!c.poll(799));
        assert!(c.poll(800));
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn jump_to_ignores_out_of_range_and_current() {
        let mut c = carousel(3);
        assert_eq!(c.jump_to(3, 0), None);
        assert_eq!(c.jump_to(0, 0), None);
        assert!(!c.is_transitioning(0));
        assert_eq!(c.handle(CarouselInput::JumpTo(2), 0).map(|s| s.active), Some(2));
    }

    #[test]
    fn arrow_keys_map_to_prev_and_next() {
        let mut c = carousel(3);
        assert_eq!(
            c.handle(CarouselInput::Key(Key::ArrowLeft), 0).map(|s| s.active),
            Some(2)
        );
        c.transition_end();
        assert_eq!(
            c.handle(CarouselInput::Key(Key::ArrowRight), 0).map(|s| s.active),
            Some(0)
        );
        c.transition_end();
        assert_eq!(c.handle(CarouselInput::Key(Key::Escape), 0), None);
    }

    #[test]
    fn quick_long_swipes_navigate() {
        let mut c = carousel(3);
        c.handle(CarouselInput::TouchStart { x: 300.0 }, 0);
        assert_eq!(
            c.handle(CarouselInput::TouchEnd { x: 240.0 }, 200).map(|s| s.active),
            Some(1)
        );

        c.handle(CarouselInput::TouchStart { x: 100.0 }, 2_000);
        assert_eq!(
            c.handle(CarouselInput::TouchEnd { x: 160.0 }, 2_100).map(|s| s.active),
            Some(0)
        );
    }

    #[test]
    fn slow_or_short_swipes_are_ignored() {
        let mut c = carousel(3);
        c.handle(CarouselInput::TouchStart { x: 300.0 }, 0);
        assert_eq!(c.handle(CarouselInput::TouchEnd { x: 100.0 }, 300), None);

        c.handle(CarouselInput::TouchStart { x: 300.0 }, 1_000);
        assert_eq!(c.handle(CarouselInput::TouchEnd { x: 250.0 }, 1_100), None);

        assert_eq!(c.handle(CarouselInput::TouchEnd { x: 0.0 }, 1_200), None);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn single_slide_carousel_stays_put() {
        let mut c = carousel(1);
        assert_eq!(c.next(0), Some(SlideChange { active: 0, previous: 0 }));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn debug_info_reports_lock() {
        let mut c = carousel(3);
        c.next(100);
        let info = c.debug_info(200);
        assert_eq!(info.index, 1);
        assert_eq!(info.len, 3);
        assert!(info.transitioning);
        assert_eq!(info.lock_release, Some(900));
    }
}
