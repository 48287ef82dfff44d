// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use vitrine_timing::{Interval, Millis};

use crate::{Carousel, CarouselInput, SlideChange};

/// Handle to a carousel owned by a [`CarouselGroup`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarouselId(usize);

impl CarouselId {
    /// Position of the carousel in insertion order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Carousels that auto-advance together on one shared timer.
///
/// Pointer or touch focus on any member pauses the shared timer for every
/// member; leaving re-arms it a full period from the moment focus was lost.
///
/// ```
/// use vitrine_carousel::{Carousel, CarouselConfig, CarouselGroup, CarouselInput};
///
/// let config = CarouselConfig::default();
/// let mut group = CarouselGroup::new(config.auto_advance);
/// let a = group.insert(Carousel::new(3, config).unwrap());
/// let b = group.insert(Carousel::new(2, config).unwrap());
/// group.start(0);
///
/// let changes = group.poll(6_000);
/// assert_eq!(changes.len(), 2);
///
/// // Hovering `a` pauses both.
/// group.handle(a, CarouselInput::PointerEnter, 7_000);
/// assert!(group.poll(12_000).is_empty());
/// # let _ = b;
/// ```
#[derive(Clone, Debug)]
pub struct CarouselGroup {
    carousels: Vec<Carousel>,
    ticker: Interval,
    running: bool,
    paused: bool,
}

impl CarouselGroup {
    /// Create an empty, stopped group that advances every `period` milliseconds.
    #[must_use]
    pub fn new(period: Millis) -> Self {
        Self {
            carousels: Vec::new(),
            ticker: Interval::new(period),
            running: false,
            paused: false,
        }
    }

    /// Add a carousel to the group.
    pub fn insert(&mut self, carousel: Carousel) -> CarouselId {
        self.carousels.push(carousel);
        CarouselId(self.carousels.len() - 1)
    }

    /// Number of carousels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    /// Returns `true` if the group has no carousels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    /// Borrow a carousel.
    #[must_use]
    pub fn get(&self, id: CarouselId) -> Option<&Carousel> {
        self.carousels.get(id.0)
    }

    /// Mutably borrow a carousel.
    pub fn get_mut(&mut self, id: CarouselId) -> Option<&mut Carousel> {
        self.carousels.get_mut(id.0)
    }

    /// Start auto-advancing; the first tick is one period after `now`.
    pub fn start(&mut self, now: Millis) {
        self.running = true;
        self.paused = false;
        self.ticker.start(now);
    }

    /// Stop auto-advancing. Focus changes do not restart a stopped group.
    pub fn stop(&mut self) {
        self.running = false;
        self.paused = false;
        self.ticker.stop();
    }

    /// Returns `true` while the shared timer is armed.
    #[must_use]
    pub fn is_advancing(&self) -> bool {
        self.ticker.is_running()
    }

    /// Pause the shared timer because a member gained focus.
    pub fn pause(&mut self) {
        if self.running {
            self.paused = true;
            self.ticker.stop();
        }
    }

    /// Resume the shared timer because a member lost focus.
    pub fn resume(&mut self, now: Millis) {
        if self.running && self.paused {
            self.paused = false;
            self.ticker.start(now);
        }
    }

    /// Dispatch an input event to one member.
    ///
    /// Pointer enter/leave and touch start/end also pause and resume the
    /// shared timer.
    pub fn handle(
        &mut self,
        id: CarouselId,
        input: CarouselInput,
        now: Millis,
    ) -> Option<SlideChange> {
        match input {
            CarouselInput::PointerEnter | CarouselInput::TouchStart { .. } => self.pause(),
            CarouselInput::PointerLeave | CarouselInput::TouchEnd { .. } => self.resume(now),
            _ => {}
        }
        self.carousels.get_mut(id.0)?.handle(input, now)
    }

    /// Release expired transition locks and run the shared timer.
    ///
    /// Returns the slide changes produced by an auto-advance tick. A member
    /// still mid-transition skips that tick.
    pub fn poll(&mut self, now: Millis) -> Vec<(CarouselId, SlideChange)> {
        for carousel in &mut self.carousels {
            carousel.poll(now);
        }
        if !self.ticker.poll(now) {
            return Vec::new();
        }
        self.carousels
            .iter_mut()
            .enumerate()
            .filter_map(|(i, c)| c.next(now).map(|change| (CarouselId(i), change)))
            .collect()
    }

    /// Earliest deadline across the shared timer and every member.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.carousels
            .iter()
            .filter_map(Carousel::next_deadline)
            .chain(self.ticker.next_deadline())
            .min()
    }
}
