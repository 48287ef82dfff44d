// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One `setTimeout` per component, re-armed at its next deadline.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use vitrine_carousel::{CarouselGroup, CarouselId, SlideChange};
use vitrine_modal::{DocumentModal, ModalEffect};
use vitrine_nav::{NavHighlighter, NavUpdate};
use vitrine_notify::{Highlights, ToastId, Toasts};
use vitrine_tabs::{TabSwap, TabSwitcher};
use vitrine_timing::Millis;

use crate::dom;

/// A component with deadline-driven work.
pub(crate) trait Timed {
    /// What the component produces when its timers fire.
    type Output;

    fn next_deadline(&self) -> Option<Millis>;

    fn poll(&mut self, now: Millis) -> Self::Output;
}

impl Timed for CarouselGroup {
    type Output = Vec<(CarouselId, SlideChange)>;

    fn next_deadline(&self) -> Option<Millis> {
        Self::next_deadline(self)
    }

    fn poll(&mut self, now: Millis) -> Self::Output {
        Self::poll(self, now)
    }
}

impl Timed for TabSwitcher<String> {
    type Output = Option<TabSwap>;

    fn next_deadline(&self) -> Option<Millis> {
        Self::next_deadline(self)
    }

    fn poll(&mut self, now: Millis) -> Self::Output {
        Self::poll(self, now)
    }
}

impl Timed for DocumentModal {
    type Output = Vec<ModalEffect>;

    fn next_deadline(&self) -> Option<Millis> {
        Self::next_deadline(self)
    }

    fn poll(&mut self, now: Millis) -> Self::Output {
        Self::poll(self, now)
    }
}

impl Timed for NavHighlighter<String> {
    type Output = Option<NavUpdate>;

    fn next_deadline(&self) -> Option<Millis> {
        Self::next_deadline(self)
    }

    fn poll(&mut self, now: Millis) -> Self::Output {
        Self::poll(self, now)
    }
}

/// Reference highlights and copy toasts, which share one timer.
#[derive(Debug)]
pub(crate) struct Feedback {
    pub(crate) highlights: Highlights<usize>,
    pub(crate) toasts: Toasts,
}

impl Timed for Feedback {
    type Output = (Vec<usize>, Vec<ToastId>);

    fn next_deadline(&self) -> Option<Millis> {
        [self.highlights.next_deadline(), self.toasts.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    fn poll(&mut self, now: Millis) -> Self::Output {
        (self.highlights.poll(now), self.toasts.poll(now))
    }
}

/// Shared handle to a component plus the timeout that services it.
///
/// State is only borrowed for the duration of a call into the component;
/// effects are applied to the DOM afterwards, so DOM events fired while
/// applying them can re-enter the driver.
pub(crate) struct Driver<T: Timed> {
    state: Rc<RefCell<T>>,
    timeout: Rc<RefCell<Option<Timeout>>>,
    on_poll: Rc<dyn Fn(T::Output)>,
}

impl<T: Timed> Clone for Driver<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            timeout: Rc::clone(&self.timeout),
            on_poll: Rc::clone(&self.on_poll),
        }
    }
}

impl<T: Timed + 'static> Driver<T> {
    /// Wrap `state`; `on_poll` applies whatever its timers produce.
    pub(crate) fn new(state: T, on_poll: impl Fn(T::Output) + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            timeout: Rc::new(RefCell::new(None)),
            on_poll: Rc::new(on_poll),
        }
    }

    /// Run `f` against the component at the current time, then re-arm.
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut T, Millis) -> R) -> R {
        let result = f(&mut self.state.borrow_mut(), dom::now());
        self.rearm();
        result
    }

    /// Read the component without touching its timers.
    pub(crate) fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Replace the pending timeout with one at the component's next deadline.
    pub(crate) fn rearm(&self) {
        let deadline = self.state.borrow().next_deadline();
        let timeout = deadline.map(|deadline| {
            let delay = u32::try_from(deadline.saturating_sub(dom::now())).unwrap_or(u32::MAX);
            let driver = self.clone();
            Timeout::new(delay, move || driver.fire())
        });
        // Dropping the old `Timeout` cancels it.
        *self.timeout.borrow_mut() = timeout;
    }

    fn fire(&self) {
        let output = self.state.borrow_mut().poll(dom::now());
        (self.on_poll)(output);
        self.rearm();
    }
}
