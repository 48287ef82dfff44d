// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Millis;

/// A repeating tick with a fixed period.
///
/// Ticks are reported through [`Interval::poll`]. A host that polls late
/// observes a single tick; missed periods are coalesced rather than replayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    period: Millis,
    next: Option<Millis>,
}

impl Interval {
    /// Create a stopped interval. A zero period is treated as one millisecond.
    #[must_use]
    pub fn new(period: Millis) -> Self {
        Self {
            period: period.max(1),
            next: None,
        }
    }

    /// The tick period.
    #[must_use]
    pub fn period(&self) -> Millis {
        self.period
    }

    /// Arm the interval so that the first tick is due one period after `now`.
    ///
    /// Restarting a running interval re-arms it from `now`.
    pub fn start(&mut self, now: Millis) {
        self.next = Some(now.saturating_add(self.period));
    }

    /// Stop ticking.
    pub fn stop(&mut self) {
        self.next = None;
    }

    /// Returns `true` while armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// The next tick deadline, if armed.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.next
    }

    /// Returns `true` if a tick is due at `now`, and re-arms past `now`.
    pub fn poll(&mut self, now: Millis) -> bool {
        let Some(next) = self.next else {
            return false;
        };
        if now < next {
            return false;
        }
        let behind = (now - next) / self.period;
        self.next = Some(next.saturating_add((behind + 1).saturating_mul(self.period)));
        true
    }
}
