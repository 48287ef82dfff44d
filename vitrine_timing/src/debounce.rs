// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Millis;

/// Trailing-edge debounce.
///
/// Every [`Debounce::trigger`] pushes the deadline out to `now + delay`;
/// [`Debounce::poll`] fires once after the triggers go quiet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay: Millis,
    deadline: Option<Millis>,
}

impl Debounce {
    /// Create an idle debounce with the given quiet period.
    #[must_use]
    pub fn new(delay: Millis) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record activity at `now`.
    pub fn trigger(&mut self, now: Millis) {
        self.deadline = Some(now.saturating_add(self.delay));
    }

    /// Pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.deadline
    }

    /// Returns `true` once when the quiet period has elapsed.
    pub fn poll(&mut self, now: Millis) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::Debounce;

    #[test]
    fn fires_after_quiet_period() {
        let mut d = Debounce::new(50);
        d.trigger(0);
        d.trigger(30);
        assert!(!d.poll(60));
        assert!(d.poll(80));
        assert!(!d.poll(200));
    }

    #[test]
    fn cancel_suppresses_fire() {
        let mut d = Debounce::new(50);
        d.trigger(0);
        d.cancel();
        assert!(!d.poll(100));
        assert_eq!(d.next_deadline(), None);
    }
}
