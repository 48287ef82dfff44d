// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use vitrine_timing::{Millis, TimerQueue};

/// Temporarily highlighted elements, keyed by a host-chosen handle.
///
/// Flashing an element that is already highlighted restarts its timer, so
/// the highlight lasts `duration` from the latest flash.
///
/// ```
/// use vitrine_notify::Highlights;
///
/// let mut highlights = Highlights::new(2_000);
/// highlights.flash(7_u32, 100);
/// assert!(highlights.is_highlighted(7));
/// assert!(highlights.poll(2_099).is_empty());
/// assert_eq!(highlights.poll(2_100), vec![7]);
/// ```
#[derive(Clone, Debug)]
pub struct Highlights<K> {
    duration: Millis,
    timers: TimerQueue<K>,
}

impl<K: Copy + Eq> Highlights<K> {
    /// Create an empty set whose highlights last `duration` milliseconds.
    #[must_use]
    pub fn new(duration: Millis) -> Self {
        Self {
            duration,
            timers: TimerQueue::new(),
        }
    }

    /// Highlight duration.
    #[must_use]
    pub fn duration(&self) -> Millis {
        self.duration
    }

    /// Highlight `key` starting at `now`.
    ///
    /// Returns `true` if the host should apply the highlight; `false` if it
    /// was already applied and only the timer moved.
    pub fn flash(&mut self, key: K, now: Millis) -> bool {
        self.timers
            .schedule(key, now.saturating_add(self.duration))
            .is_none()
    }

    /// Returns `true` while `key` is highlighted.
    #[must_use]
    pub fn is_highlighted(&self, key: K) -> bool {
        self.timers.is_pending(key)
    }

    /// Keys whose highlight has expired; the host clears them.
    pub fn poll(&mut self, now: Millis) -> Vec<K> {
        self.timers.poll(now)
    }

    /// Deadline at which [`Highlights::poll`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflash_extends() {
        let mut h = Highlights::new(2_000);
        assert!(h.flash('a', 0));
        assert!(!h.flash('a', 1_500));
        assert!(h.poll(2_000).is_empty());
        assert_eq!(h.poll(3_500).as_slice(), &['a']);
        assert!(!h.is_highlighted('a'));
    }

    #[test]
    fn independent_keys_expire_in_order() {
        let mut h = Highlights::new(100);
        h.flash(2_u8, 50);
        h.flash(1_u8, 0);
        assert_eq!(h.next_deadline(), Some(100));
        assert_eq!(h.poll(1_000).as_slice(), &[1, 2]);
    }
}
