// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use vitrine_timing::{Millis, TimerQueue};

/// Handle to a toast created by [`Toasts::show`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Raw value, unique for the lifetime of the owning [`Toasts`].
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A live toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Handle.
    pub id: ToastId,
    /// Text shown to the user.
    pub message: String,
    /// When the toast is removed.
    pub expires_at: Millis,
}

/// Short-lived notification messages.
#[derive(Clone, Debug)]
pub struct Toasts {
    duration: Millis,
    live: Vec<Toast>,
    timers: TimerQueue<ToastId>,
    next_id: u64,
}

impl Toasts {
    /// Create an empty list whose toasts last `duration` milliseconds.
    #[must_use]
    pub fn new(duration: Millis) -> Self {
        Self {
            duration,
            live: Vec::new(),
            timers: TimerQueue::new(),
            next_id: 0,
        }
    }

    /// Show `message` from `now`. Toasts stack; each expires on its own.
    pub fn show(&mut self, message: impl Into<String>, now: Millis) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let expires_at = now.saturating_add(self.duration);
        self.timers.schedule(id, expires_at);
        self.live.push(Toast {
            id,
            message: message.into(),
            expires_at,
        });
        id
    }

    /// Live toasts, oldest first.
    #[must_use]
    pub fn live(&self) -> &[Toast] {
        &self.live
    }

    /// Remove expired toasts and return their ids for the host to remove.
    pub fn poll(&mut self, now: Millis) -> Vec<ToastId> {
        let expired = self.timers.poll(now);
        self.live.retain(|toast| !expired.contains(&toast.id));
        expired
    }

    /// Deadline at which [`Toasts::poll`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }
}
