// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Timing: host-agnostic timer primitives for UI state machines.
//!
//! The component crates in this workspace never call a platform timer
//! directly. Instead they record *deadlines* on an explicit millisecond clock
//! and let the host poll them. This keeps every state machine testable
//! without a browser: tests simply pass increasing `now` values.
//!
//! - [`TimerQueue`]: keyed one-shot deadlines. Scheduling a key that is
//!   already pending overwrites it.
//! - [`Interval`]: a repeating tick that can be stopped and re-armed.
//! - [`Debounce`]: a trailing-edge debounce whose deadline moves on every
//!   trigger.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_timing::TimerQueue;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq)]
//! enum Timer {
//!     Release,
//!     Swap,
//! }
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule(Timer::Swap, 400);
//! timers.schedule(Timer::Release, 800);
//! assert_eq!(timers.next_deadline(), Some(400));
//!
//! // Nothing is due yet.
//! assert!(timers.poll(100).is_empty());
//!
//! // Both fire, in deadline order.
//! assert_eq!(timers.poll(1_000).as_slice(), &[Timer::Swap, Timer::Release]);
//! assert!(timers.is_empty());
//! ```
//!
//! ## Host integration
//!
//! A host keeps one platform timer armed at the earliest
//! [`TimerQueue::next_deadline`] across its components and calls `poll` when
//! it fires. Hosts that can observe real animation completion may cancel a
//! deadline early instead of waiting for it.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod debounce;
mod interval;
mod queue;

pub use debounce::Debounce;
pub use interval::Interval;
pub use queue::TimerQueue;

/// Milliseconds on a host-chosen monotonic clock.
///
/// Browsers typically feed `performance.now()` or `Date.now()` truncated to
/// whole milliseconds; only differences between values are meaningful.
pub type Millis = u64;
