// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Gesture: small recognizers for pointer, touch and keyboard input.
//!
//! Each module handles one interaction pattern and keeps just enough state to
//! classify it:
//!
//! - [`click`]: click-vs-drag disambiguation with spatial and temporal tolerance
//! - [`drag`]: movement deltas and total offsets while a pointer is held
//! - [`swipe`]: horizontal swipe recognition with distance/duration thresholds
//! - [`pinch`]: two-finger pinch ratio relative to the gesture start
//! - [`key`]: keyboard key names the components react to
//!
//! None of these know about the DOM. Hosts feed them raw coordinates and
//! timestamps (see [`vitrine_timing::Millis`]) and interpret the results.
//!
//! ## Click or drag?
//!
//! ```rust
//! # #[cfg(feature = "click")]
//! # fn example() {
//! use kurbo::Point;
//! use vitrine_gesture::click::{TapConfig, TapResult, TapState};
//!
//! let mut tap = TapState::new(TapConfig::default());
//!
//! // Press and release without moving: a tap.
//! tap.on_down(Point::new(100.0, 100.0), 1_000);
//! tap.on_move(Point::new(102.0, 101.0));
//! assert_eq!(tap.on_up(1_120), TapResult::Tap);
//!
//! // Press, move 20px, release: a drag.
//! tap.on_down(Point::new(100.0, 100.0), 2_000);
//! tap.on_move(Point::new(120.0, 100.0));
//! assert_eq!(tap.on_up(2_100), TapResult::Drag);
//! # }
//! ```
//!
//! ## Swipes
//!
//! ```rust
//! use vitrine_gesture::swipe::{SwipeConfig, SwipeDirection, SwipeTracker};
//!
//! let config = SwipeConfig::new(50.0).with_max_duration(300);
//! let mut swipe = SwipeTracker::default();
//!
//! swipe.begin(300.0, 0);
//! assert_eq!(swipe.finish(200.0, 150, &config), Some(SwipeDirection::Left));
//!
//! // Too slow.
//! swipe.begin(300.0, 0);
//! assert_eq!(swipe.finish(200.0, 400, &config), None);
//! ```
//!
//! ## Features
//!
//! - `click`: click-vs-drag recognition (requires `kurbo`)
//! - `drag`: drag tracking (requires `kurbo`)
//! - `pinch`: pinch tracking (requires `kurbo`)
//!
//! [`swipe`] and [`key`] are always available. This crate is `no_std`.

#![no_std]

#[cfg(feature = "click")]
pub mod click;

#[cfg(feature = "drag")]
pub mod drag;
pub mod key;
#[cfg(feature = "pinch")]
pub mod pinch;
pub mod swipe;
