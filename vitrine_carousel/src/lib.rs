// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Carousel: a headless slide carousel.
//!
//! A [`Carousel`] cycles through a fixed number of slides. Navigation wraps in
//! both directions, and a *transition lock* makes any navigation issued while
//! a slide animation is in flight a no-op. The lock is released either when
//! the host acknowledges the end of the animation or, failing that, after
//! [`CarouselConfig::transition`] milliseconds.
//!
//! A [`CarouselGroup`] owns several carousels and advances all of them on a
//! single shared timer. Pointer or touch focus on any member pauses that
//! timer; losing focus re-arms it.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_carousel::{Carousel, CarouselConfig, SlideChange};
//!
//! let mut carousel = Carousel::new(3, CarouselConfig::default()).unwrap();
//!
//! assert_eq!(carousel.prev(0), Some(SlideChange { active: 2, previous: 1 }));
//!
//! // Still animating: ignored.
//! assert_eq!(carousel.next(100), None);
//!
//! // The fallback delay has passed.
//! assert_eq!(carousel.next(800), Some(SlideChange { active: 0, previous: 2 }));
//! ```
//!
//! The host maps each [`SlideChange`] onto class names: `active` on the
//! slide and indicator at [`SlideChange::active`], `prev` on the slide at
//! [`SlideChange::previous`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod group;

pub use carousel::{Carousel, CarouselConfig, CarouselDebugInfo, CarouselInput, SlideChange};
pub use group::{CarouselGroup, CarouselId};
