// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Lightbox: a headless full-screen image viewer.
//!
//! A [`Lightbox`] shows one image of a gallery at a time. It tracks the
//! displayed index, a [`ZoomPan`] transform and whatever pointer gesture is in
//! progress, and turns raw input into a list of [`LightboxEffect`]s for the
//! host to apply.
//!
//! - Wheel and pinch zoom are clamped to `[0.5, 3.0]`; the zoom buttons to
//!   `[1.0, 3.0]`. Returning to scale 1.0 recenters the image.
//! - Panning (mouse drag or one finger) only moves the image while it is
//!   zoomed in. Unzoomed, a long horizontal drag navigates instead.
//! - A quick press that stays within a few pixels closes the viewer. Desktop
//!   clicks on the surrounding content close it too; on mobile only the
//!   backdrop does.
//! - Navigation stops at either end of the gallery.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_gesture::key::Key;
//! use vitrine_lightbox::{Lightbox, LightboxConfig, LightboxEffect, LightboxInput, Platform};
//!
//! let mut lightbox = Lightbox::new(3, LightboxConfig::default(), Platform::Desktop);
//!
//! let effects = lightbox.handle(LightboxInput::Open(1), 0);
//! assert!(effects.contains(&LightboxEffect::Show));
//!
//! lightbox.handle(LightboxInput::Key(Key::ArrowRight), 10);
//! assert_eq!(lightbox.index(), Some(2));
//!
//! // Already at the last image.
//! assert!(lightbox.handle(LightboxInput::Key(Key::ArrowRight), 20).is_empty());
//!
//! lightbox.handle(LightboxInput::Key(Key::Escape), 30);
//! assert!(!lightbox.is_open());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod lightbox;
mod zoom;

pub use lightbox::{
    Lightbox, LightboxConfig, LightboxDebugInfo, LightboxEffect, LightboxInput, Mode, Platform,
    Target, Touches,
};
pub use zoom::{ZoomLimits, ZoomPan};
