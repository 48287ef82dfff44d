// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Notify: transient feedback for document pages.
//!
//! - [`Highlights`]: flash a cross-reference target (figure, table,
//!   equation) for a couple of seconds after its link is followed.
//! - [`Toasts`]: short messages such as "Copied: Figure 3", each removed
//!   after a fixed time.
//! - Caption helpers: [`CaptionKind`] selectors, [`copied_message`] and
//!   [`strip_equation_label`].
//!
//! [`NotifyConfig`] carries the durations.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod caption;
mod flash;
mod toast;

pub use caption::{
    CaptionKind, EQUATION_NUMBER_SELECTOR, REFERENCE_LINK_SELECTOR, copied_message,
    strip_equation_label,
};
pub use flash::Highlights;
pub use toast::{Toast, ToastId, Toasts};

use vitrine_timing::Millis;

/// How long feedback stays on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotifyConfig {
    /// Cross-reference target highlight.
    pub highlight: Millis,
    /// Toast lifetime.
    pub toast: Millis,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            highlight: 2_000,
            toast: 3_000,
        }
    }
}

impl NotifyConfig {
    /// A [`Highlights`] set using [`NotifyConfig::highlight`].
    #[must_use]
    pub fn highlights<K: Copy + Eq>(&self) -> Highlights<K> {
        Highlights::new(self.highlight)
    }

    /// A [`Toasts`] list using [`NotifyConfig::toast`].
    #[must_use]
    pub fn toasts(&self) -> Toasts {
        Toasts::new(self.toast)
    }
}
