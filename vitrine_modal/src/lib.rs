// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Modal: a headless modal for viewing a single document.
//!
//! [`DocumentModal`] models the staged fade in and out of a modal that embeds
//! a PDF viewer:
//!
//! - Opening hides floating navigation, displays the modal, loads the
//!   document and locks page scrolling; the `show` class follows after
//!   [`ModalConfig::reveal_delay`] so the fade has a starting frame.
//! - Closing removes `show` at once and, after [`ModalConfig::close_delay`]
//!   or an explicit transition-end acknowledgment, undoes everything opening
//!   did.
//!
//! [`ViewerParams`] builds the viewer's URL fragment.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod modal;
mod viewer;

pub use modal::{DocumentModal, ModalConfig, ModalDebugInfo, ModalEffect, ModalInput, Phase};
pub use viewer::{PageFit, ViewerParams};
