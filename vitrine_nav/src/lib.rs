// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Nav: scroll-synchronized navigation highlighting.
//!
//! The host measures the page once ([`Section`], [`NavLink`], [`NavPane`])
//! and feeds scroll positions to a [`NavHighlighter`], which answers:
//!
//! - which section is active, with special rules for the first
//!   ([`SectionRole::Top`]) and last ([`SectionRole::Bottom`]) sections and a
//!   closest-section fallback;
//! - which sidebar links to highlight and where to scroll the sidebar so the
//!   active link stays centered;
//! - whether the back-to-top button is visible;
//! - where a link click should scroll the content, and how arrow, Enter and
//!   Space keys move between links.
//!
//! [`TocTracker`] covers the simpler table-of-contents pages, where the
//! current heading is the last one scrolled past.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_nav::{LinkTarget, NavConfig, NavHighlighter, NavLink, NavPane, Section, SectionRole};
//!
//! let sections = vec![
//!     Section::new("about", 0.0, 700.0).with_role(SectionRole::Top),
//!     Section::new("work", 700.0, 900.0),
//!     Section::new("references", 1_600.0, 400.0).with_role(SectionRole::Bottom),
//! ];
//! let links = vec![
//!     NavLink { target: LinkTarget::PageTop, top: 0.0, height: 30.0 },
//!     NavLink { target: LinkTarget::Section("work"), top: 30.0, height: 30.0 },
//!     NavLink { target: LinkTarget::Section("references"), top: 60.0, height: 30.0 },
//! ];
//! let mut nav = NavHighlighter::new(sections, links, NavPane::default(), NavConfig::default());
//!
//! let update = nav.update(800.0).unwrap();
//! assert_eq!(update.section, Some(1));
//! assert_eq!(update.links, vec![1]);
//! assert!(update.back_to_top);
//!
//! // Clicking "work" scrolls to just above the section.
//! assert_eq!(nav.link_scroll_target(1), Some(680.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod highlighter;
mod layout;
mod toc;

pub use highlighter::{LinkAction, NavConfig, NavHighlighter, NavUpdate};
pub use layout::{LinkTarget, NavLink, NavPane, Section, SectionRole};
pub use toc::TocTracker;
