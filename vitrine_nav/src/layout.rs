// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measured page geometry fed to the highlighter.
//!
//! All coordinates are in pixels within the scrolling content container,
//! as reported by `offsetTop` / `offsetHeight`.

use crate::NavConfig;

/// How a section decides whether it is in view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionRole {
    /// The first section: active only while the page is scrolled to (near) the top.
    Top,
    /// The last section: active from shortly before its top to the end of the page.
    Bottom,
    /// Active while the scroll position lies within its shifted extent.
    Body,
}

/// A content section.
#[derive(Clone, Debug, PartialEq)]
pub struct Section<Id> {
    /// Element id, matched against link targets.
    pub id: Id,
    /// Activation rule.
    pub role: SectionRole,
    /// `offsetTop`.
    pub top: f64,
    /// `offsetHeight`.
    pub height: f64,
}

impl<Id> Section<Id> {
    /// A [`SectionRole::Body`] section.
    #[must_use]
    pub fn new(id: Id, top: f64, height: f64) -> Self {
        Self {
            id,
            role: SectionRole::Body,
            top,
            height,
        }
    }

    /// Replace the activation rule.
    #[must_use]
    pub fn with_role(mut self, role: SectionRole) -> Self {
        self.role = role;
        self
    }

    /// Top shifted up by the activation offset, so sections light up early.
    #[must_use]
    pub fn effective_top(&self, config: &NavConfig) -> f64 {
        self.top - config.activation_offset
    }

    /// Whether this section claims scroll position `scroll`.
    #[must_use]
    pub fn is_active_at(&self, scroll: f64, config: &NavConfig) -> bool {
        let top = self.effective_top(config);
        match self.role {
            SectionRole::Top => scroll < config.top_zone,
            SectionRole::Bottom => scroll >= top - config.bottom_lead,
            SectionRole::Body => scroll >= top && scroll < top + self.height,
        }
    }
}

/// What a sidebar link points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget<Id> {
    /// `#top`: the start of the page.
    PageTop,
    /// A section by id.
    Section(Id),
}

/// A sidebar link and its position within the sidebar.
#[derive(Clone, Debug, PartialEq)]
pub struct NavLink<Id> {
    /// Where the link goes.
    pub target: LinkTarget<Id>,
    /// `offsetTop`.
    pub top: f64,
    /// `offsetHeight`.
    pub height: f64,
}

/// The scrollable sidebar that holds the links.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavPane {
    /// `offsetTop`.
    pub top: f64,
    /// `clientHeight`.
    pub height: f64,
}

impl NavPane {
    /// Sidebar scroll offset that centers `link` vertically, never negative.
    ///
    /// ```
    /// use vitrine_nav::{LinkTarget, NavLink, NavPane};
    ///
    /// let pane = NavPane { top: 100.0, height: 400.0 };
    /// let link = NavLink::<&str> { target: LinkTarget::PageTop, top: 600.0, height: 40.0 };
    /// assert_eq!(pane.scroll_to_center(&link), 320.0);
    ///
    /// let near_top = NavLink::<&str> { target: LinkTarget::PageTop, top: 150.0, height: 40.0 };
    /// assert_eq!(pane.scroll_to_center(&near_top), 0.0);
    /// ```
    #[must_use]
    pub fn scroll_to_center<Id>(&self, link: &NavLink<Id>) -> f64 {
        let offset = link.top - self.top;
        (offset - self.height / 2.0 + link.height / 2.0).max(0.0)
    }
}
