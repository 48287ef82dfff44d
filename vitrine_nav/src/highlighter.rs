// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use vitrine_gesture::key::Key;
use vitrine_timing::{Debounce, Millis};

use crate::layout::{LinkTarget, NavLink, NavPane, Section};

/// Scroll thresholds, in pixels, and the trailing settle delay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavConfig {
    /// Sections activate this far before their top reaches the viewport top.
    pub activation_offset: f64,
    /// The top section and the `#top` link are active while scrolled less than this.
    pub top_zone: f64,
    /// The bottom section activates this much before its effective top.
    pub bottom_lead: f64,
    /// The back-to-top button shows once scrolled strictly past this.
    pub back_to_top_after: f64,
    /// Gap left above a section when a link scrolls to it.
    pub link_scroll_margin: f64,
    /// Trailing recomputation after scrolling stops.
    pub settle_delay: Millis,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            activation_offset: 200.0,
            top_zone: 200.0,
            bottom_lead: 100.0,
            back_to_top_after: 300.0,
            link_scroll_margin: 20.0,
            settle_delay: 50,
        }
    }
}

/// Highlight state for one scroll position.
#[derive(Clone, Debug, PartialEq)]
pub struct NavUpdate {
    /// Index of the active section; `None` only when there are no sections.
    pub section: Option<usize>,
    /// Indices of the links to mark active.
    pub links: Vec<usize>,
    /// Where to smoothly scroll the sidebar so the active link stays centered.
    pub sidebar_scroll: Option<f64>,
    /// Whether the back-to-top button is visible.
    pub back_to_top: bool,
}

/// What a key press on a focused sidebar link should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkAction {
    /// Move focus to this link.
    Focus(usize),
    /// Follow this link.
    Activate(usize),
}

/// Keeps the sidebar in step with the content container's scroll position.
///
/// Scroll events are coalesced: [`NavHighlighter::on_scroll`] asks the host
/// for at most one animation frame at a time and also arms a short trailing
/// recomputation, so the final resting position is always reflected.
#[derive(Clone, Debug)]
pub struct NavHighlighter<Id> {
    sections: Vec<Section<Id>>,
    links: Vec<NavLink<Id>>,
    pane: NavPane,
    config: NavConfig,
    scroll: f64,
    frame_requested: bool,
    settle: Debounce,
    last: Option<NavUpdate>,
}

impl<Id: PartialEq> NavHighlighter<Id> {
    /// Create a highlighter over measured sections and links.
    #[must_use]
    pub fn new(
        sections: Vec<Section<Id>>,
        links: Vec<NavLink<Id>>,
        pane: NavPane,
        config: NavConfig,
    ) -> Self {
        Self {
            sections,
            links,
            pane,
            settle: Debounce::new(config.settle_delay),
            config,
            scroll: 0.0,
            frame_requested: false,
            last: None,
        }
    }

    /// Sections in document order.
    #[must_use]
    pub fn sections(&self) -> &[Section<Id>] {
        &self.sections
    }

    /// Sidebar links in document order.
    #[must_use]
    pub fn links(&self) -> &[NavLink<Id>] {
        &self.links
    }

    /// The sidebar pane.
    #[must_use]
    pub fn pane(&self) -> NavPane {
        self.pane
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Replace the measured geometry, e.g. after a resize.
    ///
    /// The next [`NavHighlighter::update`] reports a full state.
    pub fn set_layout(&mut self, sections: Vec<Section<Id>>, links: Vec<NavLink<Id>>, pane: NavPane) {
        self.sections = sections;
        self.links = links;
        self.pane = pane;
        self.last = None;
    }

    /// The section that claims `scroll`.
    ///
    /// When several sections match, the last in document order wins; when
    /// none does, the one whose effective top is closest to `scroll`.
    #[must_use]
    pub fn active_section(&self, scroll: f64) -> Option<usize> {
        let mut current = None;
        let mut closest = None;
        let mut closest_distance = f64::INFINITY;
        for (i, section) in self.sections.iter().enumerate() {
            if section.is_active_at(scroll, &self.config) {
                current = Some(i);
            }
            let distance = (scroll - section.effective_top(&self.config)).abs();
            if distance < closest_distance {
                closest_distance = distance;
                closest = Some(i);
            }
        }
        current.or(closest)
    }

    /// Links to highlight when `section` is active at `scroll`.
    #[must_use]
    pub fn active_links(&self, scroll: f64, section: Option<usize>) -> Vec<usize> {
        let current = section.and_then(|i| self.sections.get(i)).map(|s| &s.id);
        self.links
            .iter()
            .enumerate()
            .filter(|(_, link)| match &link.target {
                LinkTarget::PageTop => scroll < self.config.top_zone,
                LinkTarget::Section(id) => current == Some(id),
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether the back-to-top button shows at `scroll`.
    #[must_use]
    pub fn back_to_top_visible(&self, scroll: f64) -> bool {
        scroll > self.config.back_to_top_after
    }

    /// Full highlight state for `scroll`.
    #[must_use]
    pub fn state(&self, scroll: f64) -> NavUpdate {
        let section = self.active_section(scroll);
        let links = self.active_links(scroll, section);
        let sidebar_scroll = links
            .last()
            .and_then(|&i| self.links.get(i))
            .map(|link| self.pane.scroll_to_center(link));
        NavUpdate {
            section,
            links,
            sidebar_scroll,
            back_to_top: self.back_to_top_visible(scroll),
        }
    }

    /// Recompute at `scroll`, returning the state only if it changed.
    pub fn update(&mut self, scroll: f64) -> Option<NavUpdate> {
        self.scroll = scroll;
        let state = self.state(scroll);
        if self.last.as_ref() == Some(&state) {
            return None;
        }
        self.last = Some(state.clone());
        Some(state)
    }

    /// Record a scroll event.
    ///
    /// Returns `true` if the host should request an animation frame and call
    /// [`NavHighlighter::on_frame`] from it.
    pub fn on_scroll(&mut self, scroll: f64, now: Millis) -> bool {
        self.scroll = scroll;
        self.settle.trigger(now);
        !core::mem::replace(&mut self.frame_requested, true)
    }

    /// The requested animation frame arrived.
    pub fn on_frame(&mut self) -> Option<NavUpdate> {
        self.frame_requested = false;
        self.update(self.scroll)
    }

    /// Run the trailing recomputation if scrolling has settled.
    pub fn poll(&mut self, now: Millis) -> Option<NavUpdate> {
        if self.settle.poll(now) {
            self.update(self.scroll)
        } else {
            None
        }
    }

    /// Deadline at which [`NavHighlighter::poll`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.settle.next_deadline()
    }

    /// Content scroll offset to jump to when link `index` is followed.
    #[must_use]
    pub fn link_scroll_target(&self, index: usize) -> Option<f64> {
        match &self.links.get(index)?.target {
            LinkTarget::PageTop => Some(0.0),
            LinkTarget::Section(id) => self
                .sections
                .iter()
                .find(|section| section.id == *id)
                .map(|section| section.top - self.config.link_scroll_margin),
        }
    }

    /// Keyboard handling for the link at `focused`.
    ///
    /// Arrow keys move focus and stop at either end; Enter and Space follow the link.
    #[must_use]
    pub fn key_action(&self, focused: usize, key: Key) -> Option<LinkAction> {
        if focused >= self.links.len() {
            return None;
        }
        match key {
            Key::ArrowDown => Some(focused + 1)
                .filter(|&i| i < self.links.len())
                .map(LinkAction::Focus),
            Key::ArrowUp => focused.checked_sub(1).map(LinkAction::Focus),
            key if key.is_activation() => Some(LinkAction::Activate(focused)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SectionRole;
    use alloc::vec;

    /// about @0 (h 600), projects @600 (h 800), skills @1400 (h 400), references @1800.
    fn page() -> NavHighlighter<&'static str> {
        let sections = vec![
            Section::new("about", 0.0, 600.0).with_role(SectionRole::Top),
            Section::new("projects", 600.0, 800.0),
            Section::new("skills", 1_400.0, 400.0),
            Section::new("references", 1_800.0, 500.0).with_role(SectionRole::Bottom),
        ];
        let links = vec![
            NavLink { target: LinkTarget::PageTop, top: 0.0, height: 40.0 },
            NavLink { target: LinkTarget::Section("projects"), top: 40.0, height: 40.0 },
            NavLink { target: LinkTarget::Section("skills"), top: 80.0, height: 40.0 },
            NavLink { target: LinkTarget::Section("references"), top: 120.0, height: 40.0 },
        ];
        NavHighlighter::new(sections, links, NavPane { top: 0.0, height: 100.0 }, NavConfig::default())
    }

    #[test]
    fn about_is_active_near_top() {
        let nav = page();
        assert_eq!(nav.active_section(0.0), Some(0));
        // projects' effective top is 400, so at 199 only about matches.
        assert_eq!(nav.active_section(199.0), Some(0));
        assert_eq!(nav.active_links(0.0, Some(0)), vec![0]);
    }

    #[test]
    fn body_sections_use_shifted_extent() {
        let nav = page();
        assert_eq!(nav.active_section(400.0), Some(1));
        assert_eq!(nav.active_section(1_199.0), Some(1));
        assert_eq!(nav.active_section(1_200.0), Some(2));
    }

    #[test]
    fn references_activate_early() {
        let nav = page();
        // Effective top 1600, lead 100.
        assert_eq!(nav.active_section(1_499.0), Some(2));
        assert_eq!(nav.active_section(1_500.0), Some(3));
        assert_eq!(nav.active_links(1_500.0, Some(3)), vec![3]);
    }

    #[test]
    fn falls_back_to_closest_effective_top() {
        let sections = vec![
            Section::new("a", 1_000.0, 100.0),
            Section::new("b", 2_000.0, 100.0),
        ];
        let nav = NavHighlighter::new(sections, vec![], NavPane::default(), NavConfig::default());
        // Effective tops 800 and 1800.
        assert_eq!(nav.active_section(0.0), Some(0));
        assert_eq!(nav.active_section(1_400.0), Some(1));
        // Ties go to the earlier section.
        assert_eq!(nav.active_section(1_300.0), Some(0));
    }

    #[test]
    fn no_sections_means_no_section() {
        let nav: NavHighlighter<&str> =
            NavHighlighter::new(vec![], vec![], NavPane::default(), NavConfig::default());
        assert_eq!(nav.active_section(10.0), None);
    }

    #[test]
    fn sidebar_follows_active_link() {
        let nav = page();
        let state = nav.state(1_500.0);
        // Link top 120, pane height 100, link height 40: 120 - 50 + 20.
        assert_eq!(state.sidebar_scroll, Some(90.0));
        assert!(state.back_to_top);
        assert!(!nav.state(300.0).back_to_top);
        assert!(nav.state(300.5).back_to_top);
    }

    #[test]
    fn update_reports_changes_only() {
        let mut nav = page();
        assert!(nav.update(0.0).is_some());
        assert!(nav.update(10.0).is_none());
        assert_eq!(nav.update(500.0).map(|u| u.section), Some(Some(1)));
    }

    #[test]
    fn new_layout_reports_full_state() {
        let mut nav = page();
        assert!(nav.update(0.0).is_some());

        let pane = NavPane { top: 10.0, height: 200.0 };
        nav.set_layout(nav.sections().to_vec(), nav.links().to_vec(), pane);
        assert_eq!(nav.pane(), pane);
        let update = nav.update(0.0).unwrap();
        assert_eq!(update.section, Some(0));
        assert_eq!(update.sidebar_scroll, Some(0.0));
    }

    #[test]
    fn scroll_requests_one_frame_at_a_time() {
        let mut nav = page();
        assert!(nav.on_scroll(100.0, 0));
        assert!(!nav.on_scroll(450.0, 5));
        let update = nav.on_frame().unwrap();
        assert_eq!(update.section, Some(1));
        assert!(nav.on_scroll(460.0, 20));
        assert_eq!(nav.next_deadline(), Some(70));
        assert!(nav.poll(69).is_none());
        // Same state as the frame already reported.
        assert!(nav.poll(70).is_none());
        assert_eq!(nav.next_deadline(), None);
    }

    #[test]
    fn trailing_update_catches_final_position() {
        let mut nav = page();
        nav.on_scroll(100.0, 0);
        nav.on_frame();
        nav.on_scroll(1_700.0, 10);
        assert_eq!(nav.poll(60).and_then(|u| u.section), Some(3));
    }

    #[test]
    fn link_targets() {
        let nav = page();
        assert_eq!(nav.link_scroll_target(0), Some(0.0));
        assert_eq!(nav.link_scroll_target(2), Some(1_380.0));
        assert_eq!(nav.link_scroll_target(9), None);
    }

    #[test]
    fn keyboard_stepping_clamps() {
        let nav = page();
        assert_eq!(nav.key_action(0, Key::ArrowUp), None);
        assert_eq!(nav.key_action(0, Key::ArrowDown), Some(LinkAction::Focus(1)));
        assert_eq!(nav.key_action(3, Key::ArrowDown), None);
        assert_eq!(nav.key_action(2, Key::ArrowUp), Some(LinkAction::Focus(1)));
        assert_eq!(nav.key_action(2, Key::Enter), Some(LinkAction::Activate(2)));
        assert_eq!(nav.key_action(2, Key::Space), Some(LinkAction::Activate(2)));
        assert_eq!(nav.key_action(2, Key::Escape), None);
    }
}
