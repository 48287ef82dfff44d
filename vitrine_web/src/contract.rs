// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The markup the host expects.
//!
//! Every component looks its elements up with these selectors and quietly
//! does nothing when they are absent, so one script serves every page.

use vitrine_nav::{LinkTarget, SectionRole};

/// Carousel roots.
pub const CAROUSEL: &str = ".carousel, .drawing-carousel";
/// Slides inside a carousel.
pub const CAROUSEL_ITEM: &str = ".carousel-item";
/// Slide indicators inside a carousel.
pub const CAROUSEL_INDICATOR: &str = ".indicator";
/// "Previous" control inside a carousel.
pub const CAROUSEL_PREV: &str = ".prev";
/// "Next" control inside a carousel.
pub const CAROUSEL_NEXT: &str = ".next";

/// Lightbox overlay (id).
pub const LIGHTBOX: &str = "imageModal";
/// Lightbox image (id).
pub const LIGHTBOX_IMAGE: &str = "modalImage";
/// Lightbox content area.
pub const LIGHTBOX_CONTENT: &str = ".modal-content";
/// Lightbox "previous" arrow.
pub const LIGHTBOX_PREV: &str = ".prev-arrow";
/// Lightbox "next" arrow.
pub const LIGHTBOX_NEXT: &str = ".next-arrow";
/// Any lightbox arrow, including its children.
pub const LIGHTBOX_ARROW: &str = ".nav-arrow";
/// Zoom-in button.
pub const ZOOM_IN: &str = ".zoom-in";
/// Zoom-out button.
pub const ZOOM_OUT: &str = ".zoom-out";
/// Gallery thumbnails that open the lightbox.
pub const GALLERY_ITEM: &str = ".gallery-item";

/// Tab bar.
pub const TAB_BAR: &str = ".field-trip-tabs";
/// Tab links inside the bar, carrying `data-tab`.
pub const TAB_LINK: &str = ".tab-link";
/// Tab content area.
pub const TAB_CONTENT_WRAPPER: &str = ".field-trip-content-wrapper";
/// Tab panels, in the same order as the links.
pub const TAB_PANEL: &str = ".field-trip-content-wrapper .tab-content";
/// Attribute naming a tab's panel id.
pub const TAB_ATTRIBUTE: &str = "data-tab";

/// Document modal (id).
pub const DOCUMENT_MODAL: &str = "pdfModal";
/// Document viewer frame (id).
pub const DOCUMENT_VIEWER: &str = "pdfViewer";
/// Modal close control.
pub const DOCUMENT_CLOSE: &str = ".close-modal";
/// Buttons that open the modal.
pub const DOCUMENT_OPENERS: &str = "#cvButton, #cvButtonMain";
/// Floating controls hidden while the modal is open.
pub const FLOATING_NAV: &str = ".hamburger-menu, #mobileNavToggle";
/// The document shown in the modal.
pub const DOCUMENT_PATH: &str = "documents/CV.pdf";

/// Scrolling content container.
pub const CONTENT: &str = ".content-container";
/// Content sections.
pub const SECTION: &str = ".section";
/// Sidebar link container.
pub const NAV: &str = ".nav";
/// Sidebar links.
pub const NAV_LINK: &str = ".nav-link";
/// Sidebar list items; clicking anywhere on one follows its link.
pub const NAV_ITEM: &str = ".nav-container ul li";
/// Back-to-top button (id).
pub const BACK_TO_TOP: &str = "backToTop";

/// Table-of-contents links on report pages.
pub const TOC_LINK: &str = "#TOC a[href^=\"#\"]";
/// Headings tracked by the table of contents.
pub const HEADING: &str = "h1, h2, h3, h4, h5, h6";

/// Id of the section treated as the top of the page.
pub const TOP_SECTION_ID: &str = "about";
/// Id of the section treated as the bottom of the page.
pub const BOTTOM_SECTION_ID: &str = "references";

/// Activation rule for a section with the given id.
#[must_use]
pub fn section_role(id: &str) -> SectionRole {
    match id {
        TOP_SECTION_ID => SectionRole::Top,
        BOTTOM_SECTION_ID => SectionRole::Bottom,
        _ => SectionRole::Body,
    }
}

/// Parse a sidebar link's `href`. Only in-page fragments are tracked.
///
/// ```
/// use vitrine_nav::LinkTarget;
/// use vitrine_web::contract::link_target;
///
/// assert_eq!(link_target("#top"), Some(LinkTarget::PageTop));
/// assert_eq!(link_target("#skills"), Some(LinkTarget::Section("skills".to_string())));
/// assert_eq!(link_target("/blog"), None);
/// ```
#[must_use]
pub fn link_target(href: &str) -> Option<LinkTarget<String>> {
    match href.strip_prefix('#')? {
        "" => None,
        "top" => Some(LinkTarget::PageTop),
        id => Some(LinkTarget::Section(id.to_string())),
    }
}
