// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{AnimationFrame, request_animation_frame};
use vitrine_gesture::key::Key;
use vitrine_nav::{
    LinkAction, LinkTarget, NavConfig, NavHighlighter, NavLink, NavPane, NavUpdate, Section,
    TocTracker,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, KeyboardEvent};

use crate::contract::{
    BACK_TO_TOP, CONTENT, HEADING, NAV, NAV_ITEM, NAV_LINK, SECTION, TOC_LINK, link_target,
    section_role,
};
use crate::dom;
use crate::scheduler::Driver;

const FOCUS_OUTLINE: &str = "2px solid #2B5797";

/// The scrolling page and its sidebar.
struct Page {
    content: HtmlElement,
    sections: Vec<HtmlElement>,
    links: Vec<HtmlElement>,
    targets: Vec<LinkTarget<String>>,
    nav: Option<HtmlElement>,
    back_to_top: Option<Element>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl Page {
    fn scroll(&self) -> f64 {
        f64::from(self.content.scroll_top())
    }

    fn measure(&self) -> (Vec<Section<String>>, Vec<NavLink<String>>, NavPane) {
        let sections = self
            .sections
            .iter()
            .map(|section| {
                let id = section.id();
                let role = section_role(&id);
                Section::new(
                    id,
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                )
                .with_role(role)
            })
            .collect();
        let links = self
            .links
            .iter()
            .zip(&self.targets)
            .map(|(link, target)| NavLink {
                target: target.clone(),
                top: f64::from(link.offset_top()),
                height: f64::from(link.offset_height()),
            })
            .collect();
        let pane = self
            .nav
            .as_ref()
            .map(|nav| NavPane {
                top: f64::from(nav.offset_top()),
                height: f64::from(nav.client_height()),
            })
            .unwrap_or_default();
        (sections, links, pane)
    }

    fn apply(&self, update: &NavUpdate) {
        for (i, section) in self.sections.iter().enumerate() {
            dom::set_class(section, "active", update.section == Some(i));
        }
        for (i, link) in self.links.iter().enumerate() {
            dom::set_class(link, "active", update.links.contains(&i));
        }
        if let (Some(nav), Some(top)) = (&self.nav, update.sidebar_scroll) {
            dom::smooth_scroll_to(nav, top);
        }
        if let Some(button) = &self.back_to_top {
            dom::set_class(button, "visible", update.back_to_top);
        }
    }

    fn follow(&self, driver: &Driver<NavHighlighter<String>>, index: usize) {
        if let Some(top) = driver.read(|nav| nav.link_scroll_target(index)) {
            dom::smooth_scroll_to(&self.content, top);
        }
    }
}

/// Re-measure, then run the throttled update, in an animation frame.
fn on_frame(page: &Page, driver: &Driver<NavHighlighter<String>>) {
    let (sections, links, pane) = page.measure();
    let update = driver.update(|nav, _| {
        if nav.sections() != sections.as_slice()
            || nav.links() != links.as_slice()
            || nav.pane() != pane
        {
            nav.set_layout(sections, links, pane);
        }
        nav.on_frame()
    });
    if let Some(update) = update {
        page.apply(&update);
    }
}

/// Wire the portfolio sidebar, if the page has one.
pub(crate) fn install() -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(content) = dom::query(&document, CONTENT)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    let (links, targets) = dom::query_all_html(&document, NAV_LINK)?
        .into_iter()
        .filter_map(|link| {
            let target = link_target(&link.get_attribute("href")?)?;
            Some((link, target))
        })
        .unzip();
    let page = Rc::new(Page {
        content,
        sections: dom::query_all_html(&document, SECTION)?,
        links,
        targets,
        nav: dom::query(&document, NAV)?.and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        back_to_top: document.get_element_by_id(BACK_TO_TOP),
        frame: RefCell::new(None),
    });

    let (sections, links, pane) = page.measure();
    let driver = Driver::new(
        NavHighlighter::new(sections, links, pane, NavConfig::default()),
        {
            let page = Rc::clone(&page);
            move |update: Option<NavUpdate>| {
                if let Some(update) = update {
                    page.apply(&update);
                }
            }
        },
    );
    let scroll = page.scroll();
    if let Some(update) = driver.update(|nav, _| nav.update(scroll)) {
        page.apply(&update);
    }

    {
        let page = Rc::clone(&page);
        let driver = driver.clone();
        let content = page.content.clone();
        EventListener::new(&content, "scroll", move |_| {
            let scroll = page.scroll();
            if !driver.update(|nav, now| nav.on_scroll(scroll, now)) {
                return;
            }
            let frame = {
                let page = Rc::clone(&page);
                let driver = driver.clone();
                request_animation_frame(move |_| on_frame(&page, &driver))
            };
            *page.frame.borrow_mut() = Some(frame);
        })
        .forget();
    }

    link_listeners(&page, &driver)?;

    if let Some(button) = &page.back_to_top {
        let page = Rc::clone(&page);
        EventListener::new(button, "click", move |_| {
            dom::smooth_scroll_to(&page.content, 0.0);
        })
        .forget();
    }
    Ok(())
}

/// Clicks, focus styling and arrow-key stepping on sidebar links.
fn link_listeners(page: &Rc<Page>, driver: &Driver<NavHighlighter<String>>) -> Result<(), JsValue> {
    let document = dom::document()?;
    let follow_on_click = |target: &Element, index: usize| {
        let page = Rc::clone(page);
        let driver = driver.clone();
        EventListener::new_with_options(
            target,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                page.follow(&driver, index);
            },
        )
        .forget();
    };

    // A click anywhere on a list item follows the link inside it.
    for item in dom::query_all(&document, NAV_ITEM)? {
        let Some(link) = item.query_selector(NAV_LINK)? else {
            continue;
        };
        if let Some(index) = page.links.iter().position(|l| **l == link) {
            follow_on_click(&item, index);
        }
    }

    for (index, link) in page.links.iter().enumerate() {
        if link.closest(NAV_ITEM)?.is_none() {
            follow_on_click(link, index);
        }
        let _ = link.set_attribute("tabindex", "0");

        let focused = link.clone();
        EventListener::new(link, "focus", move |_| {
            dom::set_style(&focused, "outline", FOCUS_OUTLINE);
        })
        .forget();
        let blurred = link.clone();
        EventListener::new(link, "blur", move |_| {
            dom::set_style(&blurred, "outline", "");
        })
        .forget();

        let page = Rc::clone(page);
        let driver = driver.clone();
        EventListener::new_with_options(
            link,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(key) = event
                    .dyn_ref::<KeyboardEvent>()
                    .and_then(|event| Key::from_dom(&event.key()))
                else {
                    return;
                };
                match driver.read(|nav| nav.key_action(index, key)) {
                    Some(LinkAction::Focus(next)) => {
                        event.prevent_default();
                        if let Some(next) = page.links.get(next) {
                            let _ = next.focus();
                        }
                    }
                    Some(LinkAction::Activate(target)) => {
                        event.prevent_default();
                        if let Some(link) = page.links.get(target) {
                            link.click();
                        }
                    }
                    None => {}
                }
            },
        )
        .forget();
    }
    Ok(())
}

/// Wire table-of-contents highlighting on report pages.
pub(crate) fn install_toc() -> Result<(), JsValue> {
    let document = dom::document()?;
    let links = dom::query_all(&document, TOC_LINK)?;
    if links.is_empty() {
        return Ok(());
    }
    let headings = dom::query_all_html(&document, HEADING)?;
    let toc = RefCell::new(TocTracker::<Option<String>>::new(Vec::new()));

    let window = dom::window()?;
    let target = window.clone();
    EventListener::new(&target, "scroll", move |_| {
        let Ok(scroll) = window.scroll_y() else {
            return;
        };
        // Headings move as images and equations load, so measure every time.
        let measured = headings
            .iter()
            .map(|h| (h.get_attribute("id"), f64::from(h.offset_top())))
            .collect();
        let mut toc = toc.borrow_mut();
        toc.set_headings(measured);
        let Some(current) = toc.update(scroll) else {
            return;
        };
        let href = current.and_then(Option::as_deref).map(|id| format!("#{id}"));
        for link in &links {
            let active = href.is_some() && link.get_attribute("href") == href;
            dom::set_class(link, "active", active);
        }
    })
    .forget();
    Ok(())
}
