// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{AnimationFrame, request_animation_frame};
use vitrine_tabs::{
    ANIMATION_CLASSES, TabSwap, TabSwitcher, TabTransition, TabsConfig, TabsInput, TabsUpdate,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement, TouchEvent};

use crate::contract::{TAB_ATTRIBUTE, TAB_BAR, TAB_CONTENT_WRAPPER, TAB_LINK, TAB_PANEL};
use crate::dom;
use crate::scheduler::Driver;

/// Tab links and panels, in matching order.
struct Panels {
    links: Vec<Element>,
    panels: Vec<HtmlElement>,
    /// Pending "fade in" of the newly displayed panel.
    frame: RefCell<Option<AnimationFrame>>,
}

impl Panels {
    fn animate(&self, transition: TabTransition) {
        for panel in &self.panels {
            for class in ANIMATION_CLASSES {
                dom::set_class(panel, class, false);
            }
        }
        let direction = transition.direction;
        if let Some(panel) = self.panels.get(transition.from) {
            dom::set_class(panel, direction.outgoing_class(), true);
        }
        if let Some(panel) = self.panels.get(transition.to) {
            dom::set_class(panel, direction.incoming_class(), true);
        }
    }

    fn swap(&self, swap: TabSwap) {
        for (i, link) in self.links.iter().enumerate() {
            dom::set_class(link, "active", i == swap.active);
        }
        for panel in &self.panels {
            dom::set_class(panel, "active", false);
            dom::set_style(panel, "display", "none");
        }
        let Some(panel) = self.panels.get(swap.active).cloned() else {
            return;
        };
        dom::set_style(&panel, "display", "block");
        // Adding `active` in the same frame as `display` would skip its transition.
        let frame = request_animation_frame(move |_| dom::set_class(&panel, "active", true));
        *self.frame.borrow_mut() = Some(frame);
    }
}

/// Wire the field-trip tabs, if the page has them.
pub(crate) fn install() -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(bar) = dom::query(&document, TAB_BAR)? else {
        return Ok(());
    };
    let links = dom::query_all_in(&bar, TAB_LINK)?;
    let ids: Vec<String> = links
        .iter()
        .map(|link| link.get_attribute(TAB_ATTRIBUTE).unwrap_or_default())
        .collect();
    let active = links
        .iter()
        .position(|link| link.class_list().contains("active"))
        .unwrap_or(0);
    let Some(switcher) = TabSwitcher::with_active(ids, active, TabsConfig::default()) else {
        return Ok(());
    };

    let panels = Rc::new(Panels {
        links,
        panels: dom::query_all_html(&document, TAB_PANEL)?,
        frame: RefCell::new(None),
    });
    let driver = Driver::new(switcher, {
        let panels = Rc::clone(&panels);
        move |swap: Option<TabSwap>| {
            if let Some(swap) = swap {
                panels.swap(swap);
            }
        }
    });

    let mut surfaces = vec![bar.clone()];
    surfaces.extend(dom::query(&document, TAB_CONTENT_WRAPPER)?);
    for surface in &surfaces {
        listen(&driver, &panels, surface, "touchstart", |event| {
            touch_x(event).map(|x| TabsInput::TouchStart { x })
        });
        listen(&driver, &panels, surface, "touchend", |event| {
            touch_x(event).map(|x| TabsInput::TouchEnd { x })
        });
    }
    for panel in &panels.panels {
        listen(&driver, &panels, panel, "animationend", |_| {
            Some(TabsInput::AnimationEnd)
        });
    }

    EventListener::new_with_options(
        &bar,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(link) = dom::closest(event, TAB_LINK) else {
                return;
            };
            event.prevent_default();
            let Some(id) = link.get_attribute(TAB_ATTRIBUTE) else {
                return;
            };
            if !dom::document().is_ok_and(|doc| doc.get_element_by_id(&id).is_some()) {
                return;
            }
            dispatch(&driver, &panels, TabsInput::Select(id));
        },
    )
    .forget();
    Ok(())
}

fn dispatch(driver: &Driver<TabSwitcher<String>>, panels: &Panels, input: TabsInput<String>) {
    match driver.update(|tabs, now| tabs.handle(input, now)) {
        Some(TabsUpdate::Animate(transition)) => panels.animate(transition),
        Some(TabsUpdate::Swap(swap)) => panels.swap(swap),
        None => {}
    }
}

fn listen(
    driver: &Driver<TabSwitcher<String>>,
    panels: &Rc<Panels>,
    target: &Element,
    event: &'static str,
    input: impl Fn(&Event) -> Option<TabsInput<String>> + 'static,
) {
    let driver = driver.clone();
    let panels = Rc::clone(panels);
    EventListener::new(target, event, move |event| {
        if let Some(input) = input(event) {
            dispatch(&driver, &panels, input);
        }
    })
    .forget();
}

fn touch_x(event: &Event) -> Option<f64> {
    dom::first_screen_x(&event.dyn_ref::<TouchEvent>()?.changed_touches())
}
