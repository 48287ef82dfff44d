// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use vitrine_carousel::{
    Carousel, CarouselConfig, CarouselGroup, CarouselId, CarouselInput, SlideChange,
};
use vitrine_gesture::key::Key;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, KeyboardEvent, TouchEvent};

use crate::contract::{
    CAROUSEL, CAROUSEL_INDICATOR, CAROUSEL_ITEM, CAROUSEL_NEXT, CAROUSEL_PREV,
};
use crate::dom;
use crate::scheduler::Driver;

/// Elements of one carousel, indexed like the state machine's slides.
struct Slides {
    items: Vec<Element>,
    indicators: Vec<Element>,
}

impl Slides {
    fn render(&self, change: SlideChange) {
        for item in &self.items {
            dom::set_class(item, "active", false);
            dom::set_class(item, "prev", false);
        }
        for indicator in &self.indicators {
            dom::set_class(indicator, "active", false);
        }
        if let Some(item) = self.items.get(change.active) {
            dom::set_class(item, "active", true);
        }
        if let Some(indicator) = self.indicators.get(change.active) {
            dom::set_class(indicator, "active", true);
        }
        if let Some(item) = self.items.get(change.previous) {
            dom::set_class(item, "prev", true);
        }
    }

    /// Returns `true` if `event` was fired by the slide now showing.
    ///
    /// Transitions on controls, indicators and the outgoing slide bubble up
    /// to the root too, and must not release the lock.
    fn is_incoming(&self, event: &Event) -> bool {
        self.items
            .iter()
            .any(|item| dom::is_target(event, item) && item.class_list().contains("active"))
    }
}

/// Every carousel on the page, indexed by [`CarouselId::index`].
type Rendered = Rc<Vec<Slides>>;

fn render(slides: &Rendered, id: CarouselId, change: SlideChange) {
    if let Some(member) = slides.get(id.index()) {
        member.render(change);
    }
}

/// Wire every carousel on the page to one shared auto-advance timer.
pub(crate) fn install() -> Result<(), JsValue> {
    let document = dom::document()?;
    let config = CarouselConfig::default();
    let mut group = CarouselGroup::new(config.auto_advance);
    let mut roots = Vec::new();
    let mut slides = Vec::new();
    for root in dom::query_all(&document, CAROUSEL)? {
        let items = dom::query_all_in(&root, CAROUSEL_ITEM)?;
        let Some(carousel) = Carousel::new(items.len(), config) else {
            console::warn!("vitrine: skipping carousel without slides");
            continue;
        };
        roots.push((group.insert(carousel), root.clone()));
        slides.push(Slides {
            items,
            indicators: dom::query_all_in(&root, CAROUSEL_INDICATOR)?,
        });
    }
    if roots.is_empty() {
        return Ok(());
    }

    let slides: Rendered = Rc::new(slides);
    let driver = Driver::new(group, {
        let slides = Rc::clone(&slides);
        move |changes: Vec<(CarouselId, SlideChange)>| {
            for (id, change) in changes {
                render(&slides, id, change);
            }
        }
    });

    for (id, root) in &roots {
        let member = Member {
            id: *id,
            driver: driver.clone(),
            slides: Rc::clone(&slides),
        };
        for prev in dom::query_all_in(root, CAROUSEL_PREV)? {
            member.control(&prev, CarouselInput::Prev);
        }
        for next in dom::query_all_in(root, CAROUSEL_NEXT)? {
            member.control(&next, CarouselInput::Next);
        }
        let indicators = dom::query_all_in(root, CAROUSEL_INDICATOR)?;
        for (index, indicator) in indicators.iter().enumerate() {
            member.control(indicator, CarouselInput::JumpTo(index));
        }
        member.listen(root, "touchstart", |event| {
            touch_x(event).map(|x| CarouselInput::TouchStart { x })
        });
        member.listen(root, "touchend", |event| {
            touch_x(event).map(|x| CarouselInput::TouchEnd { x })
        });
        member.listen(root, "mouseenter", |_| Some(CarouselInput::PointerEnter));
        member.listen(root, "mouseleave", |_| Some(CarouselInput::PointerLeave));
        let settled = Rc::clone(&slides);
        let index = id.index();
        member.listen(root, "transitionend", move |event| {
            settled
                .get(index)?
                .is_incoming(event)
                .then_some(CarouselInput::TransitionEnd)
        });
        member.listen(root, "keydown", |event| {
            let key = event.dyn_ref::<KeyboardEvent>()?.key();
            Key::from_dom(&key).map(CarouselInput::Key)
        });
    }

    driver.update(|group, now| group.start(now));
    console::log!(format!("vitrine: {} carousel(s) ready", roots.len()));
    Ok(())
}

/// Listener context for one carousel.
#[derive(Clone)]
struct Member {
    id: CarouselId,
    driver: Driver<CarouselGroup>,
    slides: Rendered,
}

impl Member {
    fn send(&self, input: CarouselInput) {
        let id = self.id;
        if let Some(change) = self.driver.update(|group, now| group.handle(id, input, now)) {
            render(&self.slides, id, change);
        }
    }

    /// Forward `event` on `target` to this carousel when `input` maps it.
    fn listen(
        &self,
        target: &Element,
        event: &'static str,
        input: impl Fn(&Event) -> Option<CarouselInput> + 'static,
    ) {
        let member = self.clone();
        EventListener::new(target, event, move |event| {
            if let Some(input) = input(event) {
                member.send(input);
            }
        })
        .forget();
    }

    /// Forward clicks on a control; controls are `href="#"` links, so the
    /// default navigation is cancelled.
    fn control(&self, target: &Element, input: CarouselInput) {
        let member = self.clone();
        EventListener::new_with_options(
            target,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                member.send(input);
            },
        )
        .forget();
    }
}

fn touch_x(event: &Event) -> Option<f64> {
    dom::first_screen_x(&event.dyn_ref::<TouchEvent>()?.changed_touches())
}
