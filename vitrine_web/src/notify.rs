// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use js_sys::{Function, Promise, Reflect};
use vitrine_notify::{
    CaptionKind, EQUATION_NUMBER_SELECTOR, NotifyConfig, REFERENCE_LINK_SELECTOR, ToastId,
    copied_message, strip_equation_label,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;
use crate::scheduler::{Driver, Feedback};

const HIGHLIGHT_BACKGROUND: &str = "#fff3cd";

const TOAST_STYLE: &str = "position: fixed; top: 20px; right: 20px; background: #28a745; \
    color: white; padding: 10px 20px; border-radius: 4px; z-index: 10000; font-size: 14px; \
    box-shadow: 0 2px 8px rgba(0,0,0,0.2);";

/// Elements the feedback timers refer to.
#[derive(Default)]
struct Registry {
    /// Highlight targets; a target's key is its position here.
    targets: RefCell<Vec<HtmlElement>>,
    toasts: RefCell<Vec<(ToastId, Element)>>,
}

impl Registry {
    fn key_of(&self, target: &HtmlElement) -> usize {
        let mut targets = self.targets.borrow_mut();
        if let Some(key) = targets.iter().position(|t| t == target) {
            return key;
        }
        targets.push(target.clone());
        targets.len() - 1
    }

    fn expire(&self, highlights: Vec<usize>, toasts: Vec<ToastId>) {
        let targets = self.targets.borrow();
        for key in highlights {
            if let Some(target) = targets.get(key) {
                dom::set_style(target, "background-color", "");
            }
        }
        self.toasts.borrow_mut().retain(|(id, element)| {
            let expired = toasts.contains(id);
            if expired {
                element.remove();
            }
            !expired
        });
    }
}

/// Wire reference highlighting, caption copying and equation labels on report pages.
pub(crate) fn install() -> Result<(), JsValue> {
    let document = dom::document()?;

    for number in dom::query_all(&document, EQUATION_NUMBER_SELECTOR)? {
        if let Some(label) = number.text_content() {
            number.set_text_content(Some(&strip_equation_label(&label)));
        }
    }

    let config = NotifyConfig::default();
    let registry = Rc::new(Registry::default());
    let driver = Driver::new(
        Feedback {
            highlights: config.highlights(),
            toasts: config.toasts(),
        },
        {
            let registry = Rc::clone(&registry);
            move |(highlights, toasts)| registry.expire(highlights, toasts)
        },
    );

    for link in dom::query_all(&document, REFERENCE_LINK_SELECTOR)? {
        let registry = Rc::clone(&registry);
        let driver = driver.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let Some(target) = href
                    .strip_prefix('#')
                    .and_then(|id| dom::by_id::<HtmlElement>(&dom::document().ok()?, id))
                else {
                    return;
                };
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Center);
                target.scroll_into_view_with_scroll_into_view_options(&options);
                dom::set_style(&target, "background-color", HIGHLIGHT_BACKGROUND);
                let key = registry.key_of(&target);
                driver.update(|feedback, now| feedback.highlights.flash(key, now));
            },
        )
        .forget();
    }

    for kind in CaptionKind::ALL {
        for container in dom::query_all(&document, kind.container_selector())? {
            let registry = Rc::clone(&registry);
            let driver = driver.clone();
            let source = container.clone();
            EventListener::new(&container, "click", move |_| {
                let Some(caption) = source
                    .query_selector(kind.caption_selector())
                    .ok()
                    .flatten()
                    .and_then(|caption| caption.text_content())
                else {
                    return;
                };
                copy_caption(caption, Rc::clone(&registry), driver.clone());
            })
            .forget();
        }
    }
    Ok(())
}

/// Copy `caption` to the clipboard and confirm with a toast once it lands.
fn copy_caption(caption: String, registry: Rc<Registry>, driver: Driver<Feedback>) {
    let promise = match write_text(&caption) {
        Ok(promise) => promise,
        Err(err) => {
            console::warn!("vitrine: clipboard unavailable", err);
            return;
        }
    };
    spawn_local(async move {
        // A rejected write (no permission, no focus) gets no toast.
        if JsFuture::from(promise).await.is_err() {
            return;
        }
        let message = copied_message(&caption);
        let Ok(element) = toast_element(&message) else {
            return;
        };
        let id = driver.update(|feedback, now| feedback.toasts.show(message, now));
        registry.toasts.borrow_mut().push((id, element));
    });
}

/// `navigator.clipboard.writeText(text)`.
fn write_text(text: &str) -> Result<Promise, JsValue> {
    let navigator = dom::window()?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into::<Function>()?;
    write
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<Promise>()
}

fn toast_element(message: &str) -> Result<Element, JsValue> {
    let document = dom::document()?;
    let element = document.create_element("div")?;
    element.set_attribute("style", TOAST_STYLE)?;
    element.set_text_content(Some(message));
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&element)?;
    Ok(element)
}
