// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use gloo::events::EventListener;
use vitrine_gesture::key::Key;
use vitrine_modal::{DocumentModal, ModalConfig, ModalEffect, ModalInput, ViewerParams};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget, HtmlElement, KeyboardEvent};

use crate::contract::{
    DOCUMENT_CLOSE, DOCUMENT_MODAL, DOCUMENT_OPENERS, DOCUMENT_PATH, DOCUMENT_VIEWER, FLOATING_NAV,
};
use crate::dom;
use crate::scheduler::Driver;

struct Page {
    modal: HtmlElement,
    viewer: Option<Element>,
    floating: Vec<HtmlElement>,
    body: Option<HtmlElement>,
}

impl Page {
    fn apply(&self, effects: Vec<ModalEffect>) {
        for effect in effects {
            match effect {
                ModalEffect::HideFloatingNav => self.floating_visibility("hidden"),
                ModalEffect::ShowFloatingNav => self.floating_visibility("visible"),
                ModalEffect::Display(shown) => {
                    dom::set_style(&self.modal, "display", if shown { "block" } else { "none" });
                }
                ModalEffect::AddShowClass => dom::set_class(&self.modal, "show", true),
                ModalEffect::RemoveShowClass => dom::set_class(&self.modal, "show", false),
                ModalEffect::LoadDocument(url) => self.set_source(&url),
                ModalEffect::ClearDocument => self.set_source(""),
                ModalEffect::LockScroll(locked) => {
                    if let Some(body) = &self.body {
                        dom::set_style(body, "overflow", if locked { "hidden" } else { "" });
                    }
                }
            }
        }
    }

    fn floating_visibility(&self, visibility: &str) {
        for control in &self.floating {
            dom::set_style(control, "visibility", visibility);
        }
    }

    fn set_source(&self, url: &str) {
        if let Some(viewer) = &self.viewer {
            let _ = viewer.set_attribute("src", url);
        }
    }
}

/// Wire the document modal, if the page has one.
pub(crate) fn install() -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(modal) = dom::by_id::<HtmlElement>(&document, DOCUMENT_MODAL) else {
        return Ok(());
    };
    let page = Rc::new(Page {
        modal: modal.clone(),
        viewer: document.get_element_by_id(DOCUMENT_VIEWER),
        floating: dom::query_all_html(&document, FLOATING_NAV)?,
        body: document.body(),
    });

    let url = ViewerParams::default().url(DOCUMENT_PATH);
    let driver = Driver::new(DocumentModal::new(url, ModalConfig::default()), {
        let page = Rc::clone(&page);
        move |effects| page.apply(effects)
    });

    let listen = |target: &EventTarget,
                  event: &'static str,
                  input: fn(&Event, &Element) -> Option<ModalInput>| {
        let driver = driver.clone();
        let page = Rc::clone(&page);
        EventListener::new(target, event, move |event| {
            if let Some(input) = input(event, &page.modal) {
                let effects = driver.update(|modal, now| modal.handle(input, now));
                page.apply(effects);
            }
        })
        .forget();
    };

    for opener in dom::query_all(&document, DOCUMENT_OPENERS)? {
        listen(&opener, "click", |_, _| Some(ModalInput::Open));
    }
    if let Some(close) = dom::query(&document, DOCUMENT_CLOSE)? {
        listen(&close, "click", |_, _| Some(ModalInput::Close));
    }
    listen(&dom::window()?, "click", |event, modal| {
        dom::is_target(event, modal).then_some(ModalInput::BackdropClick)
    });
    listen(&document, "keydown", |event, _| {
        let key = event.dyn_ref::<KeyboardEvent>()?.key();
        Key::from_dom(&key).map(ModalInput::Key)
    });
    listen(&modal, "transitionend", |event, modal| {
        dom::is_target(event, modal).then_some(ModalInput::TransitionEnd)
    });
    Ok(())
}
