// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use kurbo::Point;
use vitrine_gesture::key::Key;
use vitrine_lightbox::{
    Lightbox, LightboxConfig, LightboxEffect, LightboxInput, Mode, Platform, Target, Touches,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent, MouseEvent,
    TouchEvent, WheelEvent,
};

use crate::contract::{
    GALLERY_ITEM, LIGHTBOX, LIGHTBOX_ARROW, LIGHTBOX_CONTENT, LIGHTBOX_IMAGE, LIGHTBOX_NEXT,
    LIGHTBOX_PREV, ZOOM_IN, ZOOM_OUT,
};
use crate::dom;

/// The overlay's elements plus the gallery it pages through.
struct View {
    modal: Element,
    image: HtmlImageElement,
    sources: Vec<String>,
}

impl View {
    fn classify(&self, event: &Event) -> Target {
        if dom::is_target(event, &self.image) {
            Target::Image
        } else if dom::closest(event, LIGHTBOX_ARROW).is_some() {
            Target::NavArrow
        } else if dom::is_target(event, &self.modal) {
            Target::Backdrop
        } else {
            Target::Content
        }
    }

    fn apply(&self, effects: Vec<LightboxEffect>) {
        let image: &HtmlElement = &self.image;
        for effect in effects {
            match effect {
                LightboxEffect::Show => dom::set_class(&self.modal, "show", true),
                LightboxEffect::Hide => dom::set_class(&self.modal, "show", false),
                LightboxEffect::LoadImage(index) => {
                    if let Some(src) = self.sources.get(index) {
                        self.image.set_src(src);
                    }
                }
                LightboxEffect::Transform(view) => {
                    dom::set_style(image, "transform", &view.css_transform());
                }
                LightboxEffect::Grabbing(grabbing) => {
                    dom::set_style(image, "cursor", if grabbing { "grabbing" } else { "grab" });
                }
            }
        }
    }
}

/// Shared lightbox state, borrowed only while the state machine runs.
#[derive(Clone)]
struct Host {
    lightbox: Rc<RefCell<Lightbox>>,
    view: Rc<View>,
}

impl Host {
    fn send(&self, input: LightboxInput) {
        let effects = self.lightbox.borrow_mut().handle(input, dom::now());
        self.view.apply(effects);
    }

    fn is_open(&self) -> bool {
        self.lightbox.borrow().is_open()
    }

    fn mode(&self) -> Mode {
        self.lightbox.borrow().mode()
    }

    /// Classify `event`, swallowing it when it landed on the image.
    fn claim(&self, event: &Event) -> Target {
        let target = self.view.classify(event);
        if target == Target::Image {
            event.prevent_default();
            event.stop_propagation();
        }
        target
    }

    /// Map `event` on `target` to an input, optionally swallowing it.
    fn listen(
        &self,
        target: &EventTarget,
        event: &'static str,
        capture: Capture,
        input: impl Fn(&Self, &Event) -> Option<LightboxInput> + 'static,
    ) {
        let host = self.clone();
        let callback = move |event: &Event| {
            match capture {
                Capture::Passive | Capture::Active => {}
                Capture::PreventDefault => event.prevent_default(),
                Capture::StopPropagation => event.stop_propagation(),
            }
            if let Some(input) = input(&host, event) {
                host.send(input);
            }
        };
        match capture {
            Capture::Active | Capture::PreventDefault => EventListener::new_with_options(
                target,
                event,
                EventListenerOptions::enable_prevent_default(),
                callback,
            ),
            Capture::Passive | Capture::StopPropagation => {
                EventListener::new(target, event, callback)
            }
        }
        .forget();
    }
}

/// What a listener does to the event before mapping it.
#[derive(Clone, Copy)]
enum Capture {
    Passive,
    /// May call `preventDefault` itself.
    Active,
    PreventDefault,
    StopPropagation,
}

/// Wire the gallery lightbox, if the page has one.
pub(crate) fn install() -> Result<(), JsValue> {
    let document = dom::document()?;
    let (Some(modal), Some(image)) = (
        document.get_element_by_id(LIGHTBOX),
        dom::by_id::<HtmlImageElement>(&document, LIGHTBOX_IMAGE),
    ) else {
        return Ok(());
    };

    let items = dom::query_all(&document, GALLERY_ITEM)?;
    let sources = items
        .iter()
        .map(|item| {
            item.query_selector("img")
                .ok()
                .flatten()
                .and_then(|img| img.dyn_into::<HtmlImageElement>().ok())
                .map(|img| img.src())
                .unwrap_or_default()
        })
        .collect();

    let config = LightboxConfig::default();
    let width = dom::viewport_width().unwrap_or_default();
    let platform = Platform::from_viewport_width(width, &config);
    let host = Host {
        lightbox: Rc::new(RefCell::new(Lightbox::new(items.len(), config, platform))),
        view: Rc::new(View {
            modal: modal.clone(),
            image: image.clone(),
            sources,
        }),
    };

    for (index, item) in items.iter().enumerate() {
        host.listen(item, "click", Capture::Passive, move |_, _| {
            Some(LightboxInput::Open(index))
        });
    }

    host.listen(&image, "load", Capture::Passive, |host, _| {
        host.lightbox
            .borrow()
            .index()
            .map(LightboxInput::ImageLoaded)
    });

    if let Some(content) = dom::query(&document, LIGHTBOX_CONTENT)? {
        content_listeners(&host, &content);
    }

    host.listen(&document, "mousemove", Capture::Active, |host, event| {
        if host.mode() != Mode::Panning {
            return None;
        }
        event.prevent_default();
        mouse_pos(event).map(|pos| LightboxInput::MouseMove { pos })
    });
    host.listen(&document, "mouseup", Capture::Active, |host, event| {
        if host.mode() != Mode::Panning {
            return None;
        }
        event.prevent_default();
        mouse_pos(event).map(|pos| LightboxInput::MouseUp { pos })
    });

    host.listen(&modal, "touchend", Capture::Passive, |host, event| {
        dom::is_target(event, &host.view.modal).then_some(LightboxInput::TouchEnd {
            target: Target::Backdrop,
            remaining: None,
        })
    });
    host.listen(&modal, "click", Capture::Passive, |host, event| {
        Some(LightboxInput::Click {
            target: host.view.classify(event),
        })
    });

    for (selector, input) in [
        (LIGHTBOX_PREV, LightboxInput::Navigate(-1)),
        (LIGHTBOX_NEXT, LightboxInput::Navigate(1)),
        (ZOOM_IN, LightboxInput::ZoomIn),
        (ZOOM_OUT, LightboxInput::ZoomOut),
    ] {
        if let Some(button) = dom::query(&document, selector)? {
            host.listen(&button, "click", Capture::StopPropagation, move |_, _| {
                Some(input)
            });
        }
    }

    host.listen(&document, "keydown", Capture::Passive, |host, event| {
        if !host.is_open() {
            return None;
        }
        let key = event.dyn_ref::<KeyboardEvent>()?.key();
        Key::from_dom(&key).map(LightboxInput::Key)
    });

    let window = dom::window()?;
    host.listen(&window, "resize", Capture::Passive, |_, _| {
        dom::viewport_width().map(|width| LightboxInput::Resize { width })
    });
    Ok(())
}

/// Pointer, touch and wheel input over the image area.
///
/// Touches on the image never scroll or zoom the page; touches elsewhere in
/// the content keep their default so the zoom buttons still receive clicks.
fn content_listeners(host: &Host, content: &Element) {
    host.listen(content, "mousedown", Capture::Active, |host, event| {
        let target = host.claim(event);
        mouse_pos(event).map(|pos| LightboxInput::MouseDown { target, pos })
    });
    host.listen(content, "touchstart", Capture::Active, |host, event| {
        let target = host.claim(event);
        let touches = Touches::from_points(&touch_points(event, TouchEvent::touches))?;
        Some(LightboxInput::TouchStart { target, touches })
    });
    host.listen(content, "touchmove", Capture::Active, |host, event| {
        host.claim(event);
        let touches = Touches::from_points(&touch_points(event, TouchEvent::touches))?;
        Some(LightboxInput::TouchMove { touches })
    });
    host.listen(content, "touchend", Capture::Active, |host, event| {
        let target = host.claim(event);
        let remaining = touch_points(event, TouchEvent::touches).first().copied();
        Some(LightboxInput::TouchEnd { target, remaining })
    });
    host.listen(content, "wheel", Capture::PreventDefault, |_, event| {
        let delta_y = event.dyn_ref::<WheelEvent>()?.delta_y();
        Some(LightboxInput::Wheel { delta_y })
    });
}

fn mouse_pos(event: &Event) -> Option<Point> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    ))
}

fn touch_points(event: &Event, list: fn(&TouchEvent) -> web_sys::TouchList) -> Vec<Point> {
    event
        .dyn_ref::<TouchEvent>()
        .map(|event| dom::touch_points(&list(event)))
        .unwrap_or_default()
}
