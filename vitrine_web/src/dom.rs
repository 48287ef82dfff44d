// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small DOM conveniences shared by the components.

use kurbo::Point;
use vitrine_timing::Millis;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions,
    Touch, TouchList, Window,
};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Milliseconds since the epoch, truncated.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Date.now() is a non-negative integral millisecond count"
)]
pub(crate) fn now() -> Millis {
    js_sys::Date::now() as Millis
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Every element in the document matching `selector`.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    document.query_selector_all(selector).map(elements)
}

/// Every descendant of `root` matching `selector`.
pub(crate) fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    root.query_selector_all(selector).map(elements)
}

/// Every element matching `selector`, as `HtmlElement`s.
pub(crate) fn query_all_html(
    document: &Document,
    selector: &str,
) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(query_all(document, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// The first element matching `selector`, if any.
pub(crate) fn query(document: &Document, selector: &str) -> Result<Option<Element>, JsValue> {
    document.query_selector(selector)
}

/// The element with `id` as a `T`, if present and of that type.
pub(crate) fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// The event's target as an element.
pub(crate) fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Returns `true` if `event` was dispatched at `element` itself.
pub(crate) fn is_target(event: &Event, element: &impl AsRef<EventTarget>) -> bool {
    event
        .target()
        .is_some_and(|target| &target == element.as_ref())
}

/// Closest ancestor-or-self of the event target matching `selector`.
pub(crate) fn closest(event: &Event, selector: &str) -> Option<Element> {
    target_element(event)?.closest(selector).ok().flatten()
}

/// Add or remove `class` on `element`.
pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    // Only fails for invalid class tokens, which are all literals here.
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Set an inline style property.
pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

/// Smoothly scroll `element` to a vertical offset.
pub(crate) fn smooth_scroll_to(element: &Element, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_to_with_scroll_to_options(&options);
}

fn client_point(touch: &Touch) -> Point {
    Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()))
}

/// Client coordinates of every touch in `list`.
pub(crate) fn touch_points(list: &TouchList) -> Vec<Point> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|touch| client_point(&touch))
        .collect()
}

/// Horizontal screen coordinate of the first touch in `list`.
pub(crate) fn first_screen_x(list: &TouchList) -> Option<f64> {
    list.get(0).map(|touch| f64::from(touch.screen_x()))
}

/// Current viewport width in CSS pixels.
pub(crate) fn viewport_width() -> Option<f64> {
    window().ok()?.inner_width().ok()?.as_f64()
}
