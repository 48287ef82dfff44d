// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Web: the browser host for the Vitrine components.
//!
//! This crate owns everything the state machine crates leave out: it finds
//! elements with the selectors in [`contract`], turns DOM events into
//! component inputs, applies the resulting effects, and arms a single
//! `setTimeout` per component at that component's `next_deadline()`.
//!
//! Build it for `wasm32-unknown-unknown` and load it with `wasm-bindgen`'s
//! generated glue; [`start`] runs automatically once the module is
//! instantiated. Components whose markup is missing from the page are
//! skipped, so the same module serves the portfolio and report pages.
//!
//! On other targets only [`contract`] is compiled, which keeps the markup
//! rules testable natively.

pub mod contract;

#[cfg(target_arch = "wasm32")]
mod carousel;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod lightbox;
#[cfg(target_arch = "wasm32")]
mod modal;
#[cfg(target_arch = "wasm32")]
mod nav;
#[cfg(target_arch = "wasm32")]
mod notify;
#[cfg(target_arch = "wasm32")]
mod scheduler;
#[cfg(target_arch = "wasm32")]
mod tabs;

#[cfg(target_arch = "wasm32")]
pub use web::start;

#[cfg(target_arch = "wasm32")]
mod web {
    use gloo::console;
    use gloo::events::EventListener;
    use wasm_bindgen::prelude::*;
    use web_sys::ScrollRestoration;

    use crate::dom;

    /// Module entry point: installs every component once the DOM is parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no `window` or `document`. Failures of
    /// individual components are logged and do not stop the others.
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        let document = dom::document()?;
        if document.ready_state() == "loading" {
            EventListener::once(&document, "DOMContentLoaded", |_| install_all()).forget();
        } else {
            install_all();
        }
        Ok(())
    }

    fn install_all() {
        if let Ok(history) = dom::window().and_then(|w| w.history()) {
            // Sidebar highlighting assumes the page starts at the top.
            let _ = history.set_scroll_restoration(ScrollRestoration::Manual);
        }

        let components: [(&str, fn() -> Result<(), JsValue>); 7] = [
            ("carousel", crate::carousel::install),
            ("lightbox", crate::lightbox::install),
            ("tabs", crate::tabs::install),
            ("document modal", crate::modal::install),
            ("navigation", crate::nav::install),
            ("table of contents", crate::nav::install_toc),
            ("report feedback", crate::notify::install),
        ];
        for (name, install) in components {
            if let Err(err) = install() {
                console::error!(format!("vitrine: failed to install {name}"), err);
            }
        }
    }
}
