//! Fluxo - landing page
//!
//! Marketing page for the Fluxo scheduling app, rendered on the server with
//! Leptos and hydrated in the browser with WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::core::mount::{ROOT_ID, mount_into};
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    let container = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(ROOT_ID))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());

    // No container, no page: nothing to report
    mount_into(container, |root| {
        leptos::mount::hydrate_from(root, App).forget();
    });
}
