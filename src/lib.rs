//! Neoverse - landing page with a testimonial carousel and waitlist signup
//!
//! Server-rendered with Leptos and hydrated in the browser through WebAssembly.
//! The interaction state lives in [`core`]; [`ui`] renders it.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(App);
}
