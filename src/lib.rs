//! # macrolog-client
//!
//! Leptos + WASM frontend for the Macrolog diet-tracking application.
//! Covers ingredient CRUD against the REST backend: a server-paginated,
//! searchable, sortable ingredient table plus the create/edit/detail
//! modals that keep it in sync.
//!
//! This crate contains pages, components, application state, and the
//! typed network layer. The backend is an external collaborator reached
//! only via the endpoints wrapped in [`net::api`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
