//! Rewards Portal - Leptos Frontend
//!
//! Login, dashboard and admin pages over the rewards backend.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panics surface in the browser console instead of "unreachable executed"
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Rewards portal starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
