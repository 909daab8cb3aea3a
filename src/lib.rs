//! Dr. Amira's Love Autopsy Lab.
//!
//! A single-page WASM novelty game: give a victim statement, click
//! through the failed organs of a dead situationship, and close the
//! case. The session logic (screens, collection, secret unlock, share
//! tokens) is plain Rust and host-testable; everything browser-facing
//! lives behind [`start_lab`].

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod flow;
pub mod secret;
pub mod share;

mod fx;
mod sched;
mod snapshot;
mod ui;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Mount the lab into the current document and take over the page.
#[wasm_bindgen]
pub fn start_lab() -> Result<(), JsValue> {
    ui::start()
}
