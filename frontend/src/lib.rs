//! WASM entry point: mounts the book layout into the page body.

use book_ui::App;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("mounting book layout");
    leptos::mount::mount_to_body(App);
}
