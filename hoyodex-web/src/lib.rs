#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod loader;
pub mod logging;
pub mod pages;
pub mod paths;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
    // Ensure <html lang> is set at startup according to saved locale
    crate::i18n::set_lang(&crate::i18n::current_lang());

    let pathname = dom::location_pathname().unwrap_or_default();
    if paths::is_character_page(&pathname) {
        yew::Renderer::<pages::character::CharacterPage>::new().render();
    } else {
        yew::Renderer::<app::App>::new().render();
    }
}
