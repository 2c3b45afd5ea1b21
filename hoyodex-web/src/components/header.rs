use hoyodex_core::Game;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::i18n::{locales, set_lang, t};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active_game: Option<Game>,
    pub current_lang: String,
    pub on_navigate: Callback<String>,
    pub on_lang_change: Callback<String>,
}

/// Game selector and language picker.
#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };

    html! {
        <header role="banner">
            <nav class="game-selector" aria-label={t("nav.games")}>
                { for Game::ALL.into_iter().map(|game| {
                    let onclick = {
                        let cb = p.on_navigate.clone();
                        Callback::from(move |_: MouseEvent| cb.emit(format!("#{game}/characters")))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!((p.active_game == Some(game)).then_some("active"))}
                            data-game={game.as_str()}
                            {onclick}
                        >
                            { t(&format!("games.{game}")) }
                        </button>
                    }
                }) }
            </nav>
            <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
            <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                { for locales().iter().map(|meta| html! {
                    <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                }) }
            </select>
        </header>
    }
}
