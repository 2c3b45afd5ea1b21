use hoyodex_core::{Game, context_menu};
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct ContextMenuProps {
    /// `None` hides the menu.
    pub game: Option<Game>,
    #[prop_or_default]
    pub active_view: Option<AttrValue>,
    pub on_navigate: Callback<String>,
}

/// Per-game section switcher.
#[function_component(ContextMenu)]
pub fn context_menu_view(props: &ContextMenuProps) -> Html {
    let Some(game) = props.game else {
        return html! { <nav id="context-menu" class="context-menu" hidden={true}></nav> };
    };

    html! {
        <nav id="context-menu" class="context-menu visible" aria-label={t("nav.views")}>
            { for context_menu(game).into_iter().map(|entry| {
                let active = props.active_view.as_deref() == Some(entry.view.as_str());
                let onclick = {
                    let cb = props.on_navigate.clone();
                    let href = entry.href.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(href.clone()))
                };
                html! {
                    <button
                        type="button"
                        class={classes!(active.then_some("active"))}
                        data-view={entry.view.as_str()}
                        {onclick}
                    >
                        { t(&entry.label_key) }
                    </button>
                }
            }) }
        </nav>
    }
}
