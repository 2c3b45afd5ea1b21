use yew::prelude::*;

use crate::app::state::Session;
use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::context_menu::ContextMenu;
use crate::components::header::Header;
use crate::pages::catalog::Catalog;

#[derive(Properties, PartialEq, Clone)]
pub struct ShellProps {
    pub session: Session,
    pub current_lang: String,
    pub on_navigate: Callback<String>,
    pub on_lang_change: Callback<String>,
}

/// Page chrome around the content area, rendered from a session snapshot.
#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    let session = &props.session;
    let active_view = session
        .route
        .as_ref()
        .map(|route| AttrValue::from(route.view.clone()));

    // Subtrees calling `t()` are keyed on the language so they remount when it changes.
    let lang = &props.current_lang;

    html! {
        <>
            <Header
                key="header"
                active_game={session.active_game()}
                current_lang={lang.clone()}
                on_navigate={props.on_navigate.clone()}
                on_lang_change={props.on_lang_change.clone()}
            />
            <ContextMenu
                key={format!("menu-{lang}")}
                game={session.menu_game}
                {active_view}
                on_navigate={props.on_navigate.clone()}
            />
            <Breadcrumbs key={format!("crumbs-{lang}")} items={session.crumbs.clone()} />
            <Catalog key={format!("content-{lang}")} screen={session.screen.clone()} />
        </>
    }
}

pub fn render_app(
    session: &UseStateHandle<Session>,
    lang: &UseStateHandle<String>,
    on_navigate: Callback<String>,
    on_lang_change: Callback<String>,
) -> Html {
    html! {
        <Shell
            session={(**session).clone()}
            current_lang={(**lang).clone()}
            {on_navigate}
            {on_lang_change}
        />
    }
}
