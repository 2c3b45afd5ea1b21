use yew::prelude::*;

pub mod routing;
pub mod state;
pub mod view;

pub use state::Session;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_state(Session::blank);
    let lang = use_state(crate::i18n::current_lang);
    routing::use_hash_router(&session);

    let on_navigate = Callback::from(|href: String| crate::dom::set_hash(&href));
    let on_lang_change = {
        let lang = lang.clone();
        Callback::from(move |code: String| lang.set(code))
    };

    view::render_app(&session, &lang, on_navigate, on_lang_change)
}
