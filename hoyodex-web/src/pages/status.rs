use yew::prelude::*;

use crate::i18n::t;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    LoadError,
    EntityNotFound,
    ViewUnavailable,
    InvalidParams,
    CharacterNotFound,
}

impl StatusKind {
    const fn key(self) -> &'static str {
        match self {
            Self::Loading => "ui.loading",
            Self::LoadError => "ui.load_error",
            Self::EntityNotFound => "ui.entity_not_found",
            Self::ViewUnavailable => "ui.view_unavailable",
            Self::InvalidParams => "ui.invalid_params",
            Self::CharacterNotFound => "ui.character_not_found",
        }
    }

    const fn is_error(self) -> bool {
        !matches!(self, Self::Loading)
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub kind: StatusKind,
}

/// Placeholder shown in place of content.
#[function_component(StatusMessage)]
pub fn status_message(props: &Props) -> Html {
    let class = classes!("status", props.kind.is_error().then_some("status-error"));
    let live = if props.kind.is_error() { "assertive" } else { "polite" };
    html! {
        <p {class} aria-live={live}>{ t(props.kind.key()) }</p>
    }
}
