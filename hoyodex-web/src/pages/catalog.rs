use hoyodex_core::{ListScreen, Screen};
use yew::prelude::*;

use crate::components::character_card::CharacterCard;
use crate::components::equipment_card::EquipmentCard;
use crate::pages::detail::EntityDetail;
use crate::pages::status::{StatusKind, StatusMessage};

#[derive(Properties, PartialEq)]
pub struct CatalogProps {
    pub screen: Screen,
}

/// Content area. Every render replaces it entirely.
#[function_component(Catalog)]
pub fn catalog(props: &CatalogProps) -> Html {
    let body = match &props.screen {
        Screen::Blank => Html::default(),
        Screen::Loading => html! { <StatusMessage kind={StatusKind::Loading} /> },
        Screen::Failed => html! { <StatusMessage kind={StatusKind::LoadError} /> },
        Screen::EntityNotFound => html! { <StatusMessage kind={StatusKind::EntityNotFound} /> },
        Screen::ViewUnavailable => html! { <StatusMessage kind={StatusKind::ViewUnavailable} /> },
        Screen::List(ListScreen::Characters(cards)) => html! {
            <div class="card-grid characters">
                { for cards.iter().enumerate().map(|(idx, card)| html! {
                    <CharacterCard key={idx} card={card.clone()} />
                }) }
            </div>
        },
        Screen::List(ListScreen::Equipment { view, cards }) => html! {
            <div class={classes!("card-grid", view.as_str())}>
                { for cards.iter().enumerate().map(|(idx, card)| html! {
                    <EquipmentCard key={idx} card={card.clone()} />
                }) }
            </div>
        },
        Screen::Detail(detail) => html! { <EntityDetail detail={(**detail).clone()} /> },
    };

    html! {
        <main id="content">{ body }</main>
    }
}
