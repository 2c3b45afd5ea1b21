use hoyodex_core::EquipmentCard as Card;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EquipmentCardProps {
    pub card: Card,
}

#[function_component(EquipmentCard)]
pub fn equipment_card(props: &EquipmentCardProps) -> Html {
    html! {
        <a class="equipment-card" href={props.card.href.clone()}>
            <h2>{ props.card.name.clone() }</h2>
        </a>
    }
}
