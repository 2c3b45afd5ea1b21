use hoyodex_core::CharacterCard as Card;
use yew::prelude::*;

use crate::components::icon::IconRow;
use crate::components::rarity_badge::RarityBadge;
use crate::paths::asset_path;

#[derive(Properties, PartialEq, Clone)]
pub struct CharacterCardProps {
    pub card: Card,
}

/// List entry linking to the character's detail route.
#[function_component(CharacterCard)]
pub fn character_card(props: &CharacterCardProps) -> Html {
    let card = &props.card;
    let entity = &card.entity;
    let rarity_class = format!("rarity-{}", entity.game);

    html! {
        <a class="character-card" href={card.href.clone()} data-id={entity.id.clone()}>
            <div class="portrait-container">
                <img class="portrait" src={asset_path(&card.avatar)} alt={entity.name.clone()} />
                { card.rarity_badge.as_ref().zip(entity.rarity.as_ref()).map(|(src, rarity)| html! {
                    <RarityBadge
                        src={AttrValue::from(src.clone())}
                        rarity={AttrValue::from(rarity.to_string())}
                        class={classes!(rarity_class.clone())}
                    />
                }) }
            </div>
            <h3>{ entity.name.clone() }</h3>
            <IconRow icons={card.icons.clone()} />
        </a>
    }
}
