use hoyodex_core::{DetailScreen, Portrait};
use yew::prelude::*;

use crate::components::icon::IconRow;
use crate::components::kit::KitList;
use crate::components::rarity_badge::RarityBadge;
use crate::paths::asset_path;

#[derive(Properties, PartialEq)]
pub struct EntityDetailProps {
    pub detail: DetailScreen,
}

/// Profile for a single entry; characters also show their kit.
#[function_component(EntityDetail)]
pub fn entity_detail(props: &EntityDetailProps) -> Html {
    let detail = &props.detail;
    let portrait = detail.portrait.as_ref().map(|portrait| match portrait {
        Portrait::Asset(path) => asset_path(path),
        Portrait::Supplied(src) => src.clone(),
    });

    html! {
        <section class="character-profile" data-view={detail.view.as_str()}>
            { portrait.map(|src| html! {
                <img class="portrait" {src} alt={detail.name.clone()} />
            }) }
            <h2>{ detail.name.clone() }</h2>
            { detail.rarity_badge.as_ref().zip(detail.rarity.as_ref()).map(|(src, rarity)| html! {
                <RarityBadge src={AttrValue::from(src.clone())} rarity={AttrValue::from(rarity.to_string())} />
            }) }
            if !detail.icons.is_empty() {
                <IconRow icons={detail.icons.clone()} class="character-icons" />
            }
            <p class="summary">{ detail.summary.clone() }</p>
            { detail.kit.as_ref().map(|skills| html! { <KitList skills={skills.clone()} /> }) }
        </section>
    }
}
