use std::collections::BTreeMap;

use yew::prelude::*;

use crate::i18n;
use crate::paths::asset_path;

#[derive(Properties, PartialEq, Clone)]
pub struct RarityBadgeProps {
    /// Relative badge path.
    pub src: AttrValue,
    pub rarity: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Rarity badge, removed entirely when the image fails to load.
#[function_component(RarityBadge)]
pub fn rarity_badge(props: &RarityBadgeProps) -> Html {
    let failed = use_state(|| false);
    if *failed {
        return Html::default();
    }

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };
    let mut vars = BTreeMap::new();
    vars.insert("rarity", props.rarity.as_str());
    let alt = i18n::tr("ui.rarity", Some(&vars));
    html! {
        <img
            class={classes!("rarity-icon", props.class.clone())}
            src={asset_path(&props.src)}
            {alt}
            {onerror}
        />
    }
}
