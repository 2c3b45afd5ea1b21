use hoyodex_core::Icon;
use yew::prelude::*;

use crate::paths::asset_path;

#[derive(Properties, PartialEq, Clone)]
pub struct IconImageProps {
    pub src: AttrValue,
    pub title: AttrValue,
    #[prop_or(AttrValue::from("element-icon"))]
    pub class: AttrValue,
}

/// Icon image that degrades to its text label when the file is missing.
#[function_component(IconImage)]
pub fn icon_image(props: &IconImageProps) -> Html {
    let failed = use_state(|| false);
    let label = if props.title.is_empty() {
        AttrValue::from("—")
    } else {
        props.title.clone()
    };

    if *failed {
        return html! { <span class="icon-fallback" title={label.clone()}>{ label }</span> };
    }

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };
    html! {
        <img src={props.src.clone()} alt={label.clone()} title={label} class={props.class.clone()} {onerror} />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct IconRowProps {
    pub icons: Vec<Icon>,
    #[prop_or(AttrValue::from("element-container"))]
    pub class: AttrValue,
}

#[function_component(IconRow)]
pub fn icon_row(props: &IconRowProps) -> Html {
    html! {
        <div class={props.class.clone()}>
            { for props.icons.iter().map(|icon| html! {
                <IconImage
                    key={icon.path.clone()}
                    src={AttrValue::from(asset_path(&icon.path))}
                    title={AttrValue::from(icon.title.clone())}
                />
            }) }
        </div>
    }
}
