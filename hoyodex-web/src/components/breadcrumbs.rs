use hoyodex_core::{Crumb, Label};
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct BreadcrumbsProps {
    pub items: Vec<Crumb>,
}

fn label_text(label: &Label) -> String {
    match label {
        Label::Text(text) => text.clone(),
        Label::Key(key) => t(key),
    }
}

#[function_component(Breadcrumbs)]
pub fn breadcrumbs(props: &BreadcrumbsProps) -> Html {
    if props.items.is_empty() {
        return html! { <nav id="breadcrumbs" class="breadcrumbs" aria-label={t("nav.breadcrumbs")}></nav> };
    }

    let last = props.items.len() - 1;
    html! {
        <nav id="breadcrumbs" class="breadcrumbs" aria-label={t("nav.breadcrumbs")}>
            { for props.items.iter().enumerate().map(|(idx, item)| {
                let text = label_text(&item.label);
                let crumb = match &item.href {
                    Some(href) => html! { <a class="crumb clickable" href={href.clone()}>{ text }</a> },
                    None => html! { <span class="crumb active" aria-current="page">{ text }</span> },
                };
                html! {
                    <>
                        { crumb }
                        if idx < last {
                            <span class="separator">{ "›" }</span>
                        }
                    </>
                }
            }) }
        </nav>
    }
}
