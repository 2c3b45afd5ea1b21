use hoyodex_core::Skill;
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct KitListProps {
    pub skills: Vec<Skill>,
}

/// Character kit, one block per skill.
#[function_component(KitList)]
pub fn kit_list(props: &KitListProps) -> Html {
    if props.skills.is_empty() {
        return html! { <p class="kit-empty">{ t("ui.no_kit") }</p> };
    }

    html! {
        <div class="kit">
            { for props.skills.iter().map(|skill| html! {
                <article class="kit-skill">
                    <header>
                        { skill.icon.as_ref().filter(|icon| !icon.is_empty()).map(|icon| html! {
                            <img class="skill-icon" src={icon.clone()} alt="" />
                        }) }
                        <h2>{ skill.name.clone() }</h2>
                    </header>
                    <p class="skill-description">{ skill.description.clone() }</p>
                </article>
            }) }
        </div>
    }
}
