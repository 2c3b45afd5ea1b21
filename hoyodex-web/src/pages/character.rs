//! Standalone character page, `characters/character.html?game=<game>&id=<id>`.

use hoyodex_core::assets::avatar_path;
use hoyodex_core::{
    CharacterQuery, DataLoader, Game, RawEntity, View, icon_scheme, load_game_data,
    parse_character_query, slugify,
};
use yew::prelude::*;

use crate::components::icon::IconRow;
use crate::components::kit::KitList;
use crate::dom;
use crate::loader::WebDataLoader;
use crate::pages::status::{StatusKind, StatusMessage};
use crate::paths::asset_path;

#[derive(Clone, Debug, PartialEq)]
pub enum SheetState {
    Loading,
    InvalidParams,
    NotFound,
    Failed,
    Ready { game: Game, entity: Box<RawEntity> },
}

/// Resolve the page's query into something to render.
#[allow(clippy::future_not_send)]
pub async fn load_sheet<L: DataLoader>(loader: &L, query: Option<CharacterQuery>) -> SheetState {
    let Some(query) = query else {
        return SheetState::InvalidParams;
    };
    let dataset = match load_game_data(loader, &query.game).await {
        Ok(dataset) => dataset,
        Err(err) => {
            log::error!("{err}");
            return SheetState::Failed;
        }
    };
    match dataset.entity(View::Characters, &query.id) {
        Ok(entity) => SheetState::Ready {
            game: dataset.game,
            entity: Box::new(entity.clone()),
        },
        Err(err) => {
            log::info!("{err}");
            SheetState::NotFound
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CharacterSheetProps {
    pub game: Game,
    pub entity: RawEntity,
}

/// Header with portrait and icons, followed by the kit.
#[function_component(CharacterSheet)]
pub fn character_sheet(props: &CharacterSheetProps) -> Html {
    let entity = &props.entity;
    let icons = icon_scheme(props.game)(entity);
    let meta = match props.game {
        Game::Gi => entity.region.clone().unwrap_or_default(),
        Game::Hsr | Game::Zzz => String::new(),
    };

    html! {
        <article class="character-sheet">
            <header class="character-header">
                <img
                    id="character-portrait"
                    src={asset_path(&avatar_path(props.game, &slugify(Some(&entity.id))))}
                    alt={entity.name.clone()}
                />
                <h1 id="character-name">{ entity.name.clone() }</h1>
                <IconRow {icons} class="character-icons" />
                <p id="character-meta">{ meta }</p>
            </header>
            <section id="kit-container">
                <KitList skills={entity.kit().to_vec()} />
            </section>
        </article>
    }
}

#[function_component(CharacterPage)]
pub fn character_page() -> Html {
    let sheet = use_state(|| SheetState::Loading);
    {
        let sheet = sheet.clone();
        use_effect_with((), move |()| {
            let query = parse_character_query(&dom::location_search().unwrap_or_default());
            wasm_bindgen_futures::spawn_local(async move {
                sheet.set(load_sheet(&WebDataLoader, query).await);
            });
        });
    }

    match &*sheet {
        SheetState::Loading => html! { <StatusMessage kind={StatusKind::Loading} /> },
        SheetState::InvalidParams => html! { <StatusMessage kind={StatusKind::InvalidParams} /> },
        SheetState::NotFound => html! { <StatusMessage kind={StatusKind::CharacterNotFound} /> },
        SheetState::Failed => html! { <StatusMessage kind={StatusKind::LoadError} /> },
        SheetState::Ready { game, entity } => html! {
            <CharacterSheet game={*game} entity={(**entity).clone()} />
        },
    }
}
