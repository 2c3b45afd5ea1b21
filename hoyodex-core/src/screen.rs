//! What the content area shows for a route.

use crate::assets::{avatar_path, rarity_path};
use crate::data::{GameDataset, Rarity, RawEntity, Skill};
use crate::entity::NormalizedEntity;
use crate::game::{Game, View};
use crate::icons::{Icon, icon_scheme};
use crate::route::RouteState;
use crate::slug::slugify;

const MISSING: &str = "—";

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterCard {
    pub entity: NormalizedEntity,
    pub href: String,
    pub avatar: String,
    pub rarity_badge: Option<String>,
    pub icons: Vec<Icon>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentCard {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListScreen {
    Characters(Vec<CharacterCard>),
    Equipment { view: View, cards: Vec<EquipmentCard> },
}

/// Where a detail portrait comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Portrait {
    /// Generated from the entity slug, relative to the deployment base.
    Asset(String),
    /// Taken verbatim from the record's `media.portrait`.
    Supplied(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailScreen {
    pub view: View,
    pub name: String,
    pub portrait: Option<Portrait>,
    pub icons: Vec<Icon>,
    /// `element · weapon` line, `—` standing in for missing values.
    pub summary: String,
    pub rarity: Option<Rarity>,
    pub rarity_badge: Option<String>,
    /// Kit entries; only characters carry one.
    pub kit: Option<Vec<Skill>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// No fragment: nothing rendered.
    Blank,
    Loading,
    /// Data could not be loaded.
    Failed,
    ViewUnavailable,
    EntityNotFound,
    List(ListScreen),
    Detail(Box<DetailScreen>),
}

/// Screen for a route whose dataset finished loading.
#[must_use]
pub fn resolve_screen(route: &RouteState, dataset: &GameDataset) -> Screen {
    let game = dataset.game;
    let view = route.view_kind();

    if let Some(id) = route.entity_id.as_deref() {
        let Some(view) = view else {
            return Screen::EntityNotFound;
        };
        return match dataset.entity(view, id) {
            Ok(entity) => Screen::Detail(Box::new(detail(game, view, entity))),
            Err(_) => Screen::EntityNotFound,
        };
    }

    match view {
        Some(View::Characters) => Screen::List(ListScreen::Characters(
            dataset
                .characters
                .iter()
                .map(|raw| character_card(game, raw))
                .collect(),
        )),
        Some(view) => Screen::List(ListScreen::Equipment {
            view,
            cards: dataset
                .collection(view)
                .iter()
                .map(|raw| EquipmentCard {
                    name: raw.name.clone(),
                    href: RouteState::new(game.as_str(), view.as_str())
                        .with_entity(raw.id.clone())
                        .fragment(),
                })
                .collect(),
        }),
        None => Screen::ViewUnavailable,
    }
}

/// Card for one entry of the character list.
#[must_use]
pub fn character_card(game: Game, raw: &RawEntity) -> CharacterCard {
    let entity = NormalizedEntity::from_raw(raw, game);
    CharacterCard {
        href: RouteState::new(game.as_str(), View::Characters.as_str())
            .with_entity(entity.id.clone())
            .fragment(),
        avatar: avatar_path(game, &slugify(Some(&entity.id))),
        rarity_badge: entity.visible_rarity().map(|r| rarity_path(game, r)),
        icons: icon_scheme(game)(raw),
        entity,
    }
}

fn detail(game: Game, view: View, raw: &RawEntity) -> DetailScreen {
    let is_character = view == View::Characters;
    let portrait = raw
        .media
        .portrait
        .clone()
        .filter(|p| !p.is_empty())
        .map(Portrait::Supplied)
        .or_else(|| {
            is_character.then(|| Portrait::Asset(avatar_path(game, &slugify(Some(&raw.id)))))
        });
    let rarity = raw.rarity.clone().filter(Rarity::is_present);
    let attrs = &raw.attributes;
    let summary = format!(
        "{} · {}",
        attrs.element.as_deref().filter(|s| !s.is_empty()).unwrap_or(MISSING),
        attrs.weapon_type.as_deref().filter(|s| !s.is_empty()).unwrap_or(MISSING),
    );
    DetailScreen {
        view,
        name: raw.name.clone(),
        portrait,
        icons: if is_character {
            icon_scheme(game)(raw)
        } else {
            Vec::new()
        },
        summary,
        rarity_badge: rarity.as_ref().map(|r| rarity_path(game, r)),
        rarity,
        kit: is_character.then(|| raw.kit().to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gi() -> GameDataset {
        GameDataset::from_document(
            Game::Gi,
            &json!({
                "characters": [{
                    "id": "hu-tao",
                    "name": "Hu Tao",
                    "rarity": 5,
                    "region": "Liyue",
                    "attributes": {"element": "Pyro", "weaponType": "Polearm"},
                    "talents": [{"name": "Paramita Papilio", "description": "HP to ATK"}]
                }],
                "weapons": [{"id": "homa", "name": "Staff of Homa"}]
            }),
        )
    }

    #[test]
    fn known_entity_renders_detail() {
        let route = RouteState::new("gi", "characters").with_entity("hu-tao");
        let Screen::Detail(detail) = resolve_screen(&route, &gi()) else {
            panic!("expected detail screen");
        };
        assert_eq!(detail.name, "Hu Tao");
        assert_eq!(detail.summary, "Pyro · Polearm");
        assert_eq!(
            detail.portrait,
            Some(Portrait::Asset("assets/images/gi/avatar/hu-tao.png".into()))
        );
        assert_eq!(detail.rarity, Some(Rarity::Stars(5)));
        assert_eq!(detail.rarity_badge.as_deref(), Some("assets/images/gi/rarity/5.png"));
        assert_eq!(detail.icons.len(), 2);
        assert_eq!(detail.kit.unwrap()[0].name, "Paramita Papilio");
    }

    #[test]
    fn absent_entity_is_not_found() {
        let route = RouteState::new("gi", "characters").with_entity("nahida");
        assert_eq!(resolve_screen(&route, &gi()), Screen::EntityNotFound);

        let route = RouteState::new("gi", "maps").with_entity("hu-tao");
        assert_eq!(resolve_screen(&route, &gi()), Screen::EntityNotFound);
    }

    #[test]
    fn unknown_view_is_unavailable() {
        let route = RouteState::new("gi", "maps");
        assert_eq!(resolve_screen(&route, &gi()), Screen::ViewUnavailable);
    }

    #[test]
    fn character_list_builds_cards() {
        let route = RouteState::new("gi", "characters");
        let Screen::List(ListScreen::Characters(cards)) = resolve_screen(&route, &gi()) else {
            panic!("expected character list");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].href, "#gi/characters/hu-tao");
        assert_eq!(cards[0].entity.role.as_deref(), Some("Polearm"));
        assert_eq!(cards[0].icons[0].path, "assets/images/gi/vision/pyro-liyue.png");
    }

    #[test]
    fn equipment_list_links_to_detail() {
        let route = RouteState::new("gi", "weapons");
        let Screen::List(ListScreen::Equipment { view, cards }) = resolve_screen(&route, &gi())
        else {
            panic!("expected equipment list");
        };
        assert_eq!(view, View::Weapons);
        assert_eq!(cards[0].href, "#gi/weapons/homa");

        let route = RouteState::new("gi", "weapons").with_entity("homa");
        let Screen::Detail(detail) = resolve_screen(&route, &gi()) else {
            panic!("expected detail screen");
        };
        assert_eq!(detail.summary, "— · —");
        assert!(detail.portrait.is_none());
        assert!(detail.kit.is_none());
    }
}
