use futures::executor::block_on;
use hoyodex_core::{Crumb, Game, GameDataset, Label, Skill, character_card};
use hoyodex_web::components::breadcrumbs::{Breadcrumbs, BreadcrumbsProps};
use hoyodex_web::components::character_card::{CharacterCard, CharacterCardProps};
use hoyodex_web::components::context_menu::{ContextMenu, ContextMenuProps};
use hoyodex_web::components::header::{Header, Props as HeaderProps};
use hoyodex_web::components::kit::{KitList, KitListProps};
use serde_json::json;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn gi_dataset() -> GameDataset {
    GameDataset::from_document(
        Game::Gi,
        &json!({
            "characters": [{
                "id": "hu-tao",
                "name": "Hu Tao",
                "rarity": 5,
                "region": "Liyue",
                "attributes": {"element": "Pyro", "weaponType": "Polearm"}
            }]
        }),
    )
}

#[test]
fn header_renders_game_selector_and_language() {
    hoyodex_web::i18n::set_lang("en");
    let props = HeaderProps {
        active_game: Some(Game::Hsr),
        current_lang: "en".to_string(),
        on_navigate: Callback::noop(),
        on_lang_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("lang-select"));
    assert!(html.contains("Genshin Impact"));
    assert!(html.contains("Zenless Zone Zero"));
    assert!(html.contains(r#"data-game="hsr""#));
    assert!(html.contains("active"));
}

#[test]
fn breadcrumbs_link_all_but_the_last_crumb() {
    hoyodex_web::i18n::set_lang("en");
    let items = vec![
        Crumb {
            label: Label::Key("ui.home".into()),
            href: Some("#".into()),
        },
        Crumb {
            label: Label::Text("GI".into()),
            href: Some("#gi/characters".into()),
        },
        Crumb {
            label: Label::Key("views.gi.characters".into()),
            href: Some("#gi/characters".into()),
        },
        Crumb {
            label: Label::Text("Hu Tao".into()),
            href: None,
        },
    ];
    let html = block_on(
        LocalServerRenderer::<Breadcrumbs>::with_props(BreadcrumbsProps { items }).render(),
    );
    assert!(html.contains("Home"));
    assert!(html.contains("Characters"));
    assert!(html.contains(r##"href="#gi/characters""##));
    assert!(html.contains(r#"aria-current="page""#));
    assert_eq!(html.matches('›').count(), 3);
}

#[test]
fn empty_breadcrumbs_render_no_separators() {
    hoyodex_web::i18n::set_lang("en");
    let html = block_on(
        LocalServerRenderer::<Breadcrumbs>::with_props(BreadcrumbsProps { items: Vec::new() })
            .render(),
    );
    assert!(html.contains(r#"id="breadcrumbs""#));
    assert!(!html.contains('›'));
}

#[test]
fn context_menu_is_hidden_without_a_game() {
    hoyodex_web::i18n::set_lang("en");
    let props = ContextMenuProps {
        game: None,
        active_view: None,
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ContextMenu>::with_props(props).render());
    assert!(html.contains("hidden"));
    assert!(!html.contains("<button"));
}

#[test]
fn context_menu_uses_game_specific_labels() {
    hoyodex_web::i18n::set_lang("en");
    let props = ContextMenuProps {
        game: Some(Game::Zzz),
        active_view: Some(AttrValue::from("weapons")),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ContextMenu>::with_props(props).render());
    assert!(html.contains("Agents"));
    assert!(html.contains("W-Engines"));
    assert!(html.contains("Drive Discs"));
    assert!(html.contains("visible"));
    assert_eq!(html.matches("<button").count(), 3);
}

#[test]
fn character_card_links_to_detail_with_icons() {
    hoyodex_web::i18n::set_lang("en");
    let dataset = gi_dataset();
    let card = character_card(Game::Gi, &dataset.characters[0]);
    let html = block_on(
        LocalServerRenderer::<CharacterCard>::with_props(CharacterCardProps { card }).render(),
    );
    assert!(html.contains(r##"href="#gi/characters/hu-tao""##));
    assert!(html.contains("/assets/images/gi/avatar/hu-tao.png"));
    assert!(html.contains("/assets/images/gi/rarity/5.png"));
    assert!(html.contains("/assets/images/gi/vision/pyro-liyue.png"));
    assert!(html.contains("Rarity 5"));
    assert!(html.contains("<h3>Hu Tao</h3>"));
}

#[test]
fn kit_list_reports_missing_kit() {
    hoyodex_web::i18n::set_lang("en");
    let html = block_on(
        LocalServerRenderer::<KitList>::with_props(KitListProps { skills: Vec::new() }).render(),
    );
    assert!(html.contains("This character has no kit defined."));

    hoyodex_web::i18n::set_lang("es");
    let html = block_on(
        LocalServerRenderer::<KitList>::with_props(KitListProps { skills: Vec::new() }).render(),
    );
    assert!(!html.contains("This character has no kit defined."));
    assert!(html.contains("kit-empty"));
}

#[test]
fn kit_list_renders_each_skill() {
    hoyodex_web::i18n::set_lang("en");
    let skills = vec![
        Skill {
            name: "Guide to Afterlife".into(),
            description: "Consumes HP".into(),
            icon: Some("https://cdn.example/skill.png".into()),
        },
        Skill {
            name: "Spirit Soother".into(),
            description: "Blood Blossom".into(),
            icon: None,
        },
    ];
    let html =
        block_on(LocalServerRenderer::<KitList>::with_props(KitListProps { skills }).render());
    assert_eq!(html.matches("kit-skill").count(), 2);
    assert!(html.contains("Guide to Afterlife"));
    assert!(html.contains("Blood Blossom"));
    assert_eq!(html.matches("skill-icon").count(), 1);
}
