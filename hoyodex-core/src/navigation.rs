//! Breadcrumb trail and context menu, derived from route state only.

use crate::data::GameDataset;
use crate::game::{Game, View};
use crate::route::RouteState;

/// Crumb text, either literal or a translation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Text(String),
    Key(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: Label,
    /// Fragment to navigate to; `None` marks the active crumb.
    pub href: Option<String>,
}

impl Crumb {
    fn link(label: Label, href: impl Into<String>) -> Self {
        Self {
            label,
            href: Some(href.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub view: View,
    pub label_key: String,
    pub href: String,
}

/// Trail for a loaded route: home, game, view and the entity when it resolves.
#[must_use]
pub fn breadcrumbs(route: &RouteState, dataset: &GameDataset) -> Vec<Crumb> {
    let game = route.game.parse::<Game>().ok();
    let view = route.view_kind();

    let view_label = match (game, view) {
        (Some(game), Some(view)) => Label::Key(game.view_label_key(view)),
        _ => Label::Text(route.view.clone()),
    };

    let mut trail = vec![
        Crumb::link(Label::Key("ui.home".into()), "#"),
        Crumb::link(
            Label::Text(route.game.to_uppercase()),
            format!("#{}/characters", route.game),
        ),
        Crumb::link(view_label, format!("#{}/{}", route.game, route.view)),
    ];

    if let (Some(id), Some(view)) = (route.entity_id.as_deref(), view)
        && let Ok(entity) = dataset.entity(view, id)
    {
        trail.push(Crumb {
            label: Label::Text(entity.name.clone()),
            href: None,
        });
    }
    trail
}

/// One entry per view, in display order.
#[must_use]
pub fn context_menu(game: Game) -> Vec<MenuEntry> {
    View::ALL
        .into_iter()
        .map(|view| MenuEntry {
            view,
            label_key: game.view_label_key(view),
            href: format!("#{game}/{view}"),
        })
        .collect()
}
