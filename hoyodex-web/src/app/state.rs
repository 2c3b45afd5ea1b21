use std::rc::Rc;

use hoyodex_core::{Crumb, Game, GameDataset, RouteState, Screen, breadcrumbs, resolve_screen};

/// Everything the shell renders, replaced as a whole on each transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub route: Option<RouteState>,
    pub dataset: Option<Rc<GameDataset>>,
    pub screen: Screen,
    pub crumbs: Vec<Crumb>,
    /// Game whose context menu is shown; `None` hides it.
    pub menu_game: Option<Game>,
}

impl Default for Session {
    fn default() -> Self {
        Self::blank()
    }
}

impl Session {
    /// Initial state: no content, no breadcrumbs, no menu.
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            route: None,
            dataset: None,
            screen: Screen::Blank,
            crumbs: Vec::new(),
            menu_game: None,
        }
    }

    /// Loading placeholder with the menu hidden. Breadcrumbs stay until the load settles.
    #[must_use]
    pub fn loading(self, route: RouteState) -> Self {
        Self {
            route: Some(route),
            screen: Screen::Loading,
            menu_game: None,
            ..self
        }
    }

    #[must_use]
    pub fn loaded(route: RouteState, dataset: GameDataset) -> Self {
        let screen = resolve_screen(&route, &dataset);
        let crumbs = breadcrumbs(&route, &dataset);
        Self {
            menu_game: Some(dataset.game),
            route: Some(route),
            dataset: Some(Rc::new(dataset)),
            screen,
            crumbs,
        }
    }

    #[must_use]
    pub fn failed(self, route: RouteState) -> Self {
        Self {
            route: Some(route),
            screen: Screen::Failed,
            menu_game: None,
            ..self
        }
    }

    /// Game of the current route, when it is a known one.
    #[must_use]
    pub fn active_game(&self) -> Option<Game> {
        self.route.as_ref().and_then(|route| route.game.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gi() -> GameDataset {
        GameDataset::from_document(
            Game::Gi,
            &json!({"characters": [{"id": "hu-tao", "name": "Hu Tao"}]}),
        )
    }

    #[test]
    fn blank_session_has_no_chrome() {
        let session = Session::default();
        assert_eq!(session.screen, Screen::Blank);
        assert!(session.crumbs.is_empty());
        assert!(session.menu_game.is_none());
        assert!(session.active_game().is_none());
    }

    #[test]
    fn loading_hides_menu_and_keeps_crumbs() {
        let loaded = Session::loaded(RouteState::new("gi", "characters"), gi());
        assert_eq!(loaded.menu_game, Some(Game::Gi));
        assert_eq!(loaded.crumbs.len(), 3);

        let next = RouteState::new("gi", "weapons");
        let loading = loaded.loading(next.clone());
        assert_eq!(loading.screen, Screen::Loading);
        assert!(loading.menu_game.is_none());
        assert_eq!(loading.crumbs.len(), 3);
        assert_eq!(loading.route, Some(next));
    }

    #[test]
    fn failure_replaces_content_with_error() {
        let route = RouteState::new("xyz", "characters");
        let failed = Session::blank().loading(route.clone()).failed(route);
        assert_eq!(failed.screen, Screen::Failed);
        assert!(failed.menu_game.is_none());
        assert!(failed.active_game().is_none());
    }

    #[test]
    fn loaded_entity_route_renders_detail() {
        let route = RouteState::new("gi", "characters").with_entity("hu-tao");
        let session = Session::loaded(route, gi());
        assert!(matches!(session.screen, Screen::Detail(_)));
        assert_eq!(session.crumbs.len(), 4);
    }
}
