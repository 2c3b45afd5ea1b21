use std::cell::RefCell;
use std::collections::HashMap;

use futures::executor::block_on;
use hoyodex_core::{
    CatalogError, DataLoader, Game, HashRoute, RouteState, Screen, View, load_game_data,
    parse_fragment, resolve_screen,
};

#[derive(Debug, thiserror::Error)]
#[error("HTTP 404: {0}")]
struct Missing(String);

/// In-memory documents keyed by path, recording every request.
#[derive(Default)]
struct FixtureLoader {
    documents: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl FixtureLoader {
    fn with(mut self, path: &str, body: &str) -> Self {
        self.documents.insert(path.to_string(), body.to_string());
        self
    }
}

impl DataLoader for FixtureLoader {
    type Error = Missing;

    async fn fetch_document(&self, path: &str) -> Result<String, Self::Error> {
        self.requests.borrow_mut().push(path.to_string());
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| Missing(path.to_string()))
    }
}

fn fixtures() -> FixtureLoader {
    FixtureLoader::default()
        .with(
            "data/gi.json",
            r#"{"characters":[{"id":"hu-tao","name":"Hu Tao","region":"Liyue",
                "attributes":{"element":"Pyro","weaponType":"Polearm"}}]}"#,
        )
        .with("data/hsr.json", r#"{"lightcones":[{"id":"cruising","name":"Cruising in the Stellar Sea"}]}"#)
        .with(
            "data/zzz.json",
            r#"{"agents":[{"id":"ellen"}],"w-engine":[{"id":"deep-sea"}],"drive-disks":[{"id":"woodpecker"}]}"#,
        )
}

#[test]
fn every_game_yields_three_collections() {
    let loader = fixtures();
    for game in Game::ALL {
        let data = block_on(load_game_data(&loader, game.as_str())).expect("fixture loads");
        assert_eq!(data.game, game);
        for view in View::ALL {
            let _ = data.collection(view).len();
        }
    }
    let hsr = block_on(load_game_data(&loader, "hsr")).unwrap();
    assert!(hsr.characters.is_empty());
    assert_eq!(hsr.weapons.len(), 1);
    assert!(hsr.artifacts.is_empty());
}

#[test]
fn zzz_document_maps_agents_engines_and_disks() {
    let data = block_on(load_game_data(&fixtures(), "zzz")).unwrap();
    assert_eq!(data.characters[0].id, "ellen");
    assert_eq!(data.weapons[0].id, "deep-sea");
    assert_eq!(data.artifacts[0].id, "woodpecker");
}

#[test]
fn unsupported_game_fails_without_fetching() {
    let loader = fixtures();
    let err = block_on(load_game_data(&loader, "wuwa")).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedGame(ref g) if g == "wuwa"));
    assert!(loader.requests.borrow().is_empty());
}

#[test]
fn missing_document_is_a_fetch_error() {
    let loader = FixtureLoader::default();
    let err = block_on(load_game_data(&loader, "gi")).unwrap_err();
    assert!(matches!(err, CatalogError::Fetch { ref path, .. } if path == "data/gi.json"));
    assert!(err.to_string().contains("HTTP 404"));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let loader = FixtureLoader::default().with("data/gi.json", "<html>not json</html>");
    let err = block_on(load_game_data(&loader, "gi")).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn fragment_to_screen_end_to_end() {
    let loader = fixtures();
    let HashRoute::Page(route) = parse_fragment("#gi/characters/hu-tao") else {
        panic!("expected a page route");
    };
    let data = block_on(load_game_data(&loader, &route.game)).unwrap();
    assert!(matches!(resolve_screen(&route, &data), Screen::Detail(_)));

    let missing = RouteState::new("gi", "characters").with_entity("venti");
    assert_eq!(resolve_screen(&missing, &data), Screen::EntityNotFound);
}
