//! URL fragment and query parsing, plus the navigation generation counter.

use crate::game::View;

/// What the hash router renders. Only navigation creates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteState {
    pub game: String,
    pub view: String,
    pub entity_id: Option<String>,
}

impl RouteState {
    #[must_use]
    pub fn new(game: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            game: game.into(),
            view: view.into(),
            entity_id: None,
        }
    }

    #[must_use]
    pub fn with_entity(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// The view when it names one of the known lists.
    #[must_use]
    pub fn view_kind(&self) -> Option<View> {
        View::parse(&self.view)
    }

    /// Fragment (with `#`) that navigates back to this state.
    #[must_use]
    pub fn fragment(&self) -> String {
        match &self.entity_id {
            Some(id) => format!("#{}/{}/{id}", self.game, self.view),
            None => format!("#{}/{}", self.game, self.view),
        }
    }
}

/// Outcome of parsing a URL fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashRoute {
    /// Empty fragment: blank content, no chrome.
    Home,
    /// Game or view missing: leave whatever is rendered untouched.
    Ignored,
    Page(RouteState),
}

/// Parse `#<game>/<view>[/<entityId>]`. Segments past the third are ignored.
#[must_use]
pub fn parse_fragment(fragment: &str) -> HashRoute {
    let hash = fragment.strip_prefix('#').unwrap_or(fragment);
    if hash.is_empty() {
        return HashRoute::Home;
    }

    let mut segments = hash.split('/');
    let game = segments.next().unwrap_or_default();
    let view = segments.next().unwrap_or_default();
    if game.is_empty() || view.is_empty() {
        return HashRoute::Ignored;
    }

    let entity_id = segments
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string);
    HashRoute::Page(RouteState {
        game: game.to_string(),
        view: view.to_string(),
        entity_id,
    })
}

/// Parameters of the standalone character page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterQuery {
    pub game: String,
    pub id: String,
}

/// Read `?game=<game>&id=<id>`. Both must be present and non-empty.
#[must_use]
pub fn parse_character_query(query: &str) -> Option<CharacterQuery> {
    let query = query.strip_prefix('?').unwrap_or(query);
    Some(CharacterQuery {
        game: query_param(query, "game").filter(|g| !g.is_empty())?,
        id: query_param(query, "id").filter(|i| !i.is_empty())?,
    })
}

/// First value of `name` in a form-encoded query string.
fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| form_decode(key) == name)
        .map(|(_, value)| form_decode(value))
}

/// `application/x-www-form-urlencoded` decoding; invalid UTF-8 is replaced.
fn form_decode(input: &str) -> String {
    let spaced = input.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

/// Generation number taken by one route transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Monotonic navigation counter. A load finishing under a stale ticket
/// must not be rendered.
#[derive(Debug, Default)]
pub struct NavigationClock {
    current: u64,
}

impl NavigationClock {
    pub fn advance(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    #[must_use]
    pub const fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_game_view_and_entity() {
        assert_eq!(
            parse_fragment("#gi/characters/hu-tao"),
            HashRoute::Page(RouteState::new("gi", "characters").with_entity("hu-tao"))
        );
        assert_eq!(
            parse_fragment("zzz/weapons"),
            HashRoute::Page(RouteState::new("zzz", "weapons"))
        );
    }

    #[test]
    fn empty_fragment_is_home() {
        assert_eq!(parse_fragment(""), HashRoute::Home);
        assert_eq!(parse_fragment("#"), HashRoute::Home);
    }

    #[test]
    fn missing_game_or_view_is_ignored() {
        assert_eq!(parse_fragment("#gi"), HashRoute::Ignored);
        assert_eq!(parse_fragment("#gi/"), HashRoute::Ignored);
        assert_eq!(parse_fragment("#/characters"), HashRoute::Ignored);
    }

    #[test]
    fn trailing_slash_and_extra_segments() {
        assert_eq!(
            parse_fragment("#hsr/characters/"),
            HashRoute::Page(RouteState::new("hsr", "characters"))
        );
        assert_eq!(
            parse_fragment("#hsr/characters/kafka/extra"),
            HashRoute::Page(RouteState::new("hsr", "characters").with_entity("kafka"))
        );
    }

    #[test]
    fn route_state_rebuilds_its_fragment() {
        let route = RouteState::new("gi", "weapons").with_entity("amos");
        assert_eq!(route.fragment(), "#gi/weapons/amos");
        assert_eq!(route.view_kind(), Some(View::Weapons));
        assert_eq!(RouteState::new("gi", "maps").view_kind(), None);
    }

    #[test]
    fn character_query_requires_both_params() {
        assert_eq!(
            parse_character_query("?game=gi&id=hu-tao"),
            Some(CharacterQuery {
                game: "gi".into(),
                id: "hu-tao".into()
            })
        );
        assert_eq!(parse_character_query("?game=gi"), None);
        assert_eq!(parse_character_query("?game=&id=x"), None);
        assert_eq!(parse_character_query(""), None);
    }

    #[test]
    fn character_query_decodes_values() {
        let q = parse_character_query("id=march%207th&game=hsr").unwrap();
        assert_eq!(q.id, "march 7th");
        assert_eq!(form_decode("a+b%C3%B1"), "a bñ");
        assert_eq!(form_decode("100%"), "100%");
        assert_eq!(form_decode("1%2B1"), "1+1");
    }

    #[test]
    fn stale_tickets_are_rejected() {
        let mut clock = NavigationClock::default();
        let first = clock.advance();
        assert!(clock.is_current(first));
        let second = clock.advance();
        assert!(!clock.is_current(first));
        assert!(clock.is_current(second));
    }
}
