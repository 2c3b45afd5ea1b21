use serde::{Deserialize, Serialize};

use crate::data::{RawEntity, Rarity};
use crate::game::Game;

/// Uniform display record for a character or agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEntity {
    pub id: String,
    pub name: String,
    pub element: Option<String>,
    /// Weapon type, path or class depending on the game.
    pub role: Option<String>,
    pub faction: Option<String>,
    pub rarity: Option<Rarity>,
    pub game: Game,
}

impl NormalizedEntity {
    #[must_use]
    pub fn from_raw(raw: &RawEntity, game: Game) -> Self {
        let attrs = &raw.attributes;
        let (role, faction) = match game {
            Game::Gi => (attrs.weapon_type.clone(), raw.region.clone()),
            Game::Hsr => (attrs.path_type.clone(), None),
            Game::Zzz => (attrs.class.clone(), raw.faction.clone()),
        };
        Self {
            id: raw.id.clone(),
            name: raw.name.clone(),
            element: attrs.element.clone(),
            role,
            faction,
            rarity: raw.rarity.clone(),
            game,
        }
    }

    /// Rarity only when it would render, mirroring a truthiness check.
    #[must_use]
    pub fn visible_rarity(&self) -> Option<&Rarity> {
        self.rarity.as_ref().filter(|r| r.is_present())
    }
}

/// Normalize a raw record for the game named `game`.
///
/// `None` means the game is unknown and the record should be skipped.
#[must_use]
pub fn normalize_entity(raw: &RawEntity, game: &str) -> Option<NormalizedEntity> {
    let game = game.parse::<Game>().ok()?;
    Some(NormalizedEntity::from_raw(raw, game))
}
