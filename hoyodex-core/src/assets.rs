//! Canonical relative paths for data documents and images.
//!
//! The game segment is always lowercase. Paths are relative; the web shell
//! anchors them at the deployment base.

use crate::data::Rarity;
use crate::game::Game;
use crate::icons::IconKind;

const IMAGE_ROOT: &str = "assets/images";

#[must_use]
pub fn data_path(game: Game) -> String {
    format!("data/{game}.json")
}

/// Avatar for an entity id. The id is the slug used for asset file names.
#[must_use]
pub fn avatar_path(game: Game, id: &str) -> String {
    format!("{IMAGE_ROOT}/{game}/avatar/{id}.png")
}

#[must_use]
pub fn rarity_path(game: Game, rarity: &Rarity) -> String {
    format!("{IMAGE_ROOT}/{game}/rarity/{rarity}.png")
}

#[must_use]
pub fn icon_path(game: Game, kind: IconKind, file: &str) -> String {
    format!("{IMAGE_ROOT}/{game}/{}/{file}.png", kind.directory())
}
