//! Game-specific iconography described from a uniform record.
//!
//! Each game registers one pure scheme function; callers pick it once with
//! [`icon_scheme`] and render whatever it returns.

use crate::assets::icon_path;
use crate::data::RawEntity;
use crate::game::Game;
use crate::slug::normalize_text;

const DEFAULT_ARKHE: &str = "pneuma";
const ARKHE_REGION: &str = "fontaine";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Vision,
    WeaponType,
    Element,
    PathType,
    Class,
    Faction,
}

impl IconKind {
    /// Image directory holding this kind of icon.
    #[must_use]
    pub const fn directory(self) -> &'static str {
        match self {
            Self::Vision => "vision",
            Self::WeaponType => "weaponType",
            Self::Element => "element",
            Self::PathType => "pathType",
            Self::Class => "class",
            Self::Faction => "faction",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub kind: IconKind,
    pub path: String,
    /// Human readable label, also the fallback when the image is missing.
    pub title: String,
}

pub type IconScheme = fn(&RawEntity) -> Vec<Icon>;

/// Scheme registered for a game.
#[must_use]
pub fn icon_scheme(game: Game) -> IconScheme {
    match game {
        Game::Gi => gi_icons,
        Game::Hsr => hsr_icons,
        Game::Zzz => zzz_icons,
    }
}

/// Vision file stem for a Genshin character.
///
/// Fontaine characters carry an arkhe suffix, `pneuma` unless stated.
/// Returns `None` when element or region normalize to nothing.
#[must_use]
pub fn vision_file(element: Option<&str>, region: Option<&str>, arkhe: Option<&str>) -> Option<String> {
    let element = normalize_text(element);
    let region = normalize_text(region);
    if element.is_empty() || region.is_empty() {
        return None;
    }
    if region == ARKHE_REGION {
        let arkhe = normalize_text(Some(arkhe.unwrap_or(DEFAULT_ARKHE)));
        return Some(format!("{element}-{region}-{arkhe}"));
    }
    Some(format!("{element}-{region}"))
}

fn push_icon(icons: &mut Vec<Icon>, game: Game, kind: IconKind, value: Option<&str>) {
    let file = normalize_text(value);
    if file.is_empty() {
        return;
    }
    icons.push(Icon {
        kind,
        path: icon_path(game, kind, &file),
        title: value.unwrap_or_default().to_string(),
    });
}

fn gi_icons(entity: &RawEntity) -> Vec<Icon> {
    let attrs = &entity.attributes;
    let mut icons = Vec::with_capacity(2);
    if let Some(file) = vision_file(
        attrs.element.as_deref(),
        entity.region.as_deref(),
        attrs.arkhe.as_deref(),
    ) {
        icons.push(Icon {
            kind: IconKind::Vision,
            path: icon_path(Game::Gi, IconKind::Vision, &file),
            title: attrs.element.clone().unwrap_or_default(),
        });
    }
    push_icon(&mut icons, Game::Gi, IconKind::WeaponType, attrs.weapon_type.as_deref());
    icons
}

fn hsr_icons(entity: &RawEntity) -> Vec<Icon> {
    let attrs = &entity.attributes;
    let mut icons = Vec::with_capacity(2);
    push_icon(&mut icons, Game::Hsr, IconKind::Element, attrs.element.as_deref());
    push_icon(&mut icons, Game::Hsr, IconKind::PathType, attrs.path_type.as_deref());
    icons
}

fn zzz_icons(entity: &RawEntity) -> Vec<Icon> {
    let attrs = &entity.attributes;
    let mut icons = Vec::with_capacity(3);
    push_icon(&mut icons, Game::Zzz, IconKind::Element, attrs.element.as_deref());
    push_icon(&mut icons, Game::Zzz, IconKind::Class, attrs.class.as_deref());
    push_icon(&mut icons, Game::Zzz, IconKind::Faction, entity.faction.as_deref());
    icons
}
