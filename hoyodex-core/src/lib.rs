//! Hoyodex Catalog Engine
//!
//! Platform-agnostic core for the Hoyodex game wiki front end.
//! This crate maps per-game JSON documents onto a uniform catalog model and
//! resolves hash routes into screens, without UI or browser dependencies.

pub mod assets;
pub mod data;
pub mod entity;
pub mod error;
pub mod game;
pub mod icons;
pub mod navigation;
pub mod route;
pub mod screen;
pub mod slug;

// Re-export commonly used types
pub use data::{Attributes, GameDataset, Media, RawEntity, Rarity, Skill, load_game_data};
pub use entity::{NormalizedEntity, normalize_entity};
pub use error::CatalogError;
pub use game::{Game, View};
pub use icons::{Icon, IconKind, IconScheme, icon_scheme, vision_file};
pub use navigation::{Crumb, Label, MenuEntry, breadcrumbs, context_menu};
pub use route::{
    CharacterQuery, HashRoute, NavigationClock, RouteState, Ticket, parse_character_query,
    parse_fragment,
};
pub use screen::{
    CharacterCard, DetailScreen, EquipmentCard, ListScreen, Portrait, Screen, character_card,
    resolve_screen,
};
pub use slug::{normalize_text, slugify};

/// Trait for abstracting data document retrieval
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + 'static;

    /// Fetch the raw text of the document at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be retrieved.
    #[allow(async_fn_in_trait)]
    async fn fetch_document(&self, path: &str) -> Result<String, Self::Error>;
}
