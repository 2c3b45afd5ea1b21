pub mod breadcrumbs;
pub mod character_card;
pub mod context_menu;
pub mod equipment_card;
pub mod header;
pub mod icon;
pub mod kit;
pub mod rarity_badge;
