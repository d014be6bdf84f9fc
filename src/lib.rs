//! Read-only catalog of game items.
//!
//! Raw item records and their kit tables are loaded once into an
//! [`ItemStorage`], turned into an immutable [`ItemCatalog`], and queried from
//! then on without allocation or failure. Lookups that find nothing return
//! `None` (items) or `0` (sticker kit ids).

pub mod catalog;
pub mod config;
pub mod items;
pub mod kits;
pub mod storage;

pub use catalog::ItemCatalog;
pub use config::{CatalogConfig, DEFAULT_STORAGE_PATH, ENV_STORAGE_PATH, StorageSource};
pub use items::{Item, ItemKind, Rarity, WeaponId};
pub use kits::{
    GraffitiKit, KitResolver, KitTables, MusicKit, NamedKit, PaintKit, PatchKit, StickerKit,
    TournamentTeam,
};
pub use storage::ItemStorage;
