//! Item records and the identifiers the catalog sorts on.
//!
//! An [`Item`] is a small value: its kind, rarity, the game's definition index
//! ([`WeaponId`]) and an index into the kit table for its kind. Everything
//! descriptive (names, tournament data, paint kit ids) lives in the kit tables
//! and is reached through a [`crate::kits::KitResolver`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item definition index. Ordering is numeric and is the primary sort key of
/// the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeaponId(pub u16);

impl WeaponId {
    pub const DEAGLE: WeaponId = WeaponId(1);
    pub const GLOCK: WeaponId = WeaponId(4);
    pub const AK47: WeaponId = WeaponId(7);
    pub const AWP: WeaponId = WeaponId(9);
    pub const M4A1: WeaponId = WeaponId(16);
    pub const KARAMBIT: WeaponId = WeaponId(507);
    pub const BAYONET: WeaponId = WeaponId(500);
    pub const STICKER: WeaponId = WeaponId(1209);
    pub const MUSIC_KIT: WeaponId = WeaponId(1314);
    pub const GRAFFITI: WeaponId = WeaponId(1348);
    pub const SEALED_GRAFFITI: WeaponId = WeaponId(1349);
    pub const PATCH: WeaponId = WeaponId(4609);
    pub const BLOODHOUND_GLOVES: WeaponId = WeaponId(5027);
    pub const SPORT_GLOVES: WeaponId = WeaponId(5030);
    pub const DRIVER_GLOVES: WeaponId = WeaponId(5031);
}

impl From<u16> for WeaponId {
    fn from(value: u16) -> Self {
        WeaponId(value)
    }
}

impl fmt::Display for WeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Gloves,
    Skin,
    Patch,
    Sticker,
    Music,
    Graffiti,
    SealedGraffiti,
    Agent,
    Case,
    CaseKey,
    Collectible,
    NameTag,
    Other,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Gloves => "gloves",
            ItemKind::Skin => "skin",
            ItemKind::Patch => "patch",
            ItemKind::Sticker => "sticker",
            ItemKind::Music => "music",
            ItemKind::Graffiti => "graffiti",
            ItemKind::SealedGraffiti => "sealed_graffiti",
            ItemKind::Agent => "agent",
            ItemKind::Case => "case",
            ItemKind::CaseKey => "case_key",
            ItemKind::Collectible => "collectible",
            ItemKind::NameTag => "name_tag",
            ItemKind::Other => "other",
        }
    }
}

/// Econ rarity, lowest first.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Default,
    Gray,
    LightBlue,
    Blue,
    Purple,
    Pink,
    Red,
    Gold,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    #[serde(default)]
    pub rarity: Rarity,
    pub weapon_id: WeaponId,
    /// Position of this item's kit inside the kit table for `kind`.
    #[serde(default)]
    pub data_index: usize,
}

impl Item {
    pub fn new(kind: ItemKind, rarity: Rarity, weapon_id: WeaponId, data_index: usize) -> Self {
        Self {
            kind,
            rarity,
            weapon_id,
            data_index,
        }
    }

    pub fn is_skin(&self) -> bool {
        self.kind == ItemKind::Skin
    }

    pub fn is_gloves(&self) -> bool {
        self.kind == ItemKind::Gloves
    }

    pub fn is_sticker(&self) -> bool {
        self.kind == ItemKind::Sticker
    }

    pub fn is_music(&self) -> bool {
        self.kind == ItemKind::Music
    }

    pub fn is_graffiti(&self) -> bool {
        self.kind == ItemKind::Graffiti
    }

    pub fn is_sealed_graffiti(&self) -> bool {
        self.kind == ItemKind::SealedGraffiti
    }

    pub fn is_patch(&self) -> bool {
        self.kind == ItemKind::Patch
    }

    /// Skins and gloves are the only items keyed by a paint kit.
    pub fn has_paint_kit(&self) -> bool {
        self.is_skin() || self.is_gloves()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_orders_from_default_to_gold() {
        assert!(Rarity::Default < Rarity::Gray);
        assert!(Rarity::Pink < Rarity::Red);
        assert!(Rarity::Red < Rarity::Gold);
    }

    #[test]
    fn paint_kit_predicate_covers_skins_and_gloves_only() {
        let skin = Item::new(ItemKind::Skin, Rarity::Blue, WeaponId::AK47, 0);
        let gloves = Item::new(ItemKind::Gloves, Rarity::Gold, WeaponId::SPORT_GLOVES, 0);
        let sticker = Item::new(ItemKind::Sticker, Rarity::Blue, WeaponId::STICKER, 0);
        assert!(skin.has_paint_kit());
        assert!(gloves.has_paint_kit());
        assert!(!sticker.has_paint_kit());
        assert!(sticker.is_sticker());
    }

    #[test]
    fn item_deserializes_with_defaults() {
        let item: Item =
            serde_json::from_str(r#"{"kind": "music", "weapon_id": 1314}"#).unwrap();
        assert_eq!(item.kind, ItemKind::Music);
        assert_eq!(item.rarity, Rarity::Default);
        assert_eq!(item.weapon_id, WeaponId::MUSIC_KIT);
        assert_eq!(item.data_index, 0);
    }
}
