#![allow(dead_code)]

use anyhow::Result;
use item_catalog::{
    Item, ItemCatalog, ItemKind, ItemStorage, KitTables, NamedKit, PaintKit, Rarity, StickerKit,
    TournamentTeam, WeaponId,
};
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

pub const TEAM_A: TournamentTeam = TournamentTeam::FNATIC;
pub const TEAM_B: TournamentTeam = TournamentTeam::NATUS_VINCERE;

// Storage document covering every category the catalog indexes, with items
// deliberately listed out of order.
pub fn sample_storage_json() -> Value {
    json!({
        "items": [
            {"kind": "sticker", "weapon_id": 1209, "rarity": "blue", "data_index": 3},
            {"kind": "skin", "weapon_id": 7, "rarity": "red", "data_index": 1},
            {"kind": "music", "weapon_id": 1314, "rarity": "blue", "data_index": 1},
            {"kind": "gloves", "weapon_id": 5027, "rarity": "gold", "data_index": 3},
            {"kind": "sticker", "weapon_id": 1209, "rarity": "gold", "data_index": 1},
            {"kind": "patch", "weapon_id": 4609, "rarity": "purple", "data_index": 0},
            {"kind": "skin", "weapon_id": 7, "rarity": "pink", "data_index": 0},
            {"kind": "graffiti", "weapon_id": 1348, "rarity": "blue", "data_index": 0},
            {"kind": "sealed_graffiti", "weapon_id": 1349, "rarity": "blue", "data_index": 1},
            {"kind": "sticker", "weapon_id": 1209, "rarity": "pink", "data_index": 0},
            {"kind": "case", "weapon_id": 4001},
            {"kind": "music", "weapon_id": 1314, "rarity": "blue", "data_index": 0},
            {"kind": "skin", "weapon_id": 9, "rarity": "red", "data_index": 2},
            {"kind": "sticker", "weapon_id": 1209, "rarity": "gold", "data_index": 2},
            {"kind": "sticker", "weapon_id": 1209, "rarity": "red", "data_index": 4}
        ],
        "paint_kits": [
            {"id": 44, "name": "Case Hardened"},
            {"id": 180, "name": "Fire Serpent"},
            {"id": 344, "name": "Dragon Lore", "wear_remap_min": 0.0, "wear_remap_max": 0.7},
            {"id": 10006, "name": "Charred"}
        ],
        "sticker_kits": [
            {"id": 4000, "name": "Event", "tournament_id": 5},
            {"id": 4001, "name": "Team A (Gold)", "tournament_id": 5, "tournament_team": 6, "is_golden": true},
            {"id": 4002, "name": "Player (Gold)", "tournament_id": 5, "tournament_team": 6, "tournament_player_id": 77, "is_golden": true},
            {"id": 4100, "name": "Plain sticker"},
            {"id": 4003, "name": "Team B (Holo)", "tournament_id": 5, "tournament_team": 12}
        ],
        "music_kits": [
            {"id": 3, "name": "Crimson Assault"},
            {"id": 9, "name": "Hotline"}
        ],
        "graffiti_kits": [
            {"id": 1700, "name": "Recoil"},
            {"id": 1701, "name": "Sealed Recoil"}
        ],
        "patch_kits": [
            {"id": 4550, "name": "Dragon"}
        ]
    })
}

pub fn write_storage(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, value)?;
    file.flush()?;
    Ok(file)
}

pub fn sample_catalog() -> Result<ItemCatalog> {
    let storage = ItemStorage::from_json(&sample_storage_json().to_string())?;
    Ok(ItemCatalog::from_storage(storage))
}

pub fn sticker_item(rarity: Rarity, data_index: usize) -> Item {
    Item::new(ItemKind::Sticker, rarity, WeaponId::STICKER, data_index)
}

// The two-sticker catalog: an untied event sticker and one Team A sticker,
// both at tournament 5.
pub fn two_sticker_catalog() -> Result<ItemCatalog> {
    let kits = KitTables {
        sticker_kits: vec![
            StickerKit::new(900, "Event").tournament(5, TournamentTeam::NONE),
            StickerKit::new(901, "Team A").tournament(5, TEAM_A),
        ],
        ..KitTables::default()
    };
    let items = vec![sticker_item(Rarity::LightBlue, 1), sticker_item(Rarity::Gray, 0)];
    let storage = ItemStorage::new(items, kits)?;
    Ok(ItemCatalog::from_storage(storage))
}

pub fn ak_and_music_catalog() -> Result<ItemCatalog> {
    let kits = KitTables {
        paint_kits: vec![PaintKit::new(44, "Case Hardened")],
        music_kits: vec![NamedKit::new(3, "Crimson Assault")],
        ..KitTables::default()
    };
    let items = vec![
        Item::new(ItemKind::Skin, Rarity::Pink, WeaponId::AK47, 0),
        Item::new(ItemKind::Music, Rarity::Blue, WeaponId::MUSIC_KIT, 0),
    ];
    Ok(ItemCatalog::from_storage(ItemStorage::new(items, kits)?))
}
