//! Raw item storage: the unsorted item list plus its kit tables.
//!
//! Storage is the only fallible stage. Loading validates that every item's
//! `data_index` resolves in the kit table for its kind so that the catalog and
//! its kit accessors can stay infallible afterwards.

use crate::items::Item;
use crate::kits::KitTables;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct StorageDocument {
    items: Vec<Item>,
    #[serde(flatten)]
    kits: KitTables,
}

/// Validated item collection and kit tables, as supplied to the catalog.
#[derive(Clone, Debug, Default)]
pub struct ItemStorage {
    items: Vec<Item>,
    kits: KitTables,
}

impl ItemStorage {
    /// Pair an item list with its kit tables, rejecting dangling kit references.
    pub fn new(items: Vec<Item>, kits: KitTables) -> Result<Self> {
        validate_kit_references(&items, &kits)?;
        Ok(Self { items, kits })
    }

    /// Parse a storage document from JSON text.
    pub fn from_json(data: &str) -> Result<Self> {
        let doc: StorageDocument =
            serde_json::from_str(data).context("parsing item storage document")?;
        Self::new(doc.items, doc.kits)
    }

    /// Read and validate a storage document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading item storage {}", path.display()))?;
        let storage = Self::from_json(&data)
            .with_context(|| format!("loading item storage {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            items = storage.items.len(),
            "loaded item storage"
        );
        Ok(storage)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn kits(&self) -> &KitTables {
        &self.kits
    }

    pub fn into_parts(self) -> (Vec<Item>, KitTables) {
        (self.items, self.kits)
    }
}

fn validate_kit_references(items: &[Item], kits: &KitTables) -> Result<()> {
    for (position, item) in items.iter().enumerate() {
        let Some(len) = kits.table_len(item.kind) else {
            continue;
        };
        if item.data_index >= len {
            bail!(
                "item {} ({} {}) references kit {} but only {} {} kits exist",
                position,
                item.kind.as_str(),
                item.weapon_id,
                item.data_index,
                len,
                item.kind.as_str()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ItemKind, Rarity, WeaponId};
    use crate::kits::{NamedKit, PaintKit};

    #[test]
    fn rejects_dangling_paint_kit_index() {
        let items = vec![Item::new(ItemKind::Skin, Rarity::Blue, WeaponId::AK47, 1)];
        let kits = KitTables {
            paint_kits: vec![PaintKit::new(44, "Case Hardened")],
            ..KitTables::default()
        };
        let err = ItemStorage::new(items, kits).unwrap_err();
        assert!(err.to_string().contains("references kit 1"), "{err}");
    }

    #[test]
    fn plain_items_need_no_kit() {
        let items = vec![
            Item::new(ItemKind::Case, Rarity::Default, WeaponId(4001), 17),
            Item::new(ItemKind::Music, Rarity::Blue, WeaponId::MUSIC_KIT, 0),
        ];
        let kits = KitTables {
            music_kits: vec![NamedKit::new(3, "Crimson Assault")],
            ..KitTables::default()
        };
        let storage = ItemStorage::new(items, kits).unwrap();
        assert_eq!(storage.items().len(), 2);
        assert_eq!(storage.kits().music_kits.len(), 1);
    }

    #[test]
    fn from_json_reads_flattened_kit_tables() {
        let storage = ItemStorage::from_json(
            r#"{
                "items": [{"kind": "patch", "weapon_id": 4609, "rarity": "purple"}],
                "patch_kits": [{"id": 4550, "name": "Dragon"}]
            }"#,
        )
        .unwrap();
        let (items, kits) = storage.into_parts();
        assert_eq!(items[0].rarity, Rarity::Purple);
        assert_eq!(kits.patch_kits[0].id, 4550);
        assert!(kits.sticker_kits.is_empty());
    }

    #[test]
    fn from_json_requires_items() {
        assert!(ItemStorage::from_json(r#"{"paint_kits": []}"#).is_err());
    }
}
