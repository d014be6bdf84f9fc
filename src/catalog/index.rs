//! Query-optimized, immutable view of the item storage.
//!
//! Construction sorts the items once and derives the tournament sticker index
//! from the sticker run; after that every lookup is a read over sorted slices.
//! Missing items come back as `None` and missing sticker ids as `0`.

use crate::catalog::legacy;
use crate::catalog::primary;
use crate::catalog::tournament::TournamentStickers;
use crate::items::{Item, ItemKind, WeaponId};
use crate::kits::{KitResolver, KitTables, TournamentTeam};
use crate::storage::ItemStorage;
use anyhow::Result;
use rand::Rng;
use std::ops::Range;
use std::path::Path;

#[derive(Debug, Default)]
/// Sorted item sequence, its kit accessors and the derived sticker index.
pub struct ItemCatalog<K = KitTables> {
    items: Vec<Item>,
    kits: K,
    tournament_stickers: TournamentStickers,
}

impl ItemCatalog<KitTables> {
    /// Build from validated storage.
    pub fn from_storage(storage: ItemStorage) -> Self {
        let (items, kits) = storage.into_parts();
        Self::build(items, kits)
    }

    /// Load storage from disk and build the catalog from it.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_storage(ItemStorage::load(path)?))
    }
}

impl<K: KitResolver> ItemCatalog<K> {
    /// Sort `items` and derive the tournament sticker index.
    pub fn build(mut items: Vec<Item>, kits: K) -> Self {
        primary::sort_items(&mut items, &kits);
        let stickers = primary::category_range(&items, WeaponId::STICKER);
        let tournament_stickers = TournamentStickers::build(&items, stickers, &kits);
        tracing::debug!(
            items = items.len(),
            tournament_stickers = tournament_stickers.len(),
            "built item catalog"
        );
        Self {
            items,
            kits,
            tournament_stickers,
        }
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn kits(&self) -> &K {
        &self.kits
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Positions of `weapon_id` inside [`Self::items`].
    pub fn category_range(&self, weapon_id: WeaponId) -> Range<usize> {
        primary::category_range(&self.items, weapon_id)
    }

    /// Every item sharing `weapon_id`.
    pub fn category(&self, weapon_id: WeaponId) -> &[Item] {
        &self.items[self.category_range(weapon_id)]
    }

    /// Skin or gloves of `weapon_id` painted with `paint_kit`.
    ///
    /// Returns `None` when the weapon's items carry no paint kit at all.
    pub fn item_with_paint_kit(&self, weapon_id: WeaponId, paint_kit: u32) -> Option<&Item> {
        primary::find_by_paint_kit(self.category(weapon_id), &self.kits, paint_kit)
    }

    /// First item at or after `weapon_id` in catalog order.
    ///
    /// The weapon id of the result is not checked: callers are expected to ask
    /// for a weapon that exists. For an absent weapon this yields the next
    /// item in order, or `None` only past the end of the catalog.
    pub fn item(&self, weapon_id: WeaponId) -> Option<&Item> {
        self.items.get(primary::lower_bound(&self.items, weapon_id))
    }

    pub fn music(&self, music_kit: u32) -> Option<&Item> {
        self.find_item(WeaponId::MUSIC_KIT, ItemKind::Music, music_kit, |kits, item| {
            kits.music_kit(item).id
        })
    }

    pub fn sticker(&self, sticker_kit: u32) -> Option<&Item> {
        self.find_item(WeaponId::STICKER, ItemKind::Sticker, sticker_kit, |kits, item| {
            kits.sticker_kit(item).id
        })
    }

    pub fn graffiti(&self, graffiti_id: u32) -> Option<&Item> {
        self.find_item(WeaponId::GRAFFITI, ItemKind::Graffiti, graffiti_id, |kits, item| {
            kits.graffiti_kit(item).id
        })
    }

    pub fn sealed_graffiti(&self, graffiti_id: u32) -> Option<&Item> {
        self.find_item(
            WeaponId::SEALED_GRAFFITI,
            ItemKind::SealedGraffiti,
            graffiti_id,
            |kits, item| kits.graffiti_kit(item).id,
        )
    }

    pub fn patch(&self, patch_id: u32) -> Option<&Item> {
        self.find_item(WeaponId::PATCH, ItemKind::Patch, patch_id, |kits, item| {
            kits.patch_kit(item).id
        })
    }

    /// Stickers of `tournament_id` in tournament index order.
    pub fn tournament_stickers(&self, tournament_id: u32) -> impl Iterator<Item = &Item> {
        self.tournament_stickers
            .range(&self.items, &self.kits, tournament_id)
            .iter()
            .map(move |&i| &self.items[i])
    }

    /// Every sticker in tournament index order.
    pub fn tournament_index(&self) -> impl Iterator<Item = &Item> {
        self.tournament_stickers
            .positions()
            .iter()
            .map(move |&i| &self.items[i])
    }

    /// Event sticker kit id for `tournament_id`, or 0 when none is known.
    pub fn event_sticker_id(&self, tournament_id: u32) -> u32 {
        self.event_sticker_id_with(tournament_id, &mut rand::thread_rng())
    }

    /// Same as [`Self::event_sticker_id`] with a caller-supplied RNG for the
    /// tournaments that pick among several event stickers.
    pub fn event_sticker_id_with<R: Rng>(&self, tournament_id: u32, rng: &mut R) -> u32 {
        if let Some(id) = legacy::event_sticker(tournament_id, rng) {
            tracing::trace!(tournament_id, id, "legacy event sticker");
            return id;
        }
        self.tournament_stickers
            .event_sticker_id(&self.items, &self.kits, tournament_id)
    }

    /// Gold sticker kit id for `team` at `tournament_id`, or 0.
    pub fn team_gold_sticker_id(&self, tournament_id: u32, team: TournamentTeam) -> u32 {
        if tournament_id == 0 || team.is_none() {
            return 0;
        }
        if let Some(id) = legacy::all_star_team_sticker(team) {
            return id;
        }
        self.tournament_stickers
            .team_sticker_id(&self.items, &self.kits, tournament_id, team)
    }

    /// Gold sticker kit id for a player at `tournament_id`, or 0.
    pub fn player_gold_sticker_id(&self, tournament_id: u32, tournament_player_id: u32) -> u32 {
        self.tournament_stickers.player_sticker_id(
            &self.items,
            &self.kits,
            tournament_id,
            tournament_player_id,
        )
    }

    fn find_item<F>(&self, weapon_id: WeaponId, kind: ItemKind, id: u32, project: F) -> Option<&Item>
    where
        F: Fn(&K, &Item) -> u32,
    {
        primary::find_by_kit_id(self.category(weapon_id), &self.kits, kind, id, project)
    }
}
