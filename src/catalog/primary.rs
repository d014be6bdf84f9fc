//! Ordering and searches over the primary item sequence.
//!
//! The sequence is sorted by `weapon_id`, and within a weapon by paint kit id
//! for skins and gloves. Items without a paint kit sort ahead of the skins
//! sharing their `weapon_id`, which keeps the comparator a total order even
//! when one definition index carries both kinds.

use crate::items::{Item, ItemKind, WeaponId};
use crate::kits::KitResolver;
use std::ops::Range;

fn sort_key<K: KitResolver>(item: &Item, kits: &K) -> (WeaponId, Option<u32>) {
    let paint_kit = item.has_paint_kit().then(|| kits.paint_kit(item).id);
    (item.weapon_id, paint_kit)
}

pub(crate) fn sort_items<K: KitResolver>(items: &mut [Item], kits: &K) {
    items.sort_unstable_by(|a, b| sort_key(a, kits).cmp(&sort_key(b, kits)));
}

/// First position whose `weapon_id` is not less than `weapon_id`.
pub(crate) fn lower_bound(items: &[Item], weapon_id: WeaponId) -> usize {
    items.partition_point(|item| item.weapon_id < weapon_id)
}

/// Equal range of `weapon_id`; empty (and positioned at the insertion point)
/// when the weapon is absent.
pub(crate) fn category_range(items: &[Item], weapon_id: WeaponId) -> Range<usize> {
    let start = lower_bound(items, weapon_id);
    let end = start + items[start..].partition_point(|item| item.weapon_id <= weapon_id);
    start..end
}

/// Binary search of a single weapon's run by paint kit id.
///
/// Runs that do not start with a skin or gloves have no paint kit ordering and
/// never match.
pub(crate) fn find_by_paint_kit<'a, K: KitResolver>(
    run: &'a [Item],
    kits: &K,
    paint_kit: u32,
) -> Option<&'a Item> {
    if !run.first()?.has_paint_kit() {
        return None;
    }
    let position = run.partition_point(|item| kits.paint_kit(item).id < paint_kit);
    run.get(position)
        .filter(|&item| kits.paint_kit(item).id == paint_kit)
}

/// Linear scan of a run for the item of `kind` whose projected kit id is `id`.
pub(crate) fn find_by_kit_id<'a, K, F>(
    run: &'a [Item],
    kits: &K,
    kind: ItemKind,
    id: u32,
    project: F,
) -> Option<&'a Item>
where
    K: KitResolver,
    F: Fn(&K, &Item) -> u32,
{
    run.iter()
        .find(|&item| item.kind == kind && project(kits, item) == id)
}
