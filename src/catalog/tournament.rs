//! Derived index over tournament stickers.
//!
//! Holds positions into the primary item sequence, ordered by tournament id,
//! team, player id, golden stickers first and then highest rarity first. A
//! tournament's stickers therefore form one contiguous block, and inside it
//! the team-level sticker with the best finish comes first for each team.

use crate::items::Item;
use crate::kits::{KitResolver, StickerKit, TournamentTeam};
use std::cmp::Ordering;
use std::ops::Range;

#[derive(Clone, Debug, Default)]
pub(crate) struct TournamentStickers {
    order: Vec<usize>,
}

fn compare_stickers<K: KitResolver>(a: &Item, b: &Item, kits: &K) -> Ordering {
    let (kit_a, kit_b) = (kits.sticker_kit(a), kits.sticker_kit(b));
    kit_a
        .tournament_id
        .cmp(&kit_b.tournament_id)
        .then_with(|| kit_a.tournament_team.cmp(&kit_b.tournament_team))
        .then_with(|| kit_a.tournament_player_id.cmp(&kit_b.tournament_player_id))
        .then_with(|| kit_b.is_golden.cmp(&kit_a.is_golden))
        .then_with(|| b.rarity.cmp(&a.rarity))
}

impl TournamentStickers {
    /// Index the stickers found at `stickers` in an already sorted item list.
    pub(crate) fn build<K: KitResolver>(items: &[Item], stickers: Range<usize>, kits: &K) -> Self {
        let mut order: Vec<usize> = stickers.filter(|&i| items[i].is_sticker()).collect();
        order.sort_unstable_by(|&a, &b| compare_stickers(&items[a], &items[b], kits));
        Self { order }
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn positions(&self) -> &[usize] {
        &self.order
    }

    /// Positions of every sticker from `tournament_id`, in index order.
    pub(crate) fn range<K: KitResolver>(
        &self,
        items: &[Item],
        kits: &K,
        tournament_id: u32,
    ) -> &[usize] {
        let tournament = |i: usize| kits.sticker_kit(&items[i]).tournament_id;
        let start = self.order.partition_point(|&i| tournament(i) < tournament_id);
        let end = self.order.partition_point(|&i| tournament(i) <= tournament_id);
        &self.order[start..end]
    }

    /// Kit id of the first sticker indexed for `tournament_id`, or 0.
    pub(crate) fn event_sticker_id<K: KitResolver>(
        &self,
        items: &[Item],
        kits: &K,
        tournament_id: u32,
    ) -> u32 {
        self.range(items, kits, tournament_id)
            .first()
            .map(|&i| kits.sticker_kit(&items[i]))
            .filter(|kit| kit.tournament_id == tournament_id)
            .map_or(0, |kit| kit.id)
    }

    /// Kit id of the leading sticker for `team` within `tournament_id`, or 0.
    pub(crate) fn team_sticker_id<K: KitResolver>(
        &self,
        items: &[Item],
        kits: &K,
        tournament_id: u32,
        team: TournamentTeam,
    ) -> u32 {
        let range = self.range(items, kits, tournament_id);
        let position =
            range.partition_point(|&i| kits.sticker_kit(&items[i]).tournament_team < team);
        range
            .get(position)
            .map(|&i| kits.sticker_kit(&items[i]))
            .filter(|kit| kit.tournament_team == team)
            .map_or(0, |kit| kit.id)
    }

    // Player ids repeat across teams' blocks, so this stays a scan.
    pub(crate) fn player_sticker_id<K: KitResolver>(
        &self,
        items: &[Item],
        kits: &K,
        tournament_id: u32,
        tournament_player_id: u32,
    ) -> u32 {
        self.range(items, kits, tournament_id)
            .iter()
            .map(|&i| kits.sticker_kit(&items[i]))
            .find(|kit: &&StickerKit| kit.tournament_player_id == tournament_player_id)
            .map_or(0, |kit| kit.id)
    }
}
