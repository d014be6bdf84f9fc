//! Category-specific kit records and the accessors that resolve them.
//!
//! Every item points at exactly one kit through `Item::data_index`; which
//! table the index refers to depends on the item's kind. [`KitResolver`] is the
//! seam the catalog reads kits through, and [`KitTables`] is the owned,
//! table-backed implementation used by [`crate::storage::ItemStorage`].

use crate::items::{Item, ItemKind};
use serde::{Deserialize, Serialize};

/// Tournament team identifier. `NONE` marks stickers that belong to no team;
/// the two all-star values never appear in per-tournament data.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TournamentTeam(pub u8);

impl TournamentTeam {
    pub const NONE: TournamentTeam = TournamentTeam(0);
    pub const NINJAS_IN_PYJAMAS: TournamentTeam = TournamentTeam(1);
    pub const FNATIC: TournamentTeam = TournamentTeam(6);
    pub const NATUS_VINCERE: TournamentTeam = TournamentTeam(12);
    pub const ASTRALIS: TournamentTeam = TournamentTeam(53);
    pub const ALL_STAR_TEAM_AMERICA: TournamentTeam = TournamentTeam(60);
    pub const ALL_STAR_TEAM_EUROPE: TournamentTeam = TournamentTeam(61);

    pub fn is_none(self) -> bool {
        self == TournamentTeam::NONE
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaintKit {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub wear_remap_min: f32,
    #[serde(default = "default_wear_remap_max")]
    pub wear_remap_max: f32,
}

fn default_wear_remap_max() -> f32 {
    1.0
}

impl PaintKit {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wear_remap_min: 0.0,
            wear_remap_max: default_wear_remap_max(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerKit {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tournament_id: u32,
    #[serde(default)]
    pub tournament_team: TournamentTeam,
    #[serde(default)]
    pub tournament_player_id: u32,
    #[serde(default)]
    pub is_golden: bool,
}

impl StickerKit {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn tournament(mut self, tournament_id: u32, team: TournamentTeam) -> Self {
        self.tournament_id = tournament_id;
        self.tournament_team = team;
        self
    }

    pub fn player(mut self, tournament_player_id: u32) -> Self {
        self.tournament_player_id = tournament_player_id;
        self
    }

    pub fn golden(mut self) -> Self {
        self.is_golden = true;
        self
    }
}

/// Kit shape shared by music kits, graffiti and patches: an id and a name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedKit {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

impl NamedKit {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

pub type MusicKit = NamedKit;
pub type GraffitiKit = NamedKit;
pub type PatchKit = NamedKit;

/// Kit accessors the catalog depends on.
///
/// Implementations may assume the item is of the matching kind; the catalog
/// only asks for a paint kit on skins and gloves, a sticker kit on stickers,
/// and so on.
pub trait KitResolver {
    fn paint_kit(&self, item: &Item) -> &PaintKit;
    fn sticker_kit(&self, item: &Item) -> &StickerKit;
    fn music_kit(&self, item: &Item) -> &MusicKit;
    fn graffiti_kit(&self, item: &Item) -> &GraffitiKit;
    fn patch_kit(&self, item: &Item) -> &PatchKit;
}

/// One table per kit kind, addressed by `Item::data_index`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KitTables {
    #[serde(default)]
    pub paint_kits: Vec<PaintKit>,
    #[serde(default)]
    pub sticker_kits: Vec<StickerKit>,
    #[serde(default)]
    pub music_kits: Vec<MusicKit>,
    #[serde(default)]
    pub graffiti_kits: Vec<GraffitiKit>,
    #[serde(default)]
    pub patch_kits: Vec<PatchKit>,
}

impl KitTables {
    /// Number of kit records available to items of `kind`, or `None` when the
    /// kind carries no kit at all.
    pub fn table_len(&self, kind: ItemKind) -> Option<usize> {
        match kind {
            ItemKind::Skin | ItemKind::Gloves => Some(self.paint_kits.len()),
            ItemKind::Sticker => Some(self.sticker_kits.len()),
            ItemKind::Music => Some(self.music_kits.len()),
            ItemKind::Graffiti | ItemKind::SealedGraffiti => Some(self.graffiti_kits.len()),
            ItemKind::Patch => Some(self.patch_kits.len()),
            ItemKind::Agent
            | ItemKind::Case
            | ItemKind::CaseKey
            | ItemKind::Collectible
            | ItemKind::NameTag
            | ItemKind::Other => None,
        }
    }
}

// Indexing is safe for items validated by `ItemStorage::new`.
impl KitResolver for KitTables {
    fn paint_kit(&self, item: &Item) -> &PaintKit {
        &self.paint_kits[item.data_index]
    }

    fn sticker_kit(&self, item: &Item) -> &StickerKit {
        &self.sticker_kits[item.data_index]
    }

    fn music_kit(&self, item: &Item) -> &MusicKit {
        &self.music_kits[item.data_index]
    }

    fn graffiti_kit(&self, item: &Item) -> &GraffitiKit {
        &self.graffiti_kits[item.data_index]
    }

    fn patch_kit(&self, item: &Item) -> &PatchKit {
        &self.patch_kits[item.data_index]
    }
}
