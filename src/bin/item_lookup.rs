//! Query an item catalog from the command line.
//!
//! Usage:
//!   item-lookup --storage data/items.json item --weapon 7 --paint-kit 180
//!   item-lookup sticker --id 4000
//!   item-lookup team-gold --tournament 5 --team 6
//!
//! Results are printed to stdout as JSON; logs go to stderr (`RUST_LOG`).

use anyhow::Result;
use clap::{Parser, Subcommand};
use item_catalog::{CatalogConfig, Item, ItemCatalog, TournamentTeam, WeaponId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "item-lookup")]
#[command(about = "Look up items and sticker ids in an item catalog")]
struct Cli {
    /// Item storage document; falls back to ITEM_CATALOG_STORAGE, then data/items.json.
    #[arg(long, global = true)]
    storage: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Item by weapon id, optionally narrowed to one paint kit.
    Item {
        #[arg(long)]
        weapon: u16,
        #[arg(long)]
        paint_kit: Option<u32>,
    },
    /// Music kit item by music kit id.
    Music {
        #[arg(long)]
        id: u32,
    },
    /// Sticker item by sticker kit id.
    Sticker {
        #[arg(long)]
        id: u32,
    },
    /// Graffiti item by graffiti id.
    Graffiti {
        #[arg(long)]
        id: u32,
    },
    /// Sealed graffiti item by graffiti id.
    SealedGraffiti {
        #[arg(long)]
        id: u32,
    },
    /// Patch item by patch kit id.
    Patch {
        #[arg(long)]
        id: u32,
    },
    /// Event sticker id for a tournament.
    EventSticker {
        #[arg(long)]
        tournament: u32,
        /// Seed for tournaments that pick among several event stickers.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Gold sticker id for a team at a tournament.
    TeamGold {
        #[arg(long)]
        tournament: u32,
        #[arg(long)]
        team: u8,
    },
    /// Gold sticker id for a player at a tournament.
    PlayerGold {
        #[arg(long)]
        tournament: u32,
        #[arg(long)]
        player: u32,
    },
    /// Item counts per kind.
    Stats,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn item_json(item: Option<&Item>) -> Result<Value> {
    Ok(match item {
        Some(item) => serde_json::to_value(item)?,
        None => Value::Null,
    })
}

fn stats_json(catalog: &ItemCatalog) -> Value {
    let mut by_kind: BTreeMap<&'static str, usize> = BTreeMap::new();
    for item in catalog.items() {
        *by_kind.entry(item.kind.as_str()).or_default() += 1;
    }
    json!({
        "items": catalog.len(),
        "tournament_stickers": catalog.tournament_index().count(),
        "by_kind": by_kind,
    })
}

fn run(cli: Cli) -> Result<Value> {
    let config = CatalogConfig::resolve(cli.storage);
    let catalog = config.load_catalog()?;

    let output = match cli.command {
        Command::Item { weapon, paint_kit } => {
            let weapon_id = WeaponId::from(weapon);
            let item = match paint_kit {
                Some(paint_kit) => catalog.item_with_paint_kit(weapon_id, paint_kit),
                None => catalog.item(weapon_id),
            };
            item_json(item)?
        }
        Command::Music { id } => item_json(catalog.music(id))?,
        Command::Sticker { id } => item_json(catalog.sticker(id))?,
        Command::Graffiti { id } => item_json(catalog.graffiti(id))?,
        Command::SealedGraffiti { id } => item_json(catalog.sealed_graffiti(id))?,
        Command::Patch { id } => item_json(catalog.patch(id))?,
        Command::EventSticker { tournament, seed } => {
            let id = match seed {
                Some(seed) => {
                    catalog.event_sticker_id_with(tournament, &mut StdRng::seed_from_u64(seed))
                }
                None => catalog.event_sticker_id(tournament),
            };
            json!({ "id": id })
        }
        Command::TeamGold { tournament, team } => {
            json!({ "id": catalog.team_gold_sticker_id(tournament, TournamentTeam(team)) })
        }
        Command::PlayerGold { tournament, player } => {
            json!({ "id": catalog.player_gold_sticker_id(tournament, player) })
        }
        Command::Stats => stats_json(&catalog),
    };
    Ok(output)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let output = run(cli)?;
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}
