//! Item catalog wiring.
//!
//! `ItemCatalog` owns the sorted item sequence and answers every lookup:
//! point queries against the primary order (`primary`), range queries over the
//! tournament sticker index (`tournament`) and the fixed answers for early
//! tournaments (`legacy`).

pub mod index;
mod legacy;
mod primary;
mod tournament;

pub use index::ItemCatalog;
