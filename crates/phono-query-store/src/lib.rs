//! # phono-query-store
//!
//! JSON-backed inventory dataset and driver commands for the phono-query
//! workspace.
//!
//! This crate supplies the concrete [`InventoryStore`] implementing the
//! executor's `InventoryQueryable` trait, loaded once from two plain
//! key→value JSON files:
//!
//! - `inventories.json` — language identifier → ordered segment list
//! - `parses_cache.json` — segment → list of realised feature names
//!
//! It also ships three thin driver binaries, one per query shape:
//!
//! | binary | stdin lines |
//! |--------|-------------|
//! | `comparison-query` | operator, tag array, tag array |
//! | `count-query` | operator, target, tag array |
//! | `phoneme-query` | operator, target, phoneme |
//!
//! Each command loads the caches from the current directory, evaluates
//! the query, and prints one JSON array of the selected language
//! identifiers (sorted for stable output). On any error it prints a
//! diagnostic to stderr and exits non-zero without emitting results.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod input;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::InventoryStore;

/// Default path of the inventory cache file.
pub const INVENTORIES_FILE: &str = "inventories.json";

/// Default path of the parse cache file.
pub const PARSES_FILE: &str = "parses_cache.json";
