//! Traits for inventory query execution.
//!
//! This module defines the [`InventoryQueryable`] trait that must be
//! implemented by any dataset that wants to execute inventory queries.
//!
//! # Architecture Note
//!
//! This crate intentionally does NOT depend on a concrete store crate to
//! avoid cyclic dependencies. The trait is defined here, but
//! implementations for concrete dataset types should be done in the
//! consuming crate.
//!
//! # Example: Implementing InventoryQueryable for a dataset
//!
//! ```ignore
//! use std::collections::{HashMap, HashSet};
//! use phono_query_executor::InventoryQueryable;
//!
//! struct Dataset {
//!     inventories: HashMap<String, Vec<String>>,
//!     parses: HashMap<String, HashSet<String>>,
//! }
//!
//! impl InventoryQueryable for Dataset {
//!     fn language_ids(&self) -> Box<dyn Iterator<Item = &str> + '_> {
//!         Box::new(self.inventories.keys().map(String::as_str))
//!     }
//!
//!     fn inventory(&self, language_id: &str) -> Option<&[String]> {
//!         self.inventories.get(language_id).map(Vec::as_slice)
//!     }
//!
//!     fn segment_features(&self, segment: &str) -> Option<&HashSet<String>> {
//!         self.parses.get(segment)
//!     }
//! }
//! ```

use std::collections::HashSet;

/// Trait for datasets that can be queried for inventory counts.
///
/// This trait abstracts the backing tables (language → inventory and
/// segment → feature set), allowing the executor to work with different
/// dataset representations. Both tables are treated as immutable for the
/// lifetime of a query; implementations are shared read-only across the
/// evaluation of every language.
///
/// Implement this trait for your dataset type in your application crate.
/// See the module-level documentation for a complete example.
pub trait InventoryQueryable: Send + Sync {
    /// Returns an iterator over all language identifiers in the dataset.
    ///
    /// Iteration order is unspecified; the executor treats results as an
    /// unordered set.
    fn language_ids(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Returns the ordered segment inventory for a language.
    ///
    /// Returns `None` if the language is not present. Segments are not
    /// deduplicated; the slice reflects the source data as loaded.
    fn inventory(&self, language_id: &str) -> Option<&[String]>;

    /// Returns the distinctive-feature set realised by a segment.
    ///
    /// Returns `None` for segments absent from the parse table; such
    /// segments are treated as having an empty feature set.
    fn segment_features(&self, segment: &str) -> Option<&HashSet<String>>;

    /// Checks whether a language is present in the dataset.
    fn has_language(&self, language_id: &str) -> bool {
        self.inventory(language_id).is_some()
    }

    /// Returns the number of languages in the dataset.
    fn language_count(&self) -> usize {
        self.language_ids().count()
    }
}
