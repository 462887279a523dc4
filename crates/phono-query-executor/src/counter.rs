//! Per-inventory counting for query evaluation.
//!
//! This module provides the [`InventoryCounter`], which applies a
//! [`FeatureQuery`] (or a single-phoneme presence test) across the
//! segments of one inventory and produces a scalar count.

use phono_query::FeatureQuery;

use crate::traits::InventoryQueryable;

/// Counts matching segments within one inventory.
///
/// The counter is a thin wrapper around the dataset: all methods are pure
/// functions over the shared read-only tables, so one counter can be used
/// for every inventory in a pass.
///
/// # Example
///
/// ```ignore
/// use phono_query_executor::InventoryCounter;
///
/// let counter = InventoryCounter::new(&store);
/// let nasals = counter.count_features(inventory, &nasal_query);
/// ```
pub struct InventoryCounter<'a> {
    store: &'a dyn InventoryQueryable,
}

impl<'a> InventoryCounter<'a> {
    /// Creates a counter over the given dataset.
    pub fn new(store: &'a dyn InventoryQueryable) -> Self {
        Self { store }
    }

    /// Tests one segment against a feature query.
    ///
    /// Segments without an entry in the parse table have an empty feature
    /// set: they satisfy every negative constraint and fail every
    /// positive one.
    pub fn segment_matches(&self, segment: &str, query: &FeatureQuery) -> bool {
        match self.store.segment_features(segment) {
            Some(features) => query.matches(features),
            None => query.matches_unparsed(),
        }
    }

    /// Counts the segments of an inventory matching a feature query.
    ///
    /// The empty query matches every segment, so its count is the
    /// inventory length (including any duplicate segments in the source
    /// data).
    pub fn count_features(&self, inventory: &[String], query: &FeatureQuery) -> i64 {
        inventory
            .iter()
            .filter(|segment| self.segment_matches(segment, query))
            .count() as i64
    }

    /// Returns 1 if the phoneme occurs anywhere in the inventory, else 0.
    ///
    /// Presence, not frequency: the scan stops at the first occurrence,
    /// so a duplicated phoneme still counts once.
    pub fn count_phoneme(&self, inventory: &[String], phoneme: &str) -> i64 {
        i64::from(inventory.iter().any(|segment| segment == phoneme))
    }
}
