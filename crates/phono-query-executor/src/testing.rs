//! In-memory dataset fixture shared by this crate's test modules.

use std::collections::{HashMap, HashSet};

use crate::traits::InventoryQueryable;

/// Minimal in-memory dataset built with a fluent API.
#[derive(Debug, Default)]
pub(crate) struct TestStore {
    inventories: HashMap<String, Vec<String>>,
    parses: HashMap<String, HashSet<String>>,
}

impl TestStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_inventory(mut self, language_id: &str, segments: &[&str]) -> Self {
        self.inventories.insert(
            language_id.to_string(),
            segments.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub(crate) fn with_parse(mut self, segment: &str, features: &[&str]) -> Self {
        self.parses.insert(
            segment.to_string(),
            features.iter().map(|f| f.to_string()).collect(),
        );
        self
    }
}

impl InventoryQueryable for TestStore {
    fn language_ids(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.inventories.keys().map(String::as_str))
    }

    fn inventory(&self, language_id: &str) -> Option<&[String]> {
        self.inventories.get(language_id).map(Vec::as_slice)
    }

    fn segment_features(&self, segment: &str) -> Option<&HashSet<String>> {
        self.parses.get(segment)
    }
}
