//! JSON-backed in-memory inventory dataset.
//!
//! The dataset consists of two plain key→value JSON tables:
//! - `inventories.json`: language identifier → ordered list of segments;
//! - `parses_cache.json`: segment → list of realised feature names.
//!
//! Both tables are loaded fully into memory once and never mutated
//! afterwards; every query shares them read-only.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use phono_query_executor::InventoryQueryable;

use crate::error::{StoreError, StoreResult};

/// In-memory inventory dataset implementing [`InventoryQueryable`].
///
/// # Example
///
/// ```ignore
/// use phono_query_store::InventoryStore;
/// use phono_query_executor::QueryExecutor;
///
/// let store = InventoryStore::load("inventories.json", "parses_cache.json")?;
/// let executor = QueryExecutor::new(&store);
/// ```
#[derive(Debug, Default)]
pub struct InventoryStore {
    /// Language identifier → ordered segment inventory.
    inventories: HashMap<String, Vec<String>>,
    /// Segment → realised feature set.
    parses: HashMap<String, HashSet<String>>,
}

impl InventoryStore {
    /// Creates a store from already-materialised tables.
    ///
    /// Feature lists are converted to sets; their order in the cache file
    /// carries no meaning.
    pub fn new(
        inventories: HashMap<String, Vec<String>>,
        parses: HashMap<String, Vec<String>>,
    ) -> Self {
        let parses = parses
            .into_iter()
            .map(|(segment, features)| (segment, features.into_iter().collect()))
            .collect();
        Self {
            inventories,
            parses,
        }
    }

    /// Creates a store with inventories only.
    ///
    /// Sufficient for phoneme-presence queries, which never consult the
    /// parse table.
    pub fn from_inventories(inventories: HashMap<String, Vec<String>>) -> Self {
        Self {
            inventories,
            parses: HashMap::new(),
        }
    }

    /// Loads both cache files.
    pub fn load(
        inventories_path: impl AsRef<Path>,
        parses_path: impl AsRef<Path>,
    ) -> StoreResult<Self> {
        Ok(Self::new(
            load_table(inventories_path.as_ref())?,
            load_table(parses_path.as_ref())?,
        ))
    }

    /// Loads the inventory cache file only.
    pub fn load_inventories(inventories_path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self::from_inventories(load_table(
            inventories_path.as_ref(),
        )?))
    }

    /// Returns the number of segments with a parse table entry.
    pub fn parsed_segment_count(&self) -> usize {
        self.parses.len()
    }
}

impl InventoryQueryable for InventoryStore {
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

/// Loads one string → string-list JSON table.
fn load_table(path: &Path) -> StoreResult<HashMap<String, Vec<String>>> {
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Json {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use phono_query::{parse_feature_tags, ComparisonOp, Query};
    use phono_query_executor::QueryExecutor;

    use super::*;

    fn write_json(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_both_tables() {
        let dir = tempfile::tempdir().unwrap();
        let inventories = write_json(
            dir.path(),
            "inventories.json",
            r#"{"1": ["p", "t", "k"], "2": ["m", "p"]}"#,
        );
        let parses = write_json(
            dir.path(),
            "parses_cache.json",
            r#"{"m": ["nasal", "voice"], "p": [], "t": [], "k": []}"#,
        );

        let store = InventoryStore::load(&inventories, &parses).unwrap();
        assert_eq!(store.language_count(), 2);
        assert_eq!(store.parsed_segment_count(), 4);
        assert_eq!(store.inventory("2").unwrap(), &["m", "p"]);
        assert!(store.segment_features("m").unwrap().contains("nasal"));
        assert!(store.segment_features("m").unwrap().contains("voice"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = InventoryStore::load_inventories(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_json(dir.path(), "inventories.json", r#"{"1": "not-a-list"}"#);
        let err = InventoryStore::load_inventories(&path).unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
    }

    #[test]
    fn test_loaded_store_answers_queries() {
        let dir = tempfile::tempdir().unwrap();
        let inventories = write_json(
            dir.path(),
            "inventories.json",
            r#"{"1": ["p", "t", "k"], "2": ["t", "k"], "3": ["m", "p"]}"#,
        );
        let parses = write_json(
            dir.path(),
            "parses_cache.json",
            r#"{"m": ["nasal"], "p": [], "t": [], "k": []}"#,
        );
        let store = InventoryStore::load(&inventories, &parses).unwrap();
        let executor = QueryExecutor::new(&store);

        // Languages without /p/.
        let query = Query::phoneme("p", ComparisonOp::Equal, 0);
        assert_eq!(executor.execute(&query).unwrap().to_vec(), vec![2]);

        // Languages with exactly one nasal.
        let query = Query::count(parse_feature_tags(&["+nasal"]), ComparisonOp::Equal, 1);
        assert_eq!(executor.execute(&query).unwrap().to_vec(), vec![3]);
    }

    #[test]
    fn test_inventories_only_store() {
        let mut inventories = HashMap::new();
        inventories.insert("9".to_string(), vec!["a".to_string()]);
        let store = InventoryStore::from_inventories(inventories);

        assert!(store.has_language("9"));
        assert_eq!(store.parsed_segment_count(), 0);
        assert!(store.segment_features("a").is_none());
    }
}
