//! Query result types for inventory query execution.

use std::collections::HashSet;
use std::time::Duration;

use phono_query::LanguageId;

/// Result of an inventory query execution.
///
/// Contains the selected language identifiers and execution statistics.
/// The identifiers form an unordered set; consumers needing stable output
/// should use [`QueryResult::to_vec`], which sorts.
///
/// # Example
///
/// ```ignore
/// let result = executor.execute(&query)?;
///
/// println!("{} languages selected", result.count());
/// if result.contains(42) {
///     println!("language 42 satisfies the query");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// Set of selected language identifiers.
    pub language_ids: HashSet<LanguageId>,
    /// Execution statistics.
    pub stats: ExecutionStats,
}

impl QueryResult {
    /// Creates a new QueryResult with the given language identifiers.
    pub fn new(language_ids: HashSet<LanguageId>, stats: ExecutionStats) -> Self {
        Self {
            language_ids,
            stats,
        }
    }

    /// Creates an empty QueryResult.
    pub fn empty() -> Self {
        Self {
            language_ids: HashSet::new(),
            stats: ExecutionStats::default(),
        }
    }

    /// Returns the number of selected languages.
    pub fn count(&self) -> usize {
        self.language_ids.len()
    }

    /// Returns true if no language was selected.
    pub fn is_empty(&self) -> bool {
        self.language_ids.is_empty()
    }

    /// Checks if a specific language is in the result set.
    pub fn contains(&self, language_id: LanguageId) -> bool {
        self.language_ids.contains(&language_id)
    }

    /// Returns an iterator over selected language identifiers.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageId> {
        self.language_ids.iter()
    }

    /// Converts the result set to a sorted Vec.
    pub fn to_vec(&self) -> Vec<LanguageId> {
        let mut vec: Vec<LanguageId> = self.language_ids.iter().copied().collect();
        vec.sort_unstable();
        vec
    }
}

impl IntoIterator for QueryResult {
    type Item = LanguageId;
    type IntoIter = std::collections::hash_set::IntoIter<LanguageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.language_ids.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a LanguageId;
    type IntoIter = std::collections::hash_set::Iter<'a, LanguageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.language_ids.iter()
    }
}

/// Statistics from inventory query execution.
#[derive(Debug, Clone, Default)]
pub struct ExecutionStats {
    /// Total execution duration.
    pub duration: Duration,
    /// Number of languages scanned during execution.
    pub languages_scanned: usize,
    /// Whether the result was served from cache.
    pub cache_hit: bool,
}

impl ExecutionStats {
    /// Creates new execution stats.
    pub fn new(duration: Duration, languages_scanned: usize, cache_hit: bool) -> Self {
        Self {
            duration,
            languages_scanned,
            cache_hit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_result_empty() {
        let result = QueryResult::empty();
        assert_eq!(result.count(), 0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_query_result_with_languages() {
        let language_ids: HashSet<LanguageId> = [1, 2, 3].into_iter().collect();
        let result = QueryResult::new(language_ids, ExecutionStats::default());

        assert_eq!(result.count(), 3);
        assert!(!result.is_empty());
        assert!(result.contains(1));
        assert!(result.contains(3));
        assert!(!result.contains(4));
    }

    #[test]
    fn test_query_result_to_vec_sorts() {
        let language_ids: HashSet<LanguageId> = [30, 10, 20].into_iter().collect();
        let result = QueryResult::new(language_ids, ExecutionStats::default());

        assert_eq!(result.to_vec(), vec![10, 20, 30]);
    }

    #[test]
    fn test_query_result_into_iter() {
        let language_ids: HashSet<LanguageId> = [1, 2].into_iter().collect();
        let result = QueryResult::new(language_ids, ExecutionStats::default());

        let collected: HashSet<LanguageId> = result.into_iter().collect();
        assert!(collected.contains(&1));
        assert!(collected.contains(&2));
    }

    #[test]
    fn test_execution_stats() {
        let stats = ExecutionStats::new(Duration::from_millis(5), 2000, true);

        assert_eq!(stats.duration, Duration::from_millis(5));
        assert_eq!(stats.languages_scanned, 2000);
        assert!(stats.cache_hit);
    }
}
