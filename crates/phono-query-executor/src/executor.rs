//! Query executor implementation.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use phono_query::{LanguageId, Query};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cache::{cache_key, QueryCache};
use crate::config::ExecutorConfig;
use crate::counter::InventoryCounter;
use crate::error::{ExecutorError, ExecutorResult};
use crate::result::{ExecutionStats, QueryResult};
use crate::traits::InventoryQueryable;

/// Main query execution engine.
///
/// The executor evaluates a [`Query`] against any dataset implementing
/// [`InventoryQueryable`]: for every language it computes a count or
/// count difference, applies the comparison operator, and collects the
/// identifiers of the languages for which the comparison holds.
///
/// Evaluation is all-or-nothing: the first data-integrity error (a
/// non-numeric language identifier, or a listed language without an
/// inventory) aborts the whole pass with no partial result.
///
/// # Example
///
/// ```ignore
/// use phono_query::{parse_feature_tags, ComparisonOp, Query};
/// use phono_query_executor::QueryExecutor;
///
/// let executor = QueryExecutor::new(&store);
///
/// // Languages with more than three nasal segments.
/// let nasals = parse_feature_tags(&["+nasal"]);
/// let result = executor.execute(&Query::count(nasals, ComparisonOp::Greater, 3))?;
/// println!("{} languages selected", result.count());
/// ```
pub struct QueryExecutor<'a> {
    /// Reference to the queryable dataset.
    store: &'a dyn InventoryQueryable,
    /// Executor configuration.
    config: ExecutorConfig,
    /// Query result cache (optional).
    cache: Option<Arc<QueryCache>>,
}

impl<'a> QueryExecutor<'a> {
    /// Creates a new executor with default configuration.
    pub fn new(store: &'a dyn InventoryQueryable) -> Self {
        Self {
            store,
            config: ExecutorConfig::default(),
            cache: None,
        }
    }

    /// Creates an executor with custom configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = ExecutorConfig::builder()
    ///     .with_cache(CacheConfig::default())
    ///     .build();
    /// let executor = QueryExecutor::with_config(&store, config);
    /// ```
    pub fn with_config(store: &'a dyn InventoryQueryable, config: ExecutorConfig) -> Self {
        let cache = config
            .cache
            .as_ref()
            .map(|c| Arc::new(QueryCache::new(c.clone())));
        Self {
            store,
            config,
            cache,
        }
    }

    /// Returns a reference to the cache if enabled.
    pub fn cache(&self) -> Option<&QueryCache> {
        self.cache.as_ref().map(|c| c.as_ref())
    }

    /// Returns a reference to the executor configuration.
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Executes a query over every language in the dataset.
    ///
    /// If caching is enabled, the result set is cached under the query's
    /// canonical rendering and re-served on subsequent calls.
    ///
    /// # Returns
    ///
    /// * `Ok(QueryResult)` - The selected language identifiers and stats
    /// * `Err(ExecutorError)` - On the first data-integrity error; no
    ///   partial results are produced
    pub fn execute(&self, query: &Query) -> ExecutorResult<QueryResult> {
        let start = Instant::now();

        let key = cache_key(query);
        if let Some(ref cache) = self.cache {
            if let Some(cached) = cache.get(&key) {
                let stats = ExecutionStats::new(start.elapsed(), 0, true);
                return Ok(QueryResult::new(cached, stats));
            }
        }

        let (language_ids, scanned) = self.select(query)?;

        if let Some(ref cache) = self.cache {
            cache.set(key, language_ids.clone());
        }

        let stats = ExecutionStats::new(start.elapsed(), scanned, false);
        Ok(QueryResult::new(language_ids, stats))
    }

    /// Runs the shared selection skeleton over all languages.
    fn select(&self, query: &Query) -> ExecutorResult<(HashSet<LanguageId>, usize)> {
        let ids: Vec<&str> = self.store.language_ids().collect();
        let scanned = ids.len();

        #[cfg(feature = "parallel")]
        if self.config.parallel {
            let selected = ids
                .par_iter()
                .map(|id| self.evaluate_language(id, query))
                .collect::<ExecutorResult<Vec<Option<LanguageId>>>>()?;
            return Ok((selected.into_iter().flatten().collect(), scanned));
        }

        let mut selected = HashSet::new();
        for id in ids {
            if let Some(language_id) = self.evaluate_language(id, query)? {
                selected.insert(language_id);
            }
        }
        Ok((selected, scanned))
    }

    /// Evaluates one language, returning its numeric identifier when the
    /// query selects it.
    fn evaluate_language(
        &self,
        language_id: &str,
        query: &Query,
    ) -> ExecutorResult<Option<LanguageId>> {
        let inventory = self
            .store
            .inventory(language_id)
            .ok_or_else(|| ExecutorError::LanguageNotFound(language_id.to_string()))?;
        let counter = InventoryCounter::new(self.store);

        let diff = match query {
            Query::Comparison { first, second, .. } => {
                counter.count_features(inventory, first) - counter.count_features(inventory, second)
            }
            Query::Count {
                features, target, ..
            } => counter.count_features(inventory, features) - target,
            Query::Phoneme {
                phoneme, target, ..
            } => counter.count_phoneme(inventory, phoneme) - target,
        };

        if query.op().holds(diff) {
            Ok(Some(parse_language_id(language_id)?))
        } else {
            Ok(None)
        }
    }
}

/// Converts a language identifier from its table form (a decimal string)
/// to the numeric type used in result sets.
fn parse_language_id(raw: &str) -> ExecutorResult<LanguageId> {
    raw.parse()
        .map_err(|_| ExecutorError::NonNumericLanguageId(raw.to_string()))
}
