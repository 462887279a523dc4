//! Configuration types for the query executor.

use std::time::Duration;

/// Configuration for the query executor.
///
/// # Example
///
/// ```rust
/// use phono_query_executor::{CacheConfig, ExecutorConfig};
///
/// let config = ExecutorConfig::builder()
///     .with_cache(CacheConfig::default())
///     .with_parallel(true)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExecutorConfig {
    /// Cache configuration (None = caching disabled).
    pub cache: Option<CacheConfig>,
    /// Enable parallel evaluation (requires the `parallel` feature).
    ///
    /// Per-language evaluation shares no mutable state, so the parallel
    /// path produces the same unordered result set as the sequential one.
    pub parallel: bool,
}

impl ExecutorConfig {
    /// Creates a new builder for ExecutorConfig.
    pub fn builder() -> ExecutorConfigBuilder {
        ExecutorConfigBuilder::default()
    }
}

/// Builder for ExecutorConfig.
#[derive(Debug, Clone, Default)]
pub struct ExecutorConfigBuilder {
    cache: Option<CacheConfig>,
    parallel: bool,
}

impl ExecutorConfigBuilder {
    /// Enables caching with the given configuration.
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the ExecutorConfig.
    pub fn build(self) -> ExecutorConfig {
        ExecutorConfig {
            cache: self.cache,
            parallel: self.parallel,
        }
    }
}

/// Configuration for the query-result cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached query results.
    pub max_entries: usize,
    /// Time-to-live for cached entries.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1_024,
            ttl: Duration::from_secs(300),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executor_config_default() {
        let config = ExecutorConfig::default();
        assert!(config.cache.is_none());
        assert!(!config.parallel);
    }

    #[test]
    fn test_executor_config_builder() {
        let config = ExecutorConfig::builder()
            .with_cache(CacheConfig::default())
            .with_parallel(true)
            .build();

        assert!(config.cache.is_some());
        assert!(config.parallel);
    }

    #[test]
    fn test_cache_config_default() {
        let cache = CacheConfig::default();
        assert_eq!(cache.max_entries, 1_024);
        assert_eq!(cache.ttl, Duration::from_secs(300));
    }
}
