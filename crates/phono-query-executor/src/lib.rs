//! # phono-query-executor
//!
//! Query execution engine for phonological inventory datasets.
//!
//! This crate bridges the [`phono-query`] model types and any dataset
//! implementing [`InventoryQueryable`] to evaluate feature-count,
//! count-difference, and phoneme-presence queries over a set of language
//! inventories.
//!
//! ## Key Features
//!
//! - **Store-agnostic** - any type implementing [`InventoryQueryable`]
//!   can be queried; the concrete JSON-backed store lives in its own crate
//! - **All-or-nothing evaluation** - data-integrity errors abort the whole
//!   pass; no partial result sets
//! - **Configurable caching** - optional LRU cache for repeated queries
//! - **Optional parallelism** - enable the `parallel` feature for
//!   multi-threaded evaluation with identical output
//!
//! ## Quick Start
//!
//! ```ignore
//! use phono_query::{parse_feature_tags, ComparisonOp, Query};
//! use phono_query_executor::QueryExecutor;
//!
//! // `store` implements InventoryQueryable (see phono-query-store).
//! let executor = QueryExecutor::new(&store);
//!
//! // Which languages have at least two nasal segments?
//! let nasals = parse_feature_tags(&["+nasal"]);
//! let result = executor.execute(&Query::count(nasals, ComparisonOp::GreaterOrEqual, 2))?;
//!
//! for language_id in result.iter() {
//!     println!("selected: {language_id}");
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  phono-query-executor                    │
//! │                                                          │
//! │  QueryExecutor                                           │
//! │  ├── consult result cache (optional)                     │
//! │  ├── per language: InventoryCounter → count / diff       │
//! │  ├── ComparisonOp::holds(diff) → select language         │
//! │  └── return QueryResult with stats                       │
//! │                                                          │
//! │  Dependencies:                                           │
//! │  ├── phono-query       - query model (tags, ops, AST)    │
//! │  └── InventoryQueryable - implemented by the dataset     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - parallel per-language evaluation using rayon
//! - `serde` - forwards the `serde` feature of `phono-query`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cache;
mod config;
mod counter;
mod error;
mod executor;
mod result;
#[cfg(test)]
mod testing;
mod traits;

// Public re-exports
pub use cache::{cache_key, QueryCache};
pub use config::{CacheConfig, ExecutorConfig, ExecutorConfigBuilder};
pub use counter::InventoryCounter;
pub use error::{ExecutorError, ExecutorResult};
pub use executor::QueryExecutor;
pub use result::{ExecutionStats, QueryResult};
pub use traits::InventoryQueryable;

// Re-export commonly used types from the model crate for convenience
pub use phono_query::{ComparisonOp, FeatureQuery, LanguageId, Query};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_accessible() {
        // Verify all public types are accessible
        let _: Option<CacheConfig> = None;
        let _: Option<ExecutorConfig> = None;
        let _: Option<QueryResult> = None;
        let _: Option<ExecutionStats> = None;
        let _: Option<ExecutorResult<()>> = None;
    }

    #[test]
    fn test_re_exports() {
        // Verify re-exports work
        let _id: LanguageId = 42;
        let _ = phono_query::parse_feature_tags(&["+voice"]);
    }
}
