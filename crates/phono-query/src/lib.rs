//! # phono-query
//!
//! Query model for distinctive-feature searches over phonological
//! inventories (PHOIBLE-style datasets).
//!
//! This crate provides:
//! - **Feature-tag parsing**: Split signed tags (`+voice`, `-nasal`) into
//!   required-present and required-absent feature sets
//! - **Segment predicate**: Test one segment's feature bundle against a
//!   [`FeatureQuery`]
//! - **Comparison operators**: The relational operators applied to count
//!   differences
//! - **Query AST**: The three query shapes evaluated by
//!   `phono-query-executor`
//!
//! ## Usage
//!
//! ```rust
//! use phono_query::{parse_feature_tags, ComparisonOp, Query};
//!
//! // "+"-prefixed tags are required-present; everything else is
//! // required-absent.
//! let voiced = parse_feature_tags(&["+voice"]);
//! let nasals = parse_feature_tags(&["+nasal"]);
//!
//! // "In which languages do voiced segments outnumber nasals?"
//! let query = Query::comparison(voiced, nasals, ComparisonOp::Greater);
//! assert_eq!(query.op(), ComparisonOp::Greater);
//! ```
//!
//! ## Tag syntax quick reference
//!
//! | Tag | Meaning |
//! |-----|---------|
//! | `+voice` | segment must carry `voice` |
//! | `-voice` | segment must not carry `voice` |
//! | `voice` | no `+` prefix, so treated as required-absent |
//! | `+` / `-` | no content after sign trimming, silently dropped |
//!
//! ## Operator quick reference
//!
//! | Symbol | Holds when |
//! |--------|------------|
//! | `=` | diff = 0 |
//! | `<` | diff < 0 |
//! | `<=` | diff <= 0 |
//! | `>` | diff > 0 |
//! | `>=` | diff >= 0 |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod parser;
mod query;

pub use error::{ParseResult, QueryError};
pub use parser::parse_feature_tags;
pub use query::{ComparisonOp, FeatureQuery, Query};

/// Language identifier type.
///
/// Language identifiers are stored as decimal strings in the backing
/// tables; evaluation converts them to this numeric type at the boundary.
pub type LanguageId = u32;
