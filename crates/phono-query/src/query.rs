//! Query AST types: feature queries, comparison operators, and the three
//! query shapes.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseResult, QueryError};
use crate::parser::parse_feature_tags;

/// Relational operator applied to an integer count difference.
///
/// The operator always compares the difference against zero:
/// `count_a - count_b` for comparison queries, `count - target` for count
/// and phoneme queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonOp {
    /// Exact match: `=`
    Equal,
    /// Strictly below: `<`
    Less,
    /// At most: `<=`
    LessOrEqual,
    /// Strictly above: `>`
    Greater,
    /// At least: `>=`
    GreaterOrEqual,
}

impl ComparisonOp {
    /// Parses an operator symbol.
    ///
    /// Only the five recognised symbols are accepted; anything else is a
    /// configuration error and must abort the whole run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use phono_query::ComparisonOp;
    ///
    /// assert_eq!(ComparisonOp::parse(">=").unwrap(), ComparisonOp::GreaterOrEqual);
    /// assert!(ComparisonOp::parse("!=").is_err());
    /// ```
    pub fn parse(symbol: &str) -> ParseResult<Self> {
        match symbol {
            "=" => Ok(ComparisonOp::Equal),
            "<" => Ok(ComparisonOp::Less),
            "<=" => Ok(ComparisonOp::LessOrEqual),
            ">" => Ok(ComparisonOp::Greater),
            ">=" => Ok(ComparisonOp::GreaterOrEqual),
            other => Err(QueryError::UnknownOperator(other.to_string())),
        }
    }

    /// Checks whether the operator holds for the given difference.
    pub fn holds(self, diff: i64) -> bool {
        match self {
            ComparisonOp::Equal => diff == 0,
            ComparisonOp::Less => diff < 0,
            ComparisonOp::LessOrEqual => diff <= 0,
            ComparisonOp::Greater => diff > 0,
            ComparisonOp::GreaterOrEqual => diff >= 0,
        }
    }

    /// Returns the operator's symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Equal => "=",
            ComparisonOp::Less => "<",
            ComparisonOp::LessOrEqual => "<=",
            ComparisonOp::Greater => ">",
            ComparisonOp::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ComparisonOp {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComparisonOp::parse(s)
    }
}

/// A feature query: the set of features a segment must carry and the set
/// it must not carry.
///
/// Built from signed tags via [`parse_feature_tags`] or directly from two
/// sets. The two sets need not be disjoint; a query requiring a feature
/// both present and absent simply matches no segment carrying it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureQuery {
    /// Features that must all be present.
    positive: HashSet<String>,
    /// Features that must all be absent.
    negative: HashSet<String>,
}

impl FeatureQuery {
    /// Creates a feature query from explicit positive and negative sets.
    pub fn new(positive: HashSet<String>, negative: HashSet<String>) -> Self {
        Self { positive, negative }
    }

    /// Creates the empty feature query, which matches every segment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a feature query from raw signed tags.
    ///
    /// Equivalent to [`parse_feature_tags`].
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        parse_feature_tags(tags)
    }

    /// The required-present feature set.
    pub fn positive(&self) -> &HashSet<String> {
        &self.positive
    }

    /// The required-absent feature set.
    pub fn negative(&self) -> &HashSet<String> {
        &self.negative
    }

    /// Returns true if both sets are empty.
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Tests a segment's realised feature set against this query.
    ///
    /// A segment matches iff every positive feature is present and no
    /// negative feature is present. Short-circuits on the first
    /// violation.
    pub fn matches(&self, features: &HashSet<String>) -> bool {
        self.positive.iter().all(|f| features.contains(f))
            && self.negative.iter().all(|f| !features.contains(f))
    }

    /// Tests a segment that has no entry in the parse table.
    ///
    /// Such a segment has an empty feature set: it trivially satisfies
    /// every negative constraint and fails every positive one, so it
    /// matches only queries with an empty positive set.
    pub fn matches_unparsed(&self) -> bool {
        self.positive.is_empty()
    }
}

impl fmt::Display for FeatureQuery {
    /// Canonical rendering: signed feature names in sorted order, or `*`
    /// for the empty query. Used as a cache-key component, so the output
    /// is deterministic regardless of set iteration order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("*");
        }
        let mut tags: Vec<String> = self
            .positive
            .iter()
            .map(|name| format!("+{name}"))
            .chain(self.negative.iter().map(|name| format!("-{name}")))
            .collect();
        tags.sort_unstable();
        f.write_str(&tags.join(" "))
    }
}

/// A complete inventory query.
///
/// All three shapes share the same selection skeleton: compute a count or
/// count difference per language, compare it to zero with the operator,
/// and collect the language identifier when the comparison holds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Query {
    /// Compares two independently computed feature counts:
    /// `count(first) - count(second) OP 0`.
    Comparison {
        /// Feature query producing the first count.
        first: FeatureQuery,
        /// Feature query producing the second count.
        second: FeatureQuery,
        /// Relational operator applied to the difference.
        op: ComparisonOp,
    },
    /// Compares one feature count against a fixed target:
    /// `count(features) - target OP 0`.
    Count {
        /// Feature query producing the count.
        features: FeatureQuery,
        /// Relational operator applied to the difference.
        op: ComparisonOp,
        /// Fixed target count.
        target: i64,
    },
    /// Compares phoneme presence (0 or 1) against a fixed target:
    /// `present - target OP 0`.
    Phoneme {
        /// The phoneme to look for in each inventory.
        phoneme: String,
        /// Relational operator applied to the difference.
        op: ComparisonOp,
        /// Fixed target (usually 0 or 1).
        target: i64,
    },
}

impl Query {
    /// Creates a difference-comparison query over two feature queries.
    pub fn comparison(first: FeatureQuery, second: FeatureQuery, op: ComparisonOp) -> Self {
        Query::Comparison { first, second, op }
    }

    /// Creates a count query against a fixed target.
    pub fn count(features: FeatureQuery, op: ComparisonOp, target: i64) -> Self {
        Query::Count {
            features,
            op,
            target,
        }
    }

    /// Creates a phoneme-presence query against a fixed target.
    pub fn phoneme(phoneme: impl Into<String>, op: ComparisonOp, target: i64) -> Self {
        Query::Phoneme {
            phoneme: phoneme.into(),
            op,
            target,
        }
    }

    /// The comparison operator of this query.
    pub fn op(&self) -> ComparisonOp {
        match self {
            Query::Comparison { op, .. } | Query::Count { op, .. } | Query::Phoneme { op, .. } => {
                *op
            }
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Comparison { first, second, op } => {
                write!(f, "count({first}) {op} count({second})")
            }
            Query::Count {
                features,
                op,
                target,
            } => write!(f, "count({features}) {op} {target}"),
            Query::Phoneme {
                phoneme,
                op,
                target,
            } => write!(f, "has({phoneme}) {op} {target}"),
        }
    }
}
