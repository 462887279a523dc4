//! Signed feature-tag parsing.
//!
//! A raw query arrives as an ordered list of signed tags such as
//! `["+voice", "-nasal"]`. This module classifies each tag into the
//! required-present or required-absent set of a [`FeatureQuery`].

use std::collections::HashSet;

use crate::query::FeatureQuery;

/// Parses a list of signed feature tags into a [`FeatureQuery`].
///
/// Classification is a two-branch rule:
/// - a tag with a leading `+` contributes to the *positive*
///   (required-present) set;
/// - any other tag, whether `-`-prefixed or unprefixed, contributes to
///   the *negative* (required-absent) set.
///
/// All leading and trailing `+`/`-` characters are trimmed from the
/// contributed feature name. A tag that is empty after trimming carries
/// no usable content and is silently dropped. Duplicate tags are
/// harmless because membership tests are set-based.
///
/// # Examples
///
/// ```rust
/// use phono_query::parse_feature_tags;
///
/// let query = parse_feature_tags(&["+voice", "-nasal", "lateral"]);
/// assert!(query.positive().contains("voice"));
/// assert!(query.negative().contains("nasal"));
/// // Unprefixed tags count as negative.
/// assert!(query.negative().contains("lateral"));
/// ```
pub fn parse_feature_tags<S: AsRef<str>>(tags: &[S]) -> FeatureQuery {
    let mut positive = HashSet::new();
    let mut negative = HashSet::new();
    for tag in tags {
        let tag = tag.as_ref();
        let name = tag.trim_matches(|c| c == '+' || c == '-');
        if name.is_empty() {
            // No usable content after sign trimming.
            continue;
        }
        if tag.starts_with('+') {
            positive.insert(name.to_string());
        } else {
            negative.insert(name.to_string());
        }
    }
    FeatureQuery::new(positive, negative)
}
