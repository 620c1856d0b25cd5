//! Normalizer trait and shared match-group type.
//!
//! A normalizer supplies a compiled [`Regex`] and a rewrite rule. The trait
//! provides [`Normalizer::extract`] and [`Normalizer::normalize`] on top of
//! those two methods, so a new normalizer only has to describe what it looks
//! for and how the match is rendered.
//!
//! # Implementing a Normalizer
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use listing_normalize::{MatchGroups, Normalizer};
//! use regex::Regex;
//!
//! static SKU_REGEX: LazyLock<Regex> =
//!     LazyLock::new(|| Regex::new(r"SKU-([0-9]+)").expect("Invalid SKU regex"));
//!
//! struct SkuNormalizer;
//!
//! impl Normalizer for SkuNormalizer {
//!     fn pattern(&self) -> &Regex {
//!         &SKU_REGEX
//!     }
//!
//!     fn rewrite(&self, groups: Option<&MatchGroups<'_>>) -> String {
//!         groups
//!             .and_then(|groups| groups.get(1))
//!             .map(str::to_string)
//!             .unwrap_or_default()
//!     }
//! }
//!
//! assert_eq!(SkuNormalizer.normalize("item SKU-0042"), "0042");
//! ```

use std::fmt;
use std::sync::Arc;

use regex::{Captures, Regex};

use crate::error::{NormalizeError, Result};

/// Groups captured by the leftmost match of a normalizer pattern.
///
/// Index 0 is the whole match and the capture groups follow in source
/// order. A group that did not participate in the match is `None`,
/// which is distinct from a group that matched the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroups<'t> {
    groups: Vec<Option<&'t str>>,
}

impl<'t> MatchGroups<'t> {
    /// Collects every group of a regex match.
    pub fn from_captures(captures: &Captures<'t>) -> Self {
        let groups = captures
            .iter()
            .map(|group| group.map(|m| m.as_str()))
            .collect();
        Self { groups }
    }

    /// The entire matched substring (group 0).
    pub fn whole(&self) -> &'t str {
        self.get(0).unwrap_or_default()
    }

    /// Returns group `index`, or `None` if it did not participate or does not exist.
    pub fn get(&self, index: usize) -> Option<&'t str> {
        self.groups.get(index).copied().flatten()
    }

    /// Returns true if group `index` participated in the match.
    pub fn is_present(&self, index: usize) -> bool {
        self.get(index).is_some()
    }
}

/// Extract-then-rewrite contract shared by all normalizers.
pub trait Normalizer {
    /// The pattern searched for in the input.
    fn pattern(&self) -> &Regex;

    /// Renders the canonical string for a match.
    ///
    /// `None` means the pattern did not match; implementations return an
    /// empty string in that case.
    fn rewrite(&self, groups: Option<&MatchGroups<'_>>) -> String;

    /// Finds the leftmost match of [`Normalizer::pattern`] in `input`.
    fn extract<'t>(&self, input: &'t str) -> Option<MatchGroups<'t>> {
        self.pattern()
            .captures(input)
            .map(|captures| MatchGroups::from_captures(&captures))
    }

    /// Extracts the first match from `input` and rewrites it.
    ///
    /// Never fails: input without a match yields an empty string.
    fn normalize(&self, input: &str) -> String {
        let groups = self.extract(input);
        self.rewrite(groups.as_ref())
    }
}

type RewriteFn = dyn Fn(&MatchGroups<'_>) -> String + Send + Sync;

/// Normalizer assembled from a pattern and a rewrite closure.
///
/// The closure only sees present matches; a missing match always renders as
/// an empty string.
#[derive(Clone)]
pub struct PatternNormalizer {
    pattern: Regex,
    rewrite: Arc<RewriteFn>,
}

impl PatternNormalizer {
    /// Compiles `pattern` and pairs it with `rewrite`.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InvalidPattern`] if `pattern` is not a valid
    /// regular expression.
    pub fn new<F>(pattern: &str, rewrite: F) -> Result<Self>
    where
        F: Fn(&MatchGroups<'_>) -> String + Send + Sync + 'static,
    {
        let compiled = Regex::new(pattern).map_err(|source| NormalizeError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: compiled,
            rewrite: Arc::new(rewrite),
        })
    }

    /// Normalizer that returns the whole match unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InvalidPattern`] if `pattern` is invalid.
    pub fn verbatim(pattern: &str) -> Result<Self> {
        Self::new(pattern, |groups| groups.whole().to_string())
    }
}

impl fmt::Debug for PatternNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternNormalizer")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

impl Normalizer for PatternNormalizer {
    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn rewrite(&self, groups: Option<&MatchGroups<'_>>) -> String {
        match groups {
            Some(groups) => (self.rewrite)(groups),
            None => String::new(),
        }
    }
}
