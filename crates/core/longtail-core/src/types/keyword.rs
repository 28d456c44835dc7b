//! Seed, modifier and suggestion record types

use serde::{Deserialize, Serialize};

/// The immutable input of one expansion run.
///
/// A seed is caller-validated: the engine queries the keyword exactly as
/// given and never trims, lowercases or otherwise rewrites it. Location and
/// language are passed through to the suggestion provider untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    /// Seed keyword, queried as given.
    pub keyword: String,

    /// Locality code forwarded to the provider (country code for Google suggest).
    pub location_code: String,

    /// Language code forwarded to the provider.
    pub language_code: String,
}

impl Seed {
    /// Create a new seed
    pub fn new(
        keyword: impl Into<String>,
        location_code: impl Into<String>,
        language_code: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            location_code: location_code.into(),
            language_code: language_code.into(),
        }
    }
}

/// One entry of the modifier catalog.
///
/// A modifier contributes an optional prefix word and an optional suffix
/// word. The default value (neither set) leaves the seed unchanged, which is
/// how the bare seed itself gets queried as the first catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    /// Word placed before the seed, separated by a single space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Word placed after the seed, separated by a single space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl Modifier {
    /// Create a prefix-only modifier
    pub fn with_prefix(word: impl Into<String>) -> Self {
        Self {
            prefix: Some(word.into()),
            suffix: None,
        }
    }

    /// Create a suffix-only modifier
    pub fn with_suffix(word: impl Into<String>) -> Self {
        Self {
            prefix: None,
            suffix: Some(word.into()),
        }
    }

    /// Build the variant query for a seed keyword.
    ///
    /// Prefix and suffix each join with one space; when both are present the
    /// result is `prefix seed suffix`.
    pub fn apply(&self, keyword: &str) -> String {
        let mut variant = keyword.to_string();
        if let Some(prefix) = &self.prefix {
            variant = format!("{} {}", prefix, variant);
        }
        if let Some(suffix) = &self.suffix {
            variant = format!("{} {}", variant, suffix);
        }
        variant
    }

    /// True when the modifier leaves the seed unchanged
    pub fn is_noop(&self) -> bool {
        self.prefix.is_none() && self.suffix.is_none()
    }
}

/// One deduplicated suggestion surfaced by an expansion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRecord {
    /// Monotonic 1-based row id, unique within the run.
    pub id: u64,

    /// The suggested keyword, exactly as the provider returned it.
    pub keyword: String,

    /// Number of whitespace-delimited tokens in `keyword`.
    pub word_count: usize,

    /// Prefix of the modifier whose variant surfaced this suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Suffix of the modifier whose variant surfaced this suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl SuggestionRecord {
    /// Create a record for a suggestion surfaced under the given modifier
    pub fn new(id: u64, keyword: impl Into<String>, modifier: &Modifier) -> Self {
        let keyword = keyword.into();
        let word_count = keyword.split_whitespace().count();
        Self {
            id,
            keyword,
            word_count,
            prefix: modifier.prefix.clone(),
            suffix: modifier.suffix.clone(),
        }
    }
}
