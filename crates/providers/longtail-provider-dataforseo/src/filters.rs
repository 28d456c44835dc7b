//! Keyword filter construction for the Labs endpoints
//!
//! DataForSEO filters are `[field, operator, value]` triples joined by
//! boolean connectives. `KeywordFilters` collects the bounds the keyword
//! tools expose and compiles them into that expression.

use longtail_core::types::SearchIntent;
use longtail_core::{LongtailError, Result};
use serde_json::{json, Value};

/// Filter set for keyword suggestion queries.
///
/// All bounds are optional; an empty set compiles to `None` so the request
/// carries no filter expression at all. Ranges where the minimum exceeds
/// the maximum fail compilation with a `Validation` error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordFilters {
    /// Lowest acceptable monthly search volume.
    pub min_search_volume: Option<u64>,

    /// Highest acceptable monthly search volume.
    pub max_search_volume: Option<u64>,

    /// Lowest acceptable cost per click.
    pub min_cpc: Option<f64>,

    /// Highest acceptable cost per click.
    pub max_cpc: Option<f64>,

    /// Lowest acceptable paid competition, 0.0 to 1.0.
    pub min_competition: Option<f64>,

    /// Highest acceptable paid competition, 0.0 to 1.0.
    pub max_competition: Option<f64>,

    /// Lowest acceptable keyword difficulty.
    pub min_difficulty: Option<u32>,

    /// Highest acceptable keyword difficulty.
    pub max_difficulty: Option<u32>,

    /// Substring every keyword must contain.
    pub include_keyword: Option<String>,

    /// Substring no keyword may contain.
    pub exclude_keyword: Option<String>,

    /// Acceptable dominant search intents.
    pub search_intents: Vec<SearchIntent>,
}

impl KeywordFilters {
    /// True when no bound is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check that every min/max pair forms a usable range
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_search_volume, self.max_search_volume) {
            if min > max {
                return Err(LongtailError::validation(
                    "Minimum search volume exceeds maximum",
                ));
            }
        }
        if let (Some(min), Some(max)) = (self.min_cpc, self.max_cpc) {
            if min > max {
                return Err(LongtailError::validation("Minimum CPC exceeds maximum"));
            }
        }
        if let (Some(min), Some(max)) = (self.min_competition, self.max_competition) {
            if min > max {
                return Err(LongtailError::validation(
                    "Minimum competition exceeds maximum",
                ));
            }
        }
        if let (Some(min), Some(max)) = (self.min_difficulty, self.max_difficulty) {
            if min > max {
                return Err(LongtailError::validation(
                    "Minimum keyword difficulty exceeds maximum",
                ));
            }
        }
        Ok(())
    }

    /// Compile the set into a DataForSEO filter expression.
    ///
    /// Clauses are emitted in declaration order and joined with `"and"`.
    /// Substring clauses use `like`/`not_like` with `%` wildcards; intents
    /// compile to a single `in` clause.
    pub fn to_filter_expression(&self) -> Result<Option<Value>> {
        self.validate()?;

        let mut clauses: Vec<Value> = Vec::new();

        if let Some(min) = self.min_search_volume {
            clauses.push(json!(["keyword_info.search_volume", ">=", min]));
        }
        if let Some(max) = self.max_search_volume {
            clauses.push(json!(["keyword_info.search_volume", "<=", max]));
        }
        if let Some(min) = self.min_cpc {
            clauses.push(json!(["keyword_info.cpc", ">=", min]));
        }
        if let Some(max) = self.max_cpc {
            clauses.push(json!(["keyword_info.cpc", "<=", max]));
        }
        if let Some(min) = self.min_competition {
            clauses.push(json!(["keyword_info.competition", ">=", min]));
        }
        if let Some(max) = self.max_competition {
            clauses.push(json!(["keyword_info.competition", "<=", max]));
        }
        if let Some(min) = self.min_difficulty {
            clauses.push(json!(["keyword_properties.keyword_difficulty", ">=", min]));
        }
        if let Some(max) = self.max_difficulty {
            clauses.push(json!(["keyword_properties.keyword_difficulty", "<=", max]));
        }
        if let Some(keyword) = &self.include_keyword {
            clauses.push(json!(["keyword", "like", format!("%{}%", keyword)]));
        }
        if let Some(keyword) = &self.exclude_keyword {
            clauses.push(json!(["keyword", "not_like", format!("%{}%", keyword)]));
        }
        if !self.search_intents.is_empty() {
            let intents: Vec<&str> = self.search_intents.iter().map(|i| i.as_str()).collect();
            clauses.push(json!(["search_intent_info.main_intent", "in", intents]));
        }

        if clauses.is_empty() {
            return Ok(None);
        }

        let mut expression: Vec<Value> = Vec::new();
        for (index, clause) in clauses.into_iter().enumerate() {
            if index > 0 {
                expression.push(json!("and"));
            }
            expression.push(clause);
        }

        Ok(Some(Value::Array(expression)))
    }
}
