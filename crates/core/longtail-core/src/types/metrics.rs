//! Keyword metric types shared by the DataForSEO Labs endpoints

use crate::difficulty::DifficultyBand;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dominant search intent of a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchIntent {
    /// Looking for information
    Informational,
    /// Looking for a specific site
    Navigational,
    /// Researching before a purchase
    Commercial,
    /// Ready to act or buy
    Transactional,
}

impl SearchIntent {
    /// Vendor wire name of the intent
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchIntent::Informational => "informational",
            SearchIntent::Navigational => "navigational",
            SearchIntent::Commercial => "commercial",
            SearchIntent::Transactional => "transactional",
        }
    }
}

/// Search volume for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySearchVolume {
    /// Calendar year.
    pub year: i32,

    /// Calendar month, 1 to 12.
    pub month: u32,

    /// Search volume for that month, when the vendor has it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_volume: Option<u64>,
}

/// Relative search volume change in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVolumeTrend {
    /// Change against the previous month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly: Option<f64>,

    /// Change against the previous quarter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarterly: Option<f64>,

    /// Change against the previous year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly: Option<f64>,
}

/// Average backlink metrics of pages ranking for the keyword.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklinksProfile {
    /// Average number of backlinks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backlinks: Option<f64>,

    /// Average number of dofollow links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dofollow: Option<f64>,

    /// Average number of referring pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referring_pages: Option<f64>,

    /// Average number of referring domains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referring_domains: Option<f64>,

    /// Average page rank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<f64>,

    /// Average main domain rank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_domain_rank: Option<f64>,
}

/// Share of searches by gender, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderSplit {
    /// Male share.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub male: Option<f64>,

    /// Female share.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub female: Option<f64>,
}

/// Clickstream-derived audience demographics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    /// Gender distribution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<GenderSplit>,

    /// Search share per age bucket (for example `"25-34"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<BTreeMap<String, f64>>,
}

/// The full metric set for one keyword.
///
/// Both Labs endpoints (keyword suggestions, keyword overview) map into this
/// record; fields the vendor did not return stay `None`. Demographics only
/// appear on overview calls that request clickstream data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordProfile {
    /// The keyword itself.
    pub keyword: String,

    /// DataForSEO location code the metrics were computed for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_code: Option<u32>,

    /// Language code the metrics were computed for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    /// Average monthly search volume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_volume: Option<u64>,

    /// Paid competition in the 0.0 to 1.0 range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition: Option<f64>,

    /// Vendor competition bucket (LOW, MEDIUM, HIGH).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition_level: Option<String>,

    /// Average cost per click in USD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpc: Option<f64>,

    /// Low range of the top-of-page bid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_top_of_page_bid: Option<f64>,

    /// High range of the top-of-page bid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_top_of_page_bid: Option<f64>,

    /// Month-by-month search volume history.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monthly_searches: Vec<MonthlySearchVolume>,

    /// Relative volume trend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_volume_trend: Option<SearchVolumeTrend>,

    /// Dominant search intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_intent: Option<SearchIntent>,

    /// Keyword difficulty score, 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_difficulty: Option<u32>,

    /// Average backlink metrics of the ranking pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backlinks: Option<BacklinksProfile>,

    /// Clickstream audience demographics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demographics: Option<Demographics>,
}

impl KeywordProfile {
    /// Create an empty profile for a keyword
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            location_code: None,
            language_code: None,
            search_volume: None,
            competition: None,
            competition_level: None,
            cpc: None,
            low_top_of_page_bid: None,
            high_top_of_page_bid: None,
            monthly_searches: Vec::new(),
            search_volume_trend: None,
            main_intent: None,
            keyword_difficulty: None,
            backlinks: None,
            demographics: None,
        }
    }

    /// The difficulty band for this profile's difficulty score
    pub fn difficulty_band(&self) -> Option<DifficultyBand> {
        self.keyword_difficulty.map(DifficultyBand::from_score)
    }
}
