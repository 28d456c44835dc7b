//! Wire types for the DataForSEO v3 API
//!
//! Every response arrives in the same two-level envelope; these types
//! deserialize it and map Labs keyword items onto the core
//! `KeywordProfile` record.

use longtail_core::types::{
    BacklinksProfile, Demographics, GenderSplit, KeywordProfile, MonthlySearchVolume, SearchIntent,
    SearchVolumeTrend,
};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Task status code the vendor uses for success
pub const TASK_STATUS_OK: u32 = 20000;

/// Top-level response envelope
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// API-level status code
    pub status_code: u32,

    /// API-level status message
    #[serde(default)]
    pub status_message: String,

    /// Tasks, one per entry in the submitted batch
    #[serde(default)]
    pub tasks: Vec<TaskEnvelope<T>>,
}

/// One task inside the envelope
#[derive(Debug, Deserialize)]
pub struct TaskEnvelope<T> {
    /// Task status code; anything other than `20000` is a vendor error
    pub status_code: u32,

    /// Human-readable task status
    #[serde(default)]
    pub status_message: String,

    /// Task payload; the vendor sends `null` on failed tasks
    #[serde(default)]
    pub result: Option<Vec<T>>,
}

impl<T> TaskEnvelope<T> {
    /// The task payload, empty when the vendor sent `null`
    pub fn into_result(self) -> Vec<T> {
        self.result.unwrap_or_default()
    }
}

/// Account snapshot from `/appendix/user_data`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserData {
    /// Account login
    #[serde(default)]
    pub login: String,

    /// Account timezone name
    #[serde(default)]
    pub timezone_name: Option<String>,

    /// Money counters
    #[serde(default)]
    pub money: Option<MoneyInfo>,
}

/// Balance block of the account snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct MoneyInfo {
    /// Current account balance in USD
    #[serde(default)]
    pub balance: Option<f64>,

    /// Total money spent over the account lifetime
    #[serde(default)]
    pub total: Option<f64>,
}

/// One result entry of a Labs keyword endpoint: the page envelope around
/// the actual keyword items.
#[derive(Debug, Default, Deserialize)]
pub struct KeywordListing {
    /// Seed keyword echoed back by the suggestions endpoint
    #[serde(default)]
    pub seed_keyword: Option<String>,

    /// Total matching keywords across all pages
    #[serde(default)]
    pub total_count: u64,

    /// Number of items in this page
    #[serde(default)]
    pub items_count: u64,

    /// Keyword items; `null` when nothing matched
    #[serde(default)]
    pub items: Option<Vec<KeywordItem>>,
}

/// One keyword entry as the Labs endpoints return it
#[derive(Debug, Deserialize)]
pub struct KeywordItem {
    /// The keyword
    pub keyword: String,

    /// Location the metrics were computed for
    #[serde(default)]
    pub location_code: Option<u32>,

    /// Language the metrics were computed for
    #[serde(default)]
    pub language_code: Option<String>,

    /// Volume, CPC and competition block
    #[serde(default)]
    pub keyword_info: Option<KeywordInfo>,

    /// Search intent block
    #[serde(default)]
    pub search_intent_info: Option<SearchIntentInfo>,

    /// Derived keyword properties
    #[serde(default)]
    pub keyword_properties: Option<KeywordProperties>,

    /// Average backlink metrics of the ranking pages
    #[serde(default)]
    pub avg_backlinks_info: Option<AvgBacklinksInfo>,

    /// Clickstream metrics; only present on overview calls that request them
    #[serde(default)]
    pub clickstream_keyword_info: Option<ClickstreamKeywordInfo>,
}

/// Core search metrics of a keyword
#[derive(Debug, Default, Deserialize)]
pub struct KeywordInfo {
    /// Average monthly search volume
    #[serde(default)]
    pub search_volume: Option<u64>,

    /// Paid competition, 0.0 to 1.0
    #[serde(default)]
    pub competition: Option<f64>,

    /// Vendor competition bucket (LOW, MEDIUM, HIGH)
    #[serde(default)]
    pub competition_level: Option<String>,

    /// Average cost per click in USD
    #[serde(default)]
    pub cpc: Option<f64>,

    /// Low range of the top-of-page bid
    #[serde(default)]
    pub low_top_of_page_bid: Option<f64>,

    /// High range of the top-of-page bid
    #[serde(default)]
    pub high_top_of_page_bid: Option<f64>,

    /// Month-by-month volume history
    #[serde(default)]
    pub monthly_searches: Option<Vec<WireMonthlySearch>>,

    /// Relative volume trend
    #[serde(default)]
    pub search_volume_trend: Option<WireVolumeTrend>,
}

/// One month of search volume history
#[derive(Debug, Deserialize)]
pub struct WireMonthlySearch {
    /// Calendar year
    pub year: i32,

    /// Calendar month, 1 to 12
    pub month: u32,

    /// Volume for that month
    #[serde(default)]
    pub search_volume: Option<u64>,
}

/// Relative search volume change in percent
#[derive(Debug, Default, Deserialize)]
pub struct WireVolumeTrend {
    /// Change against the previous month
    #[serde(default)]
    pub monthly: Option<f64>,

    /// Change against the previous quarter
    #[serde(default)]
    pub quarterly: Option<f64>,

    /// Change against the previous year
    #[serde(default)]
    pub yearly: Option<f64>,
}

/// Search intent block
#[derive(Debug, Default, Deserialize)]
pub struct SearchIntentInfo {
    /// Dominant intent as the vendor names it
    #[serde(default)]
    pub main_intent: Option<String>,

    /// Secondary intents
    #[serde(default)]
    pub foreign_intent: Option<Vec<String>>,
}

/// Derived keyword properties
#[derive(Debug, Default, Deserialize)]
pub struct KeywordProperties {
    /// Keyword difficulty score, 0 to 100
    #[serde(default)]
    pub keyword_difficulty: Option<u32>,
}

/// Average backlink metrics of pages ranking for the keyword
#[derive(Debug, Default, Deserialize)]
pub struct AvgBacklinksInfo {
    /// Average number of backlinks
    #[serde(default)]
    pub backlinks: Option<f64>,

    /// Average number of dofollow links
    #[serde(default)]
    pub dofollow: Option<f64>,

    /// Average number of referring pages
    #[serde(default)]
    pub referring_pages: Option<f64>,

    /// Average number of referring domains
    #[serde(default)]
    pub referring_domains: Option<f64>,

    /// Average page rank
    #[serde(default)]
    pub rank: Option<f64>,

    /// Average main domain rank
    #[serde(default)]
    pub main_domain_rank: Option<f64>,
}

/// Clickstream-derived metrics
#[derive(Debug, Default, Deserialize)]
pub struct ClickstreamKeywordInfo {
    /// Clickstream search volume
    #[serde(default)]
    pub search_volume: Option<u64>,

    /// Share of searches by gender
    #[serde(default)]
    pub gender_distribution: Option<WireGenderDistribution>,

    /// Share of searches per age bucket
    #[serde(default)]
    pub age_distribution: Option<BTreeMap<String, f64>>,
}

/// Gender distribution block
#[derive(Debug, Default, Deserialize)]
pub struct WireGenderDistribution {
    /// Male share in percent
    #[serde(default)]
    pub male: Option<f64>,

    /// Female share in percent
    #[serde(default)]
    pub female: Option<f64>,
}

fn parse_intent(raw: &str) -> Option<SearchIntent> {
    match raw {
        "informational" => Some(SearchIntent::Informational),
        "navigational" => Some(SearchIntent::Navigational),
        "commercial" => Some(SearchIntent::Commercial),
        "transactional" => Some(SearchIntent::Transactional),
        _ => None,
    }
}

impl From<KeywordItem> for KeywordProfile {
    fn from(item: KeywordItem) -> Self {
        let mut profile = KeywordProfile::new(item.keyword);
        profile.location_code = item.location_code;
        profile.language_code = item.language_code;

        if let Some(info) = item.keyword_info {
            profile.search_volume = info.search_volume;
            profile.competition = info.competition;
            profile.competition_level = info.competition_level;
            profile.cpc = info.cpc;
            profile.low_top_of_page_bid = info.low_top_of_page_bid;
            profile.high_top_of_page_bid = info.high_top_of_page_bid;
            profile.monthly_searches = info
                .monthly_searches
                .unwrap_or_default()
                .into_iter()
                .map(|month| MonthlySearchVolume {
                    year: month.year,
                    month: month.month,
                    search_volume: month.search_volume,
                })
                .collect();
            profile.search_volume_trend = info.search_volume_trend.map(|trend| SearchVolumeTrend {
                monthly: trend.monthly,
                quarterly: trend.quarterly,
                yearly: trend.yearly,
            });
        }

        // Intents outside the four the tools understand read as absent
        profile.main_intent = item
            .search_intent_info
            .and_then(|info| info.main_intent)
            .as_deref()
            .and_then(parse_intent);

        profile.keyword_difficulty = item
            .keyword_properties
            .and_then(|props| props.keyword_difficulty);

        if let Some(info) = item.avg_backlinks_info {
            profile.backlinks = Some(BacklinksProfile {
                backlinks: info.backlinks,
                dofollow: info.dofollow,
                referring_pages: info.referring_pages,
                referring_domains: info.referring_domains,
                rank: info.rank,
                main_domain_rank: info.main_domain_rank,
            });
        }

        if let Some(info) = item.clickstream_keyword_info {
            let gender = info.gender_distribution.map(|split| GenderSplit {
                male: split.male,
                female: split.female,
            });
            if gender.is_some() || info.age_distribution.is_some() {
                profile.demographics = Some(Demographics {
                    gender,
                    age: info.age_distribution,
                });
            }
        }

        profile
    }
}
