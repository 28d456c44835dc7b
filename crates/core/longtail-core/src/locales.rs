//! Embedded location and language catalogs
//!
//! Snapshots of the DataForSEO location and language catalogs ship inside
//! the crate, in the vendor's response envelope shape. Only entries of type
//! `Country` are exposed; ISO codes are lowercased on load.

use crate::types::Seed;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const LOCATIONS_JSON: &str = include_str!("data/dataforseo_locations.json");
const LANGUAGES_JSON: &str = include_str!("data/dataforseo_languages.json");

/// Synthetic language code meaning "do not restrict by language"
pub const ANY_LANGUAGE_CODE: &str = "any";

/// Default location for new research sessions (India)
pub const DEFAULT_LOCATION_CODE: u32 = 2356;

/// Default language for new research sessions
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// A country selectable for keyword research.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// DataForSEO numeric location code.
    pub location_code: u32,

    /// Display name of the country.
    pub location_name: String,

    /// Lowercased ISO 3166-1 alpha-2 country code.
    pub country_iso_code: String,
}

impl Location {
    /// URL of the country's flag image
    pub fn flag_url(&self) -> String {
        format!("https://flagcdn.com/{}.svg", self.country_iso_code)
    }
}

/// A language selectable for keyword research.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Display name of the language.
    pub language_name: String,

    /// DataForSEO language code.
    pub language_code: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile<T> {
    tasks: Vec<CatalogTask<T>>,
}

#[derive(Debug, Deserialize)]
struct CatalogTask<T> {
    #[serde(default = "Vec::new")]
    result: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct LocationEntry {
    location_code: u32,
    location_name: String,
    location_type: String,
    country_iso_code: String,
}

fn parse_locations() -> Vec<Location> {
    let file: CatalogFile<LocationEntry> =
        serde_json::from_str(LOCATIONS_JSON).expect("embedded location catalog is valid JSON");

    file.tasks
        .into_iter()
        .flat_map(|task| task.result)
        .filter(|entry| entry.location_type == "Country")
        .map(|entry| Location {
            location_code: entry.location_code,
            location_name: entry.location_name,
            country_iso_code: entry.country_iso_code.to_lowercase(),
        })
        .collect()
}

fn parse_languages() -> Vec<Language> {
    let file: CatalogFile<Language> =
        serde_json::from_str(LANGUAGES_JSON).expect("embedded language catalog is valid JSON");

    file.tasks
        .into_iter()
        .flat_map(|task| task.result)
        .collect()
}

/// Countries selectable for keyword research
pub fn locations() -> &'static [Location] {
    static LOCATIONS: OnceLock<Vec<Location>> = OnceLock::new();
    LOCATIONS.get_or_init(parse_locations)
}

/// Languages selectable for keyword research
pub fn languages() -> &'static [Language] {
    static LANGUAGES: OnceLock<Vec<Language>> = OnceLock::new();
    LANGUAGES.get_or_init(parse_languages)
}

/// Languages with the synthetic "Any Language" entry prepended
pub fn languages_with_any() -> Vec<Language> {
    let mut all = Vec::with_capacity(languages().len() + 1);
    all.push(Language {
        language_name: "Any Language".to_string(),
        language_code: ANY_LANGUAGE_CODE.to_string(),
    });
    all.extend(languages().iter().cloned());
    all
}

/// Find a location by its DataForSEO code
pub fn location_from_code(location_code: u32) -> Option<&'static Location> {
    locations()
        .iter()
        .find(|location| location.location_code == location_code)
}

/// Find a language by its code
pub fn language_from_code(language_code: &str) -> Option<&'static Language> {
    languages()
        .iter()
        .find(|language| language.language_code == language_code)
}

/// Build an expansion seed for a DataForSEO location and language.
///
/// The provider-facing location is the country's ISO code; unknown location
/// codes fall back to the default location's country.
pub fn seed_for_location(
    keyword: impl Into<String>,
    location_code: u32,
    language_code: &str,
) -> Seed {
    let iso = location_from_code(location_code)
        .map(|location| location.country_iso_code.clone())
        .unwrap_or_else(|| "in".to_string());
    Seed::new(keyword, iso, language_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_are_countries_only() {
        let all = locations();
        assert!(!all.is_empty());

        // Region and city entries in the data file never surface
        assert!(location_from_code(21137).is_none());
        assert!(all.iter().all(|location| {
            location.country_iso_code.len() == 2
                && location.country_iso_code == location.country_iso_code.to_lowercase()
        }));
    }

    #[test]
    fn test_location_lookup_and_flag() {
        let india = location_from_code(DEFAULT_LOCATION_CODE).unwrap();
        assert_eq!(india.location_name, "India");
        assert_eq!(india.country_iso_code, "in");

        let us = location_from_code(2840).unwrap();
        assert_eq!(us.flag_url(), "https://flagcdn.com/us.svg");
    }

    #[test]
    fn test_languages_with_any() {
        let all = languages_with_any();
        assert_eq!(all[0].language_code, ANY_LANGUAGE_CODE);
        assert_eq!(all[0].language_name, "Any Language");
        assert_eq!(all.len(), languages().len() + 1);

        assert!(language_from_code("en").is_some());
        assert!(language_from_code(ANY_LANGUAGE_CODE).is_none());
    }

    #[test]
    fn test_seed_for_location() {
        let seed = seed_for_location("running shoes", 2840, "en");
        assert_eq!(seed.location_code, "us");
        assert_eq!(seed.language_code, "en");

        let fallback = seed_for_location("running shoes", 999999, "en");
        assert_eq!(fallback.location_code, "in");
    }
}
