//! Longtail Core
//!
//! This crate provides the engine, types, and interfaces of the Longtail
//! keyword research toolsuite. It includes:
//!
//! - The autocomplete expansion engine with its built-in modifier catalog
//! - The suggestion provider and key-value storage trait seams
//! - Keyword metric types shared by the DataForSEO Labs endpoints
//! - Persisted settings, location/language catalogs and difficulty bands
//! - Event streaming for incremental consumption of a running expansion
//!
//! # Example: Expanding a seed keyword
//!
//! ```no_run
//! use longtail_core::testing::StaticSuggestionProvider;
//! use longtail_core::{ExpansionEngine, Seed};
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = StaticSuggestionProvider::new()
//!         .with_response("shoes", &["shoes sale", "shoes online"]);
//!     let engine = ExpansionEngine::new();
//!
//!     let report = engine
//!         .expand_collected(&provider, &Seed::new("shoes", "us", "en"))
//!         .await;
//!     println!("found {} suggestions", report.summary.suggestions_found);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export commonly used types
pub use uuid::Uuid;

// Core modules
pub mod config;
pub mod difficulty;
pub mod error;
pub mod expansion;
pub mod locales;
pub mod logging;
pub mod modifiers;
pub mod provider;
pub mod settings;
pub mod storage;
pub mod streaming;
pub mod testing;
pub mod types;

// Re-export main types
pub use config::{get_env_bool, get_env_or, get_required_env, load_env, load_env_from_path};
pub use difficulty::DifficultyBand;
pub use error::{LongtailError, Result};
pub use expansion::{CancellationFlag, ExpansionEngine};
pub use locales::{Language, Location};
pub use logging::init_logging;
pub use modifiers::default_catalog;
pub use provider::SuggestionProvider;
pub use settings::Settings;
pub use storage::KeyValueStore;
pub use streaming::{
    collect_events, create_event_stream, CollectedEvents, EventSink, EventStream, ExpansionEvent,
};
pub use types::{
    BacklinksProfile, Demographics, ExpansionReport, ExpansionState, ExpansionSummary, GenderSplit,
    KeywordProfile, Modifier, MonthlySearchVolume, SearchIntent, SearchVolumeTrend, Seed,
    SuggestionRecord, VariantWarning,
};
