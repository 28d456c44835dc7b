//! Integration tests for full expansion runs

use longtail_core::testing::{create_test_seed, FailingSuggestionProvider, StaticSuggestionProvider};
use longtail_core::*;

/// Drive a run and capture the raw event sequence alongside the summary.
async fn run_and_capture(
    engine: &ExpansionEngine,
    provider: &dyn SuggestionProvider,
    seed: &Seed,
) -> (ExpansionSummary, Vec<ExpansionEvent>) {
    let (sender, stream) = create_event_stream(16);
    let sink = EventSink::new(sender);

    let run = async {
        let summary = engine.expand(provider, seed, &sink).await;
        drop(sink);
        summary
    };
    let drain = async {
        let mut stream = stream;
        let mut events = Vec::new();
        while let Some(event) = stream.recv().await {
            events.push(event);
        }
        events
    };

    tokio::join!(run, drain)
}

#[tokio::test]
async fn test_two_modifier_run_emits_expected_records() {
    let provider = StaticSuggestionProvider::new()
        .with_response("shoes", &["shoes sale", "shoes online"])
        .with_response("best shoes", &["best shoes 2024", "shoes online"]);

    let engine = ExpansionEngine::with_modifiers(vec![
        Modifier::default(),
        Modifier::with_prefix("best"),
    ]);

    let report = engine
        .expand_collected(&provider, &create_test_seed("shoes"))
        .await;

    // "shoes online" repeats under the second variant and stays dropped
    assert_eq!(report.suggestions.len(), 3);

    assert_eq!(report.suggestions[0].id, 1);
    assert_eq!(report.suggestions[0].keyword, "shoes sale");
    assert_eq!(report.suggestions[0].word_count, 2);
    assert!(report.suggestions[0].prefix.is_none());
    assert!(report.suggestions[0].suffix.is_none());

    assert_eq!(report.suggestions[1].id, 2);
    assert_eq!(report.suggestions[1].keyword, "shoes online");

    assert_eq!(report.suggestions[2].id, 3);
    assert_eq!(report.suggestions[2].keyword, "best shoes 2024");
    assert_eq!(report.suggestions[2].word_count, 3);
    assert_eq!(report.suggestions[2].prefix.as_deref(), Some("best"));

    assert!(report.warnings.is_empty());
    let final_state = report.summary.final_state();
    assert_eq!(final_state.modifiers_completed, 2);
    assert_eq!(final_state.total_modifiers, 2);
    assert_eq!(final_state.suggestions_found, 3);
    assert!(!final_state.is_running);
}

#[tokio::test]
async fn test_failing_variant_degrades_to_warning() {
    let provider = FailingSuggestionProvider::new("socket hang up");
    let engine = ExpansionEngine::with_modifiers(vec![Modifier::with_suffix("vs")]);

    let (summary, events) = run_and_capture(&engine, &provider, &create_test_seed("cars")).await;

    assert_eq!(summary.suggestions_found, 0);
    assert_eq!(summary.warnings, 1);
    assert_eq!(summary.modifiers_completed, 1);
    assert!(!summary.cancelled);

    let warnings: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            ExpansionEvent::Warning(warning) => Some(warning),
            _ => None,
        })
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].variant, "cars vs");
    assert!(warnings[0].message.contains("socket hang up"));

    let progress: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            ExpansionEvent::Progress(state) => Some(state),
            _ => None,
        })
        .collect();
    assert_eq!(progress.len(), 1, "one progress update per modifier");
    assert!(!progress[0].is_running);
}

#[tokio::test]
async fn test_total_outage_warns_once_per_modifier() {
    let provider = FailingSuggestionProvider::default();
    let engine = ExpansionEngine::new();

    let report = engine
        .expand_collected(&provider, &create_test_seed("cars"))
        .await;

    assert_eq!(report.summary.suggestions_found, 0);
    assert_eq!(report.summary.warnings, 91);
    assert_eq!(report.summary.modifiers_completed, 91);
    assert_eq!(report.warnings.len(), 91);

    // The bare seed goes first
    assert_eq!(report.warnings[0].variant, "cars");
    assert!(report.suggestions.is_empty());
}

#[tokio::test]
async fn test_progress_updates_track_the_catalog() {
    let provider = StaticSuggestionProvider::new();
    let engine = ExpansionEngine::new();

    let (summary, events) = run_and_capture(&engine, &provider, &create_test_seed("shoes")).await;
    assert_eq!(summary.total_modifiers, 91);

    let mut suggestions_seen = 0;
    let mut progress_seen = 0;
    for event in &events {
        match event {
            ExpansionEvent::Suggestion(_) => suggestions_seen += 1,
            ExpansionEvent::Progress(state) => {
                progress_seen += 1;
                assert_eq!(state.modifiers_completed, progress_seen);
                assert_eq!(state.total_modifiers, 91);
                // Progress reflects every suggestion emitted before it
                assert_eq!(state.suggestions_found, suggestions_seen);
                assert_eq!(state.is_running, progress_seen < 91);
            }
            ExpansionEvent::Warning(_) => {}
        }
    }

    assert_eq!(progress_seen, 91, "one progress update per modifier");
}

#[tokio::test]
async fn test_sequential_runs_share_no_state() {
    let provider = StaticSuggestionProvider::new()
        .with_response("shoes", &["shoes sale"])
        .with_response("a shoes", &["a shoes store"]);

    let engine = ExpansionEngine::with_modifiers(vec![
        Modifier::default(),
        Modifier::with_prefix("a"),
    ]);
    let seed = create_test_seed("shoes");

    let first = engine.expand_collected(&provider, &seed).await;
    let second = engine.expand_collected(&provider, &seed).await;

    // Ids restart and nothing is treated as already seen
    assert_eq!(first.suggestions.len(), 2);
    assert_eq!(second.suggestions.len(), 2);
    assert_eq!(second.suggestions[0].id, 1);
    assert_eq!(first.suggestions, second.suggestions);
    assert_ne!(first.summary.run_id, second.summary.run_id);
}

#[tokio::test]
async fn test_dedup_is_case_sensitive_and_exact() {
    let provider = StaticSuggestionProvider::new()
        .with_response("shoes", &["Shoes sale", "shoes sale", "shoes sale"]);

    let engine = ExpansionEngine::with_modifiers(vec![Modifier::default()]);
    let report = engine
        .expand_collected(&provider, &create_test_seed("shoes"))
        .await;

    // Case difference survives, the exact repeat does not
    assert_eq!(report.suggestions.len(), 2);
    assert_eq!(report.suggestions[0].keyword, "Shoes sale");
    assert_eq!(report.suggestions[1].keyword, "shoes sale");
}

#[tokio::test]
async fn test_superseded_consumer_does_not_abort_run() {
    let provider = StaticSuggestionProvider::new().with_response("shoes", &["shoes sale"]);
    let engine = ExpansionEngine::with_modifiers(vec![
        Modifier::default(),
        Modifier::with_prefix("a"),
    ]);

    let (sender, stream) = create_event_stream(16);
    drop(stream);
    let sink = EventSink::new(sender);

    let summary = engine
        .expand(&provider, &create_test_seed("shoes"), &sink)
        .await;

    // The run completed even though nobody was listening
    assert_eq!(summary.modifiers_completed, 2);
    assert_eq!(summary.suggestions_found, 1);
}
