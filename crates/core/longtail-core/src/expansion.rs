//! The autocomplete expansion engine

use crate::modifiers;
use crate::provider::SuggestionProvider;
use crate::streaming::{collect_events, create_event_stream, EventSink};
use crate::types::{
    ExpansionReport, ExpansionState, ExpansionSummary, Modifier, Seed, SuggestionRecord,
    VariantWarning,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Cooperative cancellation handle for a running expansion.
///
/// Clones share one flag. The engine checks the flag between variants only,
/// never mid-call, so cancellation lets the provider call in flight finish.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancellationFlag {
    /// Create a fresh, uncancelled flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Sequential autocomplete expansion over a modifier catalog.
///
/// One `expand` call runs the whole catalog for one seed. Each modifier
/// produces a variant query, the provider answers it, novel suggestions
/// become numbered records, and a progress snapshot follows every variant.
/// A failing variant degrades to a warning; the run never aborts because of
/// its provider.
///
/// Suggestions deduplicate case-sensitively against everything already
/// emitted in the same run. Ids start at 1 and count up with no gaps. All
/// per-run state lives on the stack of the call, so one engine value can
/// serve any number of sequential runs without leakage between them.
pub struct ExpansionEngine {
    modifiers: Vec<Modifier>,
}

impl Default for ExpansionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpansionEngine {
    /// Engine over the built-in 91-entry catalog
    pub fn new() -> Self {
        Self {
            modifiers: modifiers::default_catalog(),
        }
    }

    /// Engine over a custom catalog.
    ///
    /// An empty catalog degenerates to the single empty modifier, so a run
    /// still queries the bare seed exactly once.
    pub fn with_modifiers(modifiers: Vec<Modifier>) -> Self {
        let modifiers = if modifiers.is_empty() {
            vec![Modifier::default()]
        } else {
            modifiers
        };
        Self { modifiers }
    }

    /// Number of modifiers one run will process
    pub fn modifier_count(&self) -> usize {
        self.modifiers.len()
    }

    /// Run a full expansion, emitting events into `events`
    pub async fn expand(
        &self,
        provider: &dyn SuggestionProvider,
        seed: &Seed,
        events: &EventSink,
    ) -> ExpansionSummary {
        self.run(provider, seed, events, None).await
    }

    /// Run a full expansion honoring a cancellation flag.
    ///
    /// On cancellation the run stops at the next variant boundary and emits
    /// one last progress snapshot with `is_running == false` as the terminal
    /// marker; its summary is flagged `cancelled`.
    pub async fn expand_cancellable(
        &self,
        provider: &dyn SuggestionProvider,
        seed: &Seed,
        events: &EventSink,
        cancel: &CancellationFlag,
    ) -> ExpansionSummary {
        self.run(provider, seed, events, Some(cancel)).await
    }

    /// Run a full expansion and collect everything it emitted
    pub async fn expand_collected(
        &self,
        provider: &dyn SuggestionProvider,
        seed: &Seed,
    ) -> ExpansionReport {
        let (sender, stream) = create_event_stream(64);
        let sink = EventSink::new(sender);

        let run = async {
            let summary = self.expand(provider, seed, &sink).await;
            // Close the channel so the collector can finish
            drop(sink);
            summary
        };
        let (summary, collected) = tokio::join!(run, collect_events(stream));

        ExpansionReport {
            summary,
            suggestions: collected.suggestions,
            warnings: collected.warnings,
        }
    }

    async fn run(
        &self,
        provider: &dyn SuggestionProvider,
        seed: &Seed,
        events: &EventSink,
        cancel: Option<&CancellationFlag>,
    ) -> ExpansionSummary {
        let run_id = Uuid::new_v4();
        let started_at = chrono::Utc::now();
        let started = Instant::now();

        let mut state = ExpansionState::new(self.modifiers.len());
        let mut seen: HashSet<String> = HashSet::new();
        let mut next_id: u64 = 1;
        let mut warnings: usize = 0;
        let mut cancelled = false;

        tracing::info!(
            run_id = %run_id,
            keyword = %seed.keyword,
            provider = provider.name(),
            total_modifiers = state.total_modifiers,
            "Starting autocomplete expansion"
        );

        for modifier in &self.modifiers {
            if let Some(flag) = cancel {
                if flag.is_cancelled() {
                    cancelled = true;
                    state.is_running = false;
                    events.progress(state.clone()).await;
                    tracing::info!(
                        run_id = %run_id,
                        completed = state.modifiers_completed,
                        "Expansion cancelled"
                    );
                    break;
                }
            }

            let variant = modifier.apply(&seed.keyword);

            match provider
                .suggest(&variant, &seed.location_code, &seed.language_code)
                .await
            {
                Ok(suggestions) => {
                    for suggestion in suggestions {
                        // First occurrence wins; repeats across variants are dropped
                        if !seen.insert(suggestion.clone()) {
                            continue;
                        }
                        let record = SuggestionRecord::new(next_id, suggestion, modifier);
                        next_id += 1;
                        state.suggestions_found += 1;
                        events.suggestion(record).await;
                    }
                }
                Err(e) => {
                    warnings += 1;
                    tracing::warn!(
                        run_id = %run_id,
                        variant = %variant,
                        error = %e,
                        "Failed to get suggestions for variant"
                    );
                    events
                        .warning(VariantWarning::new(variant, e.to_string()))
                        .await;
                }
            }

            state.modifiers_completed += 1;
            state.is_running = state.modifiers_completed < state.total_modifiers;
            events.progress(state.clone()).await;
        }

        let summary = ExpansionSummary {
            run_id,
            keyword: seed.keyword.clone(),
            started_at,
            elapsed_ms: started.elapsed().as_millis() as u64,
            modifiers_completed: state.modifiers_completed,
            total_modifiers: state.total_modifiers,
            suggestions_found: state.suggestions_found,
            warnings,
            cancelled,
        };

        tracing::info!(
            run_id = %run_id,
            suggestions = summary.suggestions_found,
            warnings = summary.warnings,
            elapsed_ms = summary.elapsed_ms,
            cancelled = summary.cancelled,
            "Expansion complete"
        );

        summary
    }
}
