//! Expansion event streaming support

use crate::types::{ExpansionState, Modifier, SuggestionRecord, VariantWarning};
use tokio::sync::mpsc;

/// One observable moment of an expansion run
#[derive(Debug, Clone)]
pub enum ExpansionEvent {
    /// A new deduplicated suggestion
    Suggestion(SuggestionRecord),
    /// Progress snapshot after a modifier finished, success or failure
    Progress(ExpansionState),
    /// A recoverable per-variant failure
    Warning(VariantWarning),
}

/// Stream of expansion events
pub type EventStream = mpsc::Receiver<ExpansionEvent>;

/// Stream sender
pub type EventSender = mpsc::Sender<ExpansionEvent>;

/// Create a new event stream
pub fn create_event_stream(buffer_size: usize) -> (EventSender, EventStream) {
    mpsc::channel(buffer_size)
}

/// Event emission handle used by the expansion engine.
///
/// Sends are best-effort: once the receiving side is dropped the run has
/// been superseded by its consumer, and further events are silently
/// discarded while the run itself completes.
#[derive(Clone)]
pub struct EventSink {
    sender: Option<EventSender>,
}

impl EventSink {
    /// Create a sink that feeds a stream
    pub fn new(sender: EventSender) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Create a sink that drops every event
    pub fn discard() -> Self {
        Self { sender: None }
    }

    /// Emit a suggestion record
    pub async fn suggestion(&self, record: SuggestionRecord) {
        self.send(ExpansionEvent::Suggestion(record)).await;
    }

    /// Emit a progress snapshot
    pub async fn progress(&self, state: ExpansionState) {
        self.send(ExpansionEvent::Progress(state)).await;
    }

    /// Emit a per-variant warning
    pub async fn warning(&self, warning: VariantWarning) {
        self.send(ExpansionEvent::Warning(warning)).await;
    }

    async fn send(&self, event: ExpansionEvent) {
        if let Some(sender) = &self.sender {
            // Closed channel means the consumer moved on; not an error
            let _ = sender.send(event).await;
        }
    }
}

/// Everything drained from an event stream, grouped by kind
#[derive(Debug, Clone, Default)]
pub struct CollectedEvents {
    /// Suggestion records in emission order.
    pub suggestions: Vec<SuggestionRecord>,

    /// Warnings in emission order.
    pub warnings: Vec<VariantWarning>,

    /// Progress snapshots in emission order.
    pub progress: Vec<ExpansionState>,
}

impl CollectedEvents {
    /// The last progress snapshot seen, if any
    pub fn final_state(&self) -> Option<&ExpansionState> {
        self.progress.last()
    }
}

/// Drain a stream until the sending side closes it
pub async fn collect_events(mut stream: EventStream) -> CollectedEvents {
    let mut collected = CollectedEvents::default();

    while let Some(event) = stream.recv().await {
        match event {
            ExpansionEvent::Suggestion(record) => collected.suggestions.push(record),
            ExpansionEvent::Progress(state) => collected.progress.push(state),
            ExpansionEvent::Warning(warning) => collected.warnings.push(warning),
        }
    }

    collected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sink_feeds_stream() {
        let (sender, stream) = create_event_stream(16);
        let sink = EventSink::new(sender);

        tokio::spawn(async move {
            let modifier = Modifier::with_prefix("best");
            sink.suggestion(SuggestionRecord::new(1, "best shoes", &modifier))
                .await;
            sink.warning(VariantWarning::new("z shoes", "boom")).await;
            sink.progress(ExpansionState {
                modifiers_completed: 2,
                total_modifiers: 2,
                suggestions_found: 1,
                is_running: false,
            })
            .await;
        });

        let collected = collect_events(stream).await;
        assert_eq!(collected.suggestions.len(), 1);
        assert_eq!(collected.suggestions[0].keyword, "best shoes");
        assert_eq!(collected.warnings.len(), 1);
        assert_eq!(collected.progress.len(), 1);
        assert!(!collected.final_state().unwrap().is_running);
    }

    #[tokio::test]
    async fn test_sink_survives_dropped_receiver() {
        let (sender, stream) = create_event_stream(1);
        drop(stream);

        let sink = EventSink::new(sender);
        sink.warning(VariantWarning::new("a shoes", "nobody listening"))
            .await;
        sink.progress(ExpansionState::new(1)).await;
    }

    #[tokio::test]
    async fn test_discard_sink() {
        let sink = EventSink::discard();
        sink.suggestion(SuggestionRecord::new(1, "shoes", &Modifier::default()))
            .await;
    }
}
