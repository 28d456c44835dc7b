//! Expansion run state, warnings and summaries

use super::keyword::SuggestionRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Progress snapshot of a running (or finished) expansion.
///
/// One snapshot is emitted after every modifier, whether its provider call
/// succeeded or failed. The final snapshot of a run carries
/// `is_running == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionState {
    /// Modifiers processed so far, successes and failures alike.
    pub modifiers_completed: usize,

    /// Total number of modifiers this run will process.
    pub total_modifiers: usize,

    /// Deduplicated suggestions emitted so far.
    pub suggestions_found: usize,

    /// False only on the final snapshot of the run.
    pub is_running: bool,
}

impl ExpansionState {
    /// Initial state for a run over `total_modifiers` catalog entries
    pub fn new(total_modifiers: usize) -> Self {
        Self {
            modifiers_completed: 0,
            total_modifiers,
            suggestions_found: 0,
            is_running: true,
        }
    }

    /// Completion percentage in the 0.0 to 100.0 range
    pub fn progress_percent(&self) -> f32 {
        if self.total_modifiers == 0 {
            return 0.0;
        }
        self.modifiers_completed as f32 / self.total_modifiers as f32 * 100.0
    }
}

/// Recoverable per-variant failure.
///
/// A warning never aborts the run; the engine reports it and moves on to the
/// next modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantWarning {
    /// The full variant query whose provider call failed.
    pub variant: String,

    /// The provider's error message.
    pub message: String,
}

impl VariantWarning {
    /// Create a warning for a failed variant
    pub fn new(variant: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            message: message.into(),
        }
    }
}

/// Final accounting of one expansion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionSummary {
    /// Correlation id for this run.
    pub run_id: Uuid,

    /// The seed keyword the run expanded.
    pub keyword: String,

    /// When the run started.
    pub started_at: DateTime<Utc>,

    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_ms: u64,

    /// Modifiers processed. Equals `total_modifiers` unless cancelled.
    pub modifiers_completed: usize,

    /// Modifiers the run was asked to process.
    pub total_modifiers: usize,

    /// Deduplicated suggestions emitted.
    pub suggestions_found: usize,

    /// Number of per-variant warnings raised.
    pub warnings: usize,

    /// True when the run stopped early via a cancellation flag.
    pub cancelled: bool,
}

impl ExpansionSummary {
    /// The state snapshot equivalent to this summary
    pub fn final_state(&self) -> ExpansionState {
        ExpansionState {
            modifiers_completed: self.modifiers_completed,
            total_modifiers: self.total_modifiers,
            suggestions_found: self.suggestions_found,
            is_running: false,
        }
    }
}

/// Everything a collected run produced, in emission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionReport {
    /// Final accounting of the run.
    pub summary: ExpansionSummary,

    /// All suggestion records, ids ascending.
    pub suggestions: Vec<SuggestionRecord>,

    /// All per-variant warnings, in occurrence order.
    pub warnings: Vec<VariantWarning>,
}
