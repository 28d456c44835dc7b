//! Keyword difficulty bands
//!
//! DataForSEO scores keyword difficulty from 0 to 100; consumers bucket the
//! score into named bands with fixed display colors.

use serde::{Deserialize, Serialize};

/// Named difficulty bucket for a 0 to 100 difficulty score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DifficultyBand {
    /// Score 0 to 14
    VeryEasy,
    /// Score 15 to 29
    Easy,
    /// Score 30 to 49
    Medium,
    /// Score 50 to 69
    Hard,
    /// Score 70 to 84
    VeryHard,
    /// Score 85 and up
    ExtremelyHard,
}

impl DifficultyBand {
    /// Bucket a difficulty score
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=14 => DifficultyBand::VeryEasy,
            15..=29 => DifficultyBand::Easy,
            30..=49 => DifficultyBand::Medium,
            50..=69 => DifficultyBand::Hard,
            70..=84 => DifficultyBand::VeryHard,
            _ => DifficultyBand::ExtremelyHard,
        }
    }

    /// Human-readable band label
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyBand::VeryEasy => "Very Easy",
            DifficultyBand::Easy => "Easy",
            DifficultyBand::Medium => "Medium",
            DifficultyBand::Hard => "Hard",
            DifficultyBand::VeryHard => "Very Hard",
            DifficultyBand::ExtremelyHard => "Extremely Hard",
        }
    }

    /// Display color, as a CSS color value
    pub fn color(&self) -> &'static str {
        match self {
            DifficultyBand::VeryEasy => "#1ba005",
            DifficultyBand::Easy => "#AADA2B",
            DifficultyBand::Medium => "#ffbe02",
            DifficultyBand::Hard => "#ef7a24",
            DifficultyBand::VeryHard => "#bd462e",
            DifficultyBand::ExtremelyHard => "red",
        }
    }
}

impl std::fmt::Display for DifficultyBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
