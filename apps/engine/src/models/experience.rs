//! Experience level and the reconciled experience profile.

use serde::{Deserialize, Serialize};

/// Seniority level, ordered. The derived `Ord` gives entry < mid < senior <
/// executive, which the scorer uses as an ordinal distance.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    Entry,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    /// Ordinal position used for experience-fit distance.
    pub fn ordinal(self) -> u8 {
        match self {
            ExperienceLevel::Entry => 0,
            ExperienceLevel::Mid => 1,
            ExperienceLevel::Senior => 2,
            ExperienceLevel::Executive => 3,
        }
    }

    /// Level implied by total years via the fixed threshold table:
    /// 0–2 entry, 3–5 mid, 6–10 senior, >10 executive.
    pub fn from_years(years: u32) -> Self {
        match years {
            0..=2 => ExperienceLevel::Entry,
            3..=5 => ExperienceLevel::Mid,
            6..=10 => ExperienceLevel::Senior,
            _ => ExperienceLevel::Executive,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Executive => "executive",
        }
    }
}

/// Reconciled experience estimate for a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceProfile {
    pub total_years: u32,
    pub level: ExperienceLevel,
    /// 0.8 when an explicit year phrase was found, 0.4 otherwise.
    pub confidence: f64,
}
