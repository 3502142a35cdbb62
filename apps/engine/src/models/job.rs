//! JobPosting — the standardized posting shape produced by job-source
//! collaborators. Consumed read-only; the engine never mutates a posting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::experience::ExperienceLevel;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    #[serde(default)]
    pub salary_currency: String,
    /// None when the source did not state a level — scored neutrally.
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub employment_type: String,
    pub posted_date: Option<DateTime<Utc>>,
    pub apply_url: Option<String>,
    #[serde(default)]
    pub remote_allowed: bool,
    #[serde(default)]
    pub source: String,
}

impl JobPosting {
    /// A posting without a title and company cannot be scored or presented.
    /// Such postings are skipped (with a warning), not treated as fatal.
    pub fn is_well_formed(&self) -> bool {
        !self.title.trim().is_empty() && !self.company.trim().is_empty()
    }

    /// Description and requirements joined, lowercased once for matching.
    pub fn searchable_text(&self) -> String {
        let mut text = self.description.to_lowercase();
        for req in &self.requirements {
            text.push(' ');
            text.push_str(&req.to_lowercase());
        }
        text
    }

    /// Dedupe key: same title + company + location means the same posting,
    /// whatever id the source assigned.
    pub fn dedupe_key(&self) -> (String, String, String) {
        (
            self.title.to_lowercase(),
            self.company.to_lowercase(),
            self.location.to_lowercase(),
        )
    }

    /// Whole days since the posting date, None when the source gave no date.
    pub fn days_since_posted(&self, now: DateTime<Utc>) -> Option<i64> {
        self.posted_date.map(|d| (now - d).num_days())
    }
}
