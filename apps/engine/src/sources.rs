//! Job-source collaborators.
//!
//! The engine never scrapes or calls job boards itself; it consumes the
//! `JobSource` contract. Sources may legitimately return zero postings, so
//! [`synthetic_postings`] provides a deterministic fallback pool that keeps
//! the pipeline producing explainable output instead of an empty page.

use async_trait::async_trait;

use crate::errors::EngineError;
use crate::models::{ExperienceLevel, JobPosting};
use crate::roles::role_keywords;

/// A provider of standardized job postings. Implementations wrap job-board
/// APIs, RSS feeds, databases, or fixtures.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_jobs(
        &self,
        keywords: &[String],
        location: &str,
        limit: usize,
    ) -> Result<Vec<JobPosting>, EngineError>;
}

/// In-memory source backed by a fixed posting list. Useful for tests and
/// batch runs over pre-fetched data.
pub struct StaticJobSource {
    postings: Vec<JobPosting>,
}

impl StaticJobSource {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        StaticJobSource { postings }
    }
}

#[async_trait]
impl JobSource for StaticJobSource {
    async fn fetch_jobs(
        &self,
        _keywords: &[String],
        _location: &str,
        limit: usize,
    ) -> Result<Vec<JobPosting>, EngineError> {
        Ok(self.postings.iter().take(limit).cloned().collect())
    }
}

/// Deterministic synthetic postings for a suggested role, used when a live
/// source returns nothing. No timestamps or random ids: repeated runs over
/// the same profile produce identical fallback output.
pub fn synthetic_postings(suggested_role: &str, location: &str) -> Vec<JobPosting> {
    let skills: Vec<String> = role_keywords(suggested_role)
        .unwrap_or(&["communication", "teamwork"])
        .iter()
        .map(|s| s.to_string())
        .collect();

    let spec = [
        (
            "fallback-1",
            suggested_role.to_string(),
            "TechCorp Solutions",
            Some(ExperienceLevel::Mid),
            false,
        ),
        (
            "fallback-2",
            format!("Senior {suggested_role}"),
            "Innovatech Labs",
            Some(ExperienceLevel::Senior),
            true,
        ),
        (
            "fallback-3",
            format!("Junior {suggested_role}"),
            "StartupHub",
            Some(ExperienceLevel::Entry),
            true,
        ),
    ];

    spec.into_iter()
        .map(|(id, title, company, level, remote)| JobPosting {
            id: id.to_string(),
            description: format!(
                "We are looking for a {title} to join our {company} team in {location}. \
                 Career growth and mentorship offered."
            ),
            title,
            company: company.to_string(),
            location: location.to_string(),
            skills: skills.clone(),
            experience_level: level,
            remote_allowed: remote,
            source: "fallback".to_string(),
            ..JobPosting::default()
        })
        .collect()
}
