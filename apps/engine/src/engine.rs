//! MatchEngine — the facade callers (HTTP layer, CLI, batch jobs) consume.
//!
//! Two operations: build a candidate profile from résumé text, and match a
//! profile against a pool of postings. Both are synchronous, pure CPU work;
//! the async surface exists only where a job-source collaborator is
//! involved.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::extract::contact::extract_contact;
use crate::extract::education::detect_education;
use crate::extract::experience::classify;
use crate::extract::skills::{EntityRecognizer, SkillExtractor};
use crate::matching::MatchScorer;
use crate::models::{CandidateProfile, JobPosting, MatchReport};
use crate::ranking::rank;
use crate::roles::suggest_role;
use crate::sources::{synthetic_postings, JobSource};
use crate::store::ProfileStore;

/// Per-call overrides for a matching run. `None` falls back to the engine
/// config.
#[derive(Debug, Clone, Default)]
pub struct MatchOptions {
    pub min_score: Option<f64>,
    pub limit: Option<usize>,
}

pub struct MatchEngine {
    config: EngineConfig,
    extractor: SkillExtractor,
    scorer: MatchScorer,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl MatchEngine {
    pub fn new(config: EngineConfig) -> Self {
        MatchEngine {
            config,
            extractor: SkillExtractor::new(),
            scorer: MatchScorer::new(),
        }
    }

    /// Engine with an injected NER capability. Keyword extraction results
    /// are unaffected; the recognizer only adds lower-confidence skills.
    pub fn with_recognizer(config: EngineConfig, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        MatchEngine {
            config,
            extractor: SkillExtractor::with_recognizer(recognizer),
            scorer: MatchScorer::new(),
        }
    }

    /// Builds the candidate profile: skills, experience, role suggestion,
    /// contact details, and education.
    ///
    /// Rejects text below the configured minimum length; everything past
    /// that boundary succeeds on any input, including text with no
    /// detectable skills.
    pub fn build_candidate_profile(
        &self,
        resume_text: &str,
    ) -> Result<CandidateProfile, EngineError> {
        let trimmed = resume_text.trim();
        if trimmed.len() < self.config.min_resume_chars {
            return Err(EngineError::InsufficientText {
                chars: trimmed.len(),
                min: self.config.min_resume_chars,
            });
        }

        let skills = self.extractor.extract(trimmed);
        let experience = classify(trimmed);
        let role = suggest_role(&skills, &experience, trimmed);
        let word_count = trimmed.split_whitespace().count();
        let skill_density = skills.density(word_count);

        info!(
            skills = skills.len(),
            level = experience.level.as_str(),
            role = %role.primary_role,
            "candidate profile built"
        );

        Ok(CandidateProfile {
            id: Uuid::new_v4(),
            contact: extract_contact(trimmed),
            education: detect_education(trimmed),
            skills,
            experience,
            role,
            skill_density,
        })
    }

    /// Like [`build_candidate_profile`](Self::build_candidate_profile), but
    /// consults an injected store first and caches the built profile.
    pub fn profile_for(
        &self,
        store: &dyn ProfileStore,
        key: &str,
        resume_text: &str,
    ) -> Result<CandidateProfile, EngineError> {
        if let Some(cached) = store.get(key) {
            return Ok(cached);
        }
        let profile = self.build_candidate_profile(resume_text)?;
        store.put(key, profile.clone());
        Ok(profile)
    }

    /// Scores the profile against every well-formed posting, then filters,
    /// deduplicates, ranks, and categorizes.
    ///
    /// An empty job list yields an empty report; a malformed posting is
    /// skipped with a warning, never failing the batch.
    pub fn match_against_jobs(
        &self,
        profile: &CandidateProfile,
        jobs: &[JobPosting],
        options: &MatchOptions,
    ) -> MatchReport {
        let min_score = options.min_score.unwrap_or(self.config.min_score);
        let limit = options.limit.unwrap_or(self.config.result_limit);

        let scored: Vec<_> = jobs
            .iter()
            .filter(|job| {
                if job.is_well_formed() {
                    true
                } else {
                    warn!(job_id = %job.id, source = %job.source, "skipping malformed job posting");
                    false
                }
            })
            .map(|job| (self.scorer.score(profile, job), job.clone()))
            .collect();

        rank(
            &profile.role.primary_role,
            scored,
            min_score,
            limit,
            Utc::now(),
        )
    }

    /// Fetches postings from a source and matches against them, degrading
    /// to deterministic synthetic postings when the source returns nothing.
    pub async fn match_with_source(
        &self,
        profile: &CandidateProfile,
        source: &dyn JobSource,
        location: &str,
        options: &MatchOptions,
    ) -> Result<MatchReport, EngineError> {
        let mut keywords: Vec<String> = profile.skills.all_skills.iter().take(5).cloned().collect();
        keywords.push(profile.role.primary_role.clone());

        let limit = options.limit.unwrap_or(self.config.result_limit);
        let mut jobs = source.fetch_jobs(&keywords, location, limit).await?;
        if jobs.is_empty() {
            warn!(location, "job source returned no postings, using fallback pool");
            jobs = synthetic_postings(&profile.role.primary_role, location);
        }

        Ok(self.match_against_jobs(profile, &jobs, options))
    }
}
