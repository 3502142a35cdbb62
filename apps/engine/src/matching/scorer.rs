//! MatchScorer — multi-factor weighted compatibility between a candidate
//! profile and a job posting.
//!
//! Five independent factors, each in [0, 1], combined by the canonical
//! weights and scaled to 0–100. Scoring is pure and side-effect-free:
//! profile and posting are read-only, so calls can run in any order or in
//! parallel with identical results.

use crate::matching::explain::build_explanation;
use crate::matching::weights::{FactorWeights, CANONICAL_WEIGHTS};
use crate::models::{
    CandidateProfile, JobPosting, MatchResult, RecommendationTier, ScoreBreakdown,
};
use crate::taxonomy::contains_term;

/// Credit for a candidate skill matching a job skill exactly.
const EXACT_CREDIT: f64 = 1.0;
/// Credit for a substring/partial match against a job skill.
const PARTIAL_CREDIT: f64 = 0.8;
/// Credit for a skill found only in the job's running text.
const TEXT_CREDIT: f64 = 0.6;
/// At most this many missing skills are reported per job.
const MISSING_SKILLS_CAP: usize = 5;

const GROWTH_TITLE_WORDS: [&str; 6] =
    ["senior", "lead", "manager", "principal", "architect", "director"];
const GROWTH_TEXT_PHRASES: [&str; 4] = [
    "career growth",
    "growth opportunities",
    "professional development",
    "mentorship",
];
const URGENCY_PHRASES: [&str; 6] = [
    "urgent",
    "immediate",
    "immediately",
    "asap",
    "hiring now",
    "competitive salary",
];

pub struct MatchScorer {
    weights: FactorWeights,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchScorer {
    pub fn new() -> Self {
        MatchScorer {
            weights: CANONICAL_WEIGHTS,
        }
    }

    /// Scores one candidate against one posting.
    pub fn score(&self, profile: &CandidateProfile, job: &JobPosting) -> MatchResult {
        let job_text = job.searchable_text();
        let title = job.title.to_lowercase();

        let (skill_alignment, matched_skills, missing_skills) =
            score_skill_alignment(profile, job, &job_text);

        let breakdown = ScoreBreakdown {
            skill_alignment,
            role_relevance: score_role_relevance(&profile.role.primary_role, &title, &job_text),
            experience_fit: score_experience_fit(profile, job),
            growth_signal: score_growth_signal(&title, &job_text),
            urgency_bonus: score_urgency(&title, &job_text),
        };

        let weighted = breakdown.skill_alignment * self.weights.skills
            + breakdown.role_relevance * self.weights.role
            + breakdown.experience_fit * self.weights.experience
            + breakdown.growth_signal * self.weights.growth
            + breakdown.urgency_bonus * self.weights.urgency;
        let total_score = round1((weighted * 100.0).clamp(0.0, 100.0));

        MatchResult {
            job_id: job.id.clone(),
            total_score,
            recommendation_tier: RecommendationTier::from_score(total_score),
            explanation: build_explanation(&breakdown),
            score_breakdown: breakdown,
            matched_skills,
            missing_skills,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Skill alignment plus the matched/missing skill lists.
///
/// Per candidate skill: exact hit in `job.skills` earns full credit, a
/// partial (substring) hit 0.8, a verbatim appearance in the job text 0.6.
/// The denominator is the larger of the two skill counts, so a two-skill
/// candidate cannot fully cover a four-skill posting.
fn score_skill_alignment(
    profile: &CandidateProfile,
    job: &JobPosting,
    job_text: &str,
) -> (f64, Vec<String>, Vec<String>) {
    let candidate_skills: Vec<(&String, String)> = profile
        .skills
        .all_skills
        .iter()
        .map(|s| (s, s.to_lowercase()))
        .collect();
    let job_skills: Vec<(&String, String)> =
        job.skills.iter().map(|s| (s, s.to_lowercase())).collect();

    if candidate_skills.is_empty() {
        let missing: Vec<String> = job
            .skills
            .iter()
            .take(MISSING_SKILLS_CAP)
            .cloned()
            .collect();
        return (0.0, Vec::new(), missing);
    }

    let mut credits = 0.0;
    let mut matched = Vec::new();
    for (display, lower) in &candidate_skills {
        let exact = job_skills.iter().any(|(_, js)| js == lower);
        let partial =
            !exact && job_skills.iter().any(|(_, js)| js.contains(lower.as_str()) || lower.contains(js.as_str()));
        let in_text = !exact && !partial && contains_term(job_text, lower);

        let credit = if exact {
            EXACT_CREDIT
        } else if partial {
            PARTIAL_CREDIT
        } else if in_text {
            TEXT_CREDIT
        } else {
            0.0
        };

        if credit > 0.0 {
            credits += credit;
            matched.push((*display).clone());
        }
    }

    // Job skills that no candidate skill covers, in order of appearance.
    let missing: Vec<String> = job_skills
        .iter()
        .filter(|(_, js)| {
            !candidate_skills
                .iter()
                .any(|(_, cs)| cs == js || cs.contains(js.as_str()) || js.contains(cs.as_str()))
        })
        .take(MISSING_SKILLS_CAP)
        .map(|(display, _)| (*display).clone())
        .collect();

    let denominator = if job_skills.is_empty() {
        candidate_skills.len()
    } else {
        candidate_skills.len().max(job_skills.len())
    };
    let alignment = (credits / denominator as f64).min(1.0);

    (alignment, matched, missing)
}

/// +0.4 per suggested-role word in the job title, +0.2 per word found only
/// in the body, clamped to 1.0. Single-letter words carry no signal and are
/// skipped; two-letter ones ("QA", "ML") count.
fn score_role_relevance(role: &str, title: &str, job_text: &str) -> f64 {
    let mut score: f64 = 0.0;
    for word in role.to_lowercase().split_whitespace() {
        if word.len() < 2 {
            continue;
        }
        if contains_term(title, word) {
            score += 0.4;
        } else if contains_term(job_text, word) {
            score += 0.2;
        }
    }
    score.min(1.0)
}

/// Ordinal distance between candidate and job levels. An unspecified job
/// level scores neutral rather than penalizing either side.
fn score_experience_fit(profile: &CandidateProfile, job: &JobPosting) -> f64 {
    let job_level = match job.experience_level {
        Some(level) => level,
        None => return 0.5,
    };
    let distance = profile
        .experience
        .level
        .ordinal()
        .abs_diff(job_level.ordinal());
    match distance {
        0 => 1.0,
        1 => 0.65,
        _ => 0.25,
    }
}

fn score_growth_signal(title: &str, job_text: &str) -> f64 {
    if GROWTH_TITLE_WORDS.iter().any(|w| contains_term(title, w)) {
        1.0
    } else if GROWTH_TEXT_PHRASES.iter().any(|p| job_text.contains(p)) {
        0.6
    } else {
        0.3
    }
}

fn score_urgency(title: &str, job_text: &str) -> f64 {
    let hit = URGENCY_PHRASES
        .iter()
        .any(|p| contains_term(title, p) || contains_term(job_text, p));
    if hit {
        1.0
    } else {
        0.0
    }
}
