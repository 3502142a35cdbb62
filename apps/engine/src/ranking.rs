//! Ranker / deduplicator — orders scored jobs by composite relevance and
//! buckets them into presentation categories.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::models::{JobPosting, MatchReport, MatchResult};
use crate::taxonomy::contains_term;

/// Bonus when the suggested role appears verbatim in the job title.
const ROLE_IN_TITLE_BONUS: f64 = 10.0;
/// Per matched skill.
const MATCHED_SKILL_BONUS: f64 = 1.5;
/// Posted within the last week / month.
const FRESH_BONUS: f64 = 5.0;
const RECENT_BONUS: f64 = 2.0;
const REMOTE_BONUS: f64 = 3.0;
const URGENCY_BONUS: f64 = 3.0;

const HIGH_MATCH_THRESHOLD: f64 = 70.0;
const INTERNSHIP_TERMS: [&str; 4] = ["intern", "internship", "trainee", "co-op"];
const ENTRY_TERMS: [&str; 3] = ["junior", "entry", "graduate"];
const GROWTH_TITLE_TERMS: [&str; 3] = ["senior", "lead", "manager"];

/// Filters, deduplicates, sorts, and categorizes scored jobs.
///
/// Ordering is descending by `total_score + bonus`; equal relevance keeps
/// input order (stable sort). Dedupe key is (title, company, location)
/// lowercased, first occurrence wins.
pub fn rank(
    suggested_role: &str,
    scored: Vec<(MatchResult, JobPosting)>,
    min_score: f64,
    limit: usize,
    now: DateTime<Utc>,
) -> MatchReport {
    let mut seen: BTreeSet<(String, String, String)> = BTreeSet::new();
    let mut survivors: Vec<(MatchResult, JobPosting, f64)> = Vec::new();

    for (result, job) in scored {
        if result.total_score < min_score {
            continue;
        }
        if !seen.insert(job.dedupe_key()) {
            continue;
        }
        let relevance = result.total_score + relevance_bonus(suggested_role, &result, &job, now);
        survivors.push((result, job, relevance));
    }

    survivors.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));
    survivors.truncate(limit);

    let mut report = MatchReport::default();
    for (result, job, _) in survivors {
        categorize(&mut report, &result, &job);
        report.ranked.push(result);
    }
    report
}

fn relevance_bonus(
    suggested_role: &str,
    result: &MatchResult,
    job: &JobPosting,
    now: DateTime<Utc>,
) -> f64 {
    let mut bonus = 0.0;

    let title = job.title.to_lowercase();
    if !suggested_role.is_empty() && title.contains(&suggested_role.to_lowercase()) {
        bonus += ROLE_IN_TITLE_BONUS;
    }

    bonus += result.matched_skills.len() as f64 * MATCHED_SKILL_BONUS;

    match job.days_since_posted(now) {
        Some(days) if days <= 7 => bonus += FRESH_BONUS,
        Some(days) if days <= 30 => bonus += RECENT_BONUS,
        _ => {}
    }

    if job.remote_allowed {
        bonus += REMOTE_BONUS;
    }
    if result.score_breakdown.urgency_bonus > 0.0 {
        bonus += URGENCY_BONUS;
    }

    bonus
}

/// Buckets are non-exclusive: one job may land in several. Empty buckets
/// never appear in the report.
fn categorize(report: &mut MatchReport, result: &MatchResult, job: &JobPosting) {
    let title = job.title.to_lowercase();
    let text = format!("{} {}", title, job.description.to_lowercase());

    let mut add = |bucket: &str| {
        report
            .categories
            .entry(bucket.to_string())
            .or_default()
            .push(result.clone());
    };

    if result.total_score >= HIGH_MATCH_THRESHOLD {
        add("high_match");
    }
    if INTERNSHIP_TERMS.iter().any(|t| contains_term(&text, t)) {
        add("internship");
    }
    if ENTRY_TERMS.iter().any(|t| contains_term(&text, t)) {
        add("entry_level");
    }
    if job.remote_allowed {
        add("remote");
    }
    if GROWTH_TITLE_TERMS.iter().any(|t| contains_term(&title, t)) {
        add("growth_opportunity");
    }
}
