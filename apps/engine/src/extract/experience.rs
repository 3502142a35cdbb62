//! ExperienceClassifier — reconciles explicit year counts and seniority
//! keywords into a single experience level.

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ExperienceLevel, ExperienceProfile};
use crate::taxonomy::contains_term;

/// Year values above this are treated as noise (street numbers, typos) and
/// discarded rather than clamped into the estimate.
const MAX_PLAUSIBLE_YEARS: u32 = 50;

static YEARS_OF_EXPERIENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\s*\+?\s*years?(?:\s+of)?(?:\s+\w+)?\s+experience\b")
        .expect("valid years-of-experience pattern")
});

static SHORT_YEARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})\s*\+?\s*yrs?\b").expect("valid yrs pattern"));

static YEAR_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(19\d{2}|20\d{2})\s*(?:-|–|—|to)\s*(19\d{2}|20\d{2}|present|current)\b")
        .expect("valid year-range pattern")
});

/// Seniority keyword groups, scanned lowest to highest. The highest group
/// with any hit becomes the keyword level, which keeps the outcome
/// deterministic regardless of where in the text the hits occur.
const LEVEL_KEYWORDS: [(ExperienceLevel, &[&str]); 4] = [
    (
        ExperienceLevel::Entry,
        &["intern", "junior", "associate", "trainee", "graduate"],
    ),
    (
        ExperienceLevel::Mid,
        &["developer", "engineer", "analyst", "specialist", "consultant"],
    ),
    (
        ExperienceLevel::Senior,
        &["senior", "lead", "principal", "staff", "architect", "manager"],
    ),
    (
        ExperienceLevel::Executive,
        &["director", "vp", "cto", "ceo", "head", "chief"],
    ),
];

/// Classifies arbitrary text into an experience profile. Always succeeds;
/// empty or uninformative text yields the entry-level default.
pub fn classify(text: &str) -> ExperienceProfile {
    let (years, year_evidence) = extract_years(text);
    let years_level = ExperienceLevel::from_years(years);

    // Keyword evidence overrides the year estimate only when it ranks
    // strictly higher. Years saying "senior" beat a "junior" in the text.
    let level = match keyword_level(text) {
        Some(kw) if kw > years_level => kw,
        _ => years_level,
    };

    ExperienceProfile {
        total_years: years,
        level,
        confidence: if year_evidence { 0.8 } else { 0.4 },
    }
}

/// Maximum plausible year count found in the text, plus whether any year
/// phrase matched at all.
fn extract_years(text: &str) -> (u32, bool) {
    let mut candidates: Vec<u32> = Vec::new();

    for re in [&*YEARS_OF_EXPERIENCE, &*SHORT_YEARS] {
        for caps in re.captures_iter(text) {
            if let Some(years) = caps[1].parse::<u32>().ok().filter(plausible) {
                candidates.push(years);
            }
        }
    }

    let current_year = Utc::now().year() as u32;
    for caps in YEAR_RANGE.captures_iter(text) {
        let start: u32 = match caps[1].parse() {
            Ok(y) => y,
            Err(_) => continue,
        };
        let end = match caps[2].to_lowercase().as_str() {
            "present" | "current" => current_year,
            raw => match raw.parse() {
                Ok(y) => y,
                Err(_) => continue,
            },
        };
        if end >= start {
            if let Some(span) = Some(end - start).filter(plausible) {
                candidates.push(span);
            }
        }
    }

    match candidates.iter().max() {
        Some(&max) => (max, true),
        None => (0, false),
    }
}

fn plausible(years: &u32) -> bool {
    *years <= MAX_PLAUSIBLE_YEARS
}

/// Highest seniority group with any boundary-aware keyword hit.
fn keyword_level(text: &str) -> Option<ExperienceLevel> {
    let mut detected = None;
    for (level, keywords) in LEVEL_KEYWORDS {
        if keywords.iter().any(|kw| contains_term(text, kw)) {
            detected = Some(level);
        }
    }
    detected
}
