//! RoleRecommender — scores a skill set against a fixed role → keyword
//! pattern table, adjusted by experience level.

use std::collections::BTreeMap;

use crate::models::{ExperienceLevel, ExperienceProfile, RoleSuggestion, SkillSet};
use crate::taxonomy::contains_term;

/// Primary role must clear this normalized score, otherwise the
/// experience-level default applies.
const PRIMARY_THRESHOLD: f64 = 0.3;
/// Alternatives must clear this, capped at [`MAX_ALTERNATIVES`].
const ALTERNATIVE_THRESHOLD: f64 = 0.2;
const MAX_ALTERNATIVES: usize = 5;

/// Role pattern table. Order matters: ties between equal scores resolve to
/// the earlier entry.
const ROLE_PATTERNS: [(&str, &[&str]); 12] = [
    (
        "Software Engineer",
        &["software", "programming", "development", "algorithms", "debugging", "testing"],
    ),
    (
        "Frontend Developer",
        &["react", "javascript", "css", "html", "vue", "angular", "frontend"],
    ),
    (
        "Backend Developer",
        &["backend", "api", "database", "server", "microservices", "rest"],
    ),
    (
        "Full Stack Developer",
        &["full stack", "frontend", "backend", "javascript", "api"],
    ),
    (
        "Data Scientist",
        &["data science", "machine learning", "statistics", "python", "pandas", "tensorflow", "modeling"],
    ),
    (
        "Data Engineer",
        &["etl", "data pipeline", "spark", "sql", "warehouse", "airflow"],
    ),
    (
        "DevOps Engineer",
        &["docker", "kubernetes", "ci/cd", "terraform", "infrastructure", "aws"],
    ),
    (
        "Mobile Developer",
        &["android", "ios", "flutter", "react native", "mobile"],
    ),
    (
        "Machine Learning Engineer",
        &["machine learning", "deep learning", "pytorch", "tensorflow", "mlops"],
    ),
    (
        "QA Engineer",
        &["testing", "qa", "automation", "selenium", "quality assurance"],
    ),
    (
        "Security Engineer",
        &["security", "penetration testing", "cryptography", "vulnerability", "compliance"],
    ),
    (
        "Product Manager",
        &["product management", "roadmap", "stakeholder", "requirements", "agile"],
    ),
];

/// Suggests a primary role plus ranked alternatives.
///
/// Per role: `score = min(1.0, (skill_hits * 2 + text_hits) / |keywords|)`.
/// A skill-set hit weighs double because extracted skills are stronger
/// evidence than a stray mention in the running text.
pub fn suggest_role(
    skills: &SkillSet,
    experience: &ExperienceProfile,
    raw_text: &str,
) -> RoleSuggestion {
    let lowered = raw_text.to_lowercase();

    let mut scored: Vec<(&'static str, f64)> = ROLE_PATTERNS
        .iter()
        .map(|(role, keywords)| {
            let skill_hits = keywords.iter().filter(|kw| skills.contains(kw)).count();
            let text_hits = keywords
                .iter()
                .filter(|kw| contains_term(&lowered, kw))
                .count();
            let raw = (skill_hits * 2 + text_hits) as f64 / keywords.len() as f64;
            (*role, raw.min(1.0))
        })
        .collect();

    let role_scores: BTreeMap<String, f64> = scored
        .iter()
        .filter(|(_, score)| *score > 0.0)
        .map(|(role, score)| (role.to_string(), *score))
        .collect();

    // Stable sort: equal scores keep pattern-table order.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let (primary, confidence) = match scored.first() {
        Some(&(role, score)) if score > PRIMARY_THRESHOLD => (role.to_string(), score),
        _ => (default_role(experience.level).to_string(), PRIMARY_THRESHOLD),
    };

    let alternative_roles: Vec<String> = scored
        .iter()
        .filter(|(role, score)| *score > ALTERNATIVE_THRESHOLD && *role != primary)
        .take(MAX_ALTERNATIVES)
        .map(|(role, _)| apply_seniority(role, experience.level))
        .collect();

    RoleSuggestion {
        primary_role: apply_seniority(&primary, experience.level),
        alternative_roles,
        confidence,
        role_scores,
    }
}

/// Keyword list for a role, tolerating seniority prefixes ("Senior Data
/// Scientist" resolves to the "Data Scientist" patterns).
pub(crate) fn role_keywords(role: &str) -> Option<&'static [&'static str]> {
    let lowered = role.to_lowercase();
    ROLE_PATTERNS
        .iter()
        .find(|(name, _)| lowered.contains(&name.to_lowercase()))
        .map(|(_, keywords)| *keywords)
}

/// Fallback when no pattern scores above the primary threshold.
fn default_role(level: ExperienceLevel) -> &'static str {
    match level {
        ExperienceLevel::Entry => "Junior Software Engineer",
        ExperienceLevel::Mid => "Software Engineer",
        ExperienceLevel::Senior => "Senior Software Engineer",
        ExperienceLevel::Executive => "Engineering Manager",
    }
}

const ENTRY_WORDS: [&str; 5] = ["junior", "intern", "graduate", "trainee", "associate"];
const SENIOR_WORDS: [&str; 4] = ["senior", "lead", "principal", "staff"];
const EXECUTIVE_WORDS: [&str; 6] = ["principal", "manager", "director", "head", "chief", "vp"];

/// Prefixes the role with a seniority word matching the candidate's level.
/// Idempotent: a role that already carries a word of that rank (or higher)
/// is left untouched.
fn apply_seniority(role: &str, level: ExperienceLevel) -> String {
    let lowered = role.to_lowercase();
    let has_any = |words: &[&str]| words.iter().any(|w| lowered.contains(w));

    match level {
        ExperienceLevel::Entry if !has_any(&ENTRY_WORDS) => format!("Junior {role}"),
        ExperienceLevel::Senior if !has_any(&SENIOR_WORDS) && !has_any(&EXECUTIVE_WORDS) => {
            format!("Senior {role}")
        }
        ExperienceLevel::Executive if !has_any(&EXECUTIVE_WORDS) && !has_any(&SENIOR_WORDS) => {
            format!("Principal {role}")
        }
        _ => role.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::skills::SkillExtractor;
    use crate::extract::experience::classify;

    fn profile_for(text: &str) -> (SkillSet, ExperienceProfile) {
        (SkillExtractor::new().extract(text), classify(text))
    }

    #[test]
    fn test_data_scientist_beats_frontend() {
        let text = "4 years of experience with Python, TensorFlow and Pandas";
        let (skills, experience) = profile_for(text);
        let suggestion = suggest_role(&skills, &experience, text);

        assert_eq!(suggestion.primary_role, "Data Scientist");
        let ds = suggestion.role_scores.get("Data Scientist").copied().unwrap();
        let fe = suggestion
            .role_scores
            .get("Frontend Developer")
            .copied()
            .unwrap_or(0.0);
        assert!(ds > fe);
    }

    #[test]
    fn test_empty_skills_fall_back_to_level_default() {
        let (skills, _) = profile_for("");
        let experience = ExperienceProfile {
            total_years: 4,
            level: ExperienceLevel::Mid,
            confidence: 0.8,
        };
        let suggestion = suggest_role(&skills, &experience, "");
        assert_eq!(suggestion.primary_role, "Software Engineer");
        assert!(suggestion.alternative_roles.is_empty());
    }

    #[test]
    fn test_entry_fallback_is_junior() {
        let (skills, _) = profile_for("");
        let experience = ExperienceProfile::default();
        let suggestion = suggest_role(&skills, &experience, "");
        // default already carries "Junior"; the prefix pass must not double it
        assert_eq!(suggestion.primary_role, "Junior Software Engineer");
    }

    #[test]
    fn test_senior_prefix_applied_once() {
        assert_eq!(
            apply_seniority("Backend Developer", ExperienceLevel::Senior),
            "Senior Backend Developer"
        );
        assert_eq!(
            apply_seniority("Senior Backend Developer", ExperienceLevel::Senior),
            "Senior Backend Developer"
        );
        assert_eq!(
            apply_seniority("Lead Engineer", ExperienceLevel::Senior),
            "Lead Engineer"
        );
    }

    #[test]
    fn test_executive_prefix_respects_existing_rank() {
        assert_eq!(
            apply_seniority("Engineering Manager", ExperienceLevel::Executive),
            "Engineering Manager"
        );
        assert_eq!(
            apply_seniority("Backend Developer", ExperienceLevel::Executive),
            "Principal Backend Developer"
        );
    }

    #[test]
    fn test_alternatives_capped_and_above_threshold() {
        let text = "Python, JavaScript, React, SQL, Docker, Kubernetes, AWS, \
                    machine learning, testing, backend APIs, frontend, agile";
        let (skills, experience) = profile_for(text);
        let suggestion = suggest_role(&skills, &experience, text);

        assert!(suggestion.alternative_roles.len() <= 5);
        for alt in &suggestion.alternative_roles {
            assert_ne!(*alt, suggestion.primary_role);
        }
        for (_, score) in &suggestion.role_scores {
            assert!(*score >= 0.0 && *score <= 1.0);
        }
    }

    #[test]
    fn test_suggestion_is_deterministic() {
        let text = "Python, Docker, AWS and 6 years of experience as engineer";
        let (skills, experience) = profile_for(text);
        let a = suggest_role(&skills, &experience, text);
        let b = suggest_role(&skills, &experience, text);
        assert_eq!(a, b);
    }
}
