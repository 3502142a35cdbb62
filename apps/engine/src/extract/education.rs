//! Education detection — highest academic credential mentioned in the text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::EducationLevel;

static DEGREE_PATTERNS: Lazy<Vec<(EducationLevel, Regex)>> = Lazy::new(|| {
    // Scanned highest first; the first hit wins.
    [
        (
            EducationLevel::Doctorate,
            r"(?i)\b(?:ph\.?\s?d|doctorate|doctoral)\b",
        ),
        // dot-terminated forms ("M.S.") end on their own dot; a trailing \b
        // would never match after punctuation
        (
            EducationLevel::Master,
            r"(?i)\b(?:master(?:'s)?\b|m\.?sc\b|m\.?s\.|mba\b|m\.?eng\b)",
        ),
        (
            EducationLevel::Bachelor,
            r"(?i)\b(?:bachelor(?:'s)?\b|b\.?sc\b|b\.?s\.|b\.?a\.|b\.?tech\b|b\.?eng\b)",
        ),
        (
            EducationLevel::Associate,
            r"(?i)\bassociate(?:'s)?\s+degree\b",
        ),
        (
            EducationLevel::Diploma,
            r"(?i)\b(?:diploma|high\s+school)\b",
        ),
    ]
    .into_iter()
    .map(|(level, pattern)| (level, Regex::new(pattern).expect("valid degree pattern")))
    .collect()
});

/// Highest degree mentioned, None when nothing degree-like appears.
pub fn detect_education(text: &str) -> Option<EducationLevel> {
    DEGREE_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(level, _)| *level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_phd() {
        assert_eq!(
            detect_education("PhD in Computer Science"),
            Some(EducationLevel::Doctorate)
        );
        assert_eq!(
            detect_education("Ph.D. candidate"),
            Some(EducationLevel::Doctorate)
        );
    }

    #[test]
    fn test_highest_degree_wins() {
        let text = "B.Sc. in Physics, Master of Science in CS";
        assert_eq!(detect_education(text), Some(EducationLevel::Master));
    }

    #[test]
    fn test_detects_bachelor_variants() {
        assert_eq!(
            detect_education("Bachelor's degree in engineering"),
            Some(EducationLevel::Bachelor)
        );
        assert_eq!(
            detect_education("B.Tech, 2019"),
            Some(EducationLevel::Bachelor)
        );
    }

    #[test]
    fn test_none_without_degree_mentions() {
        assert_eq!(detect_education("10 years of plumbing"), None);
        assert_eq!(detect_education(""), None);
    }
}
