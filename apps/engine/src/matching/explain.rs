//! Explanation strings derived from notable factor thresholds.

use crate::models::ScoreBreakdown;

/// Builds a human-readable explanation from the factor breakdown.
/// Never returns an empty list — an unremarkable profile still gets the
/// generic line.
pub fn build_explanation(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut lines = Vec::new();

    if breakdown.skill_alignment > 0.7 {
        lines.push("Strong skill match".to_string());
    } else if breakdown.skill_alignment > 0.4 {
        lines.push("Solid overlap with the required skills".to_string());
    }
    if breakdown.experience_fit > 0.8 {
        lines.push("Perfect experience level fit".to_string());
    }
    if breakdown.role_relevance > 0.7 {
        lines.push("Suggested role closely matches the job title".to_string());
    }
    if breakdown.growth_signal >= 1.0 {
        lines.push("Senior title signals a growth opportunity".to_string());
    }
    if breakdown.urgency_bonus > 0.0 {
        lines.push("Employer signals urgent hiring".to_string());
    }

    if lines.is_empty() {
        lines.push("General profile alignment".to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_empty() {
        let lines = build_explanation(&ScoreBreakdown::default());
        assert_eq!(lines, vec!["General profile alignment".to_string()]);
    }

    #[test]
    fn test_strong_skill_threshold() {
        let breakdown = ScoreBreakdown {
            skill_alignment: 0.75,
            ..ScoreBreakdown::default()
        };
        assert!(build_explanation(&breakdown)
            .iter()
            .any(|l| l == "Strong skill match"));
    }

    #[test]
    fn test_perfect_experience_fit() {
        let breakdown = ScoreBreakdown {
            experience_fit: 1.0,
            ..ScoreBreakdown::default()
        };
        assert!(build_explanation(&breakdown)
            .iter()
            .any(|l| l.contains("experience level fit")));
    }

    #[test]
    fn test_multiple_notable_factors_stack() {
        let breakdown = ScoreBreakdown {
            skill_alignment: 0.9,
            role_relevance: 0.8,
            experience_fit: 1.0,
            growth_signal: 1.0,
            urgency_bonus: 1.0,
        };
        assert_eq!(build_explanation(&breakdown).len(), 5);
    }
}
