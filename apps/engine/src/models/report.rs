//! Match results — per-job scores with factor breakdowns and explanations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Coarse presentation bucket derived from the numeric score.
/// Thresholds are fixed: ≥80 excellent, ≥60 good, ≥40 fair, else poor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl RecommendationTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            RecommendationTier::Excellent
        } else if score >= 60.0 {
            RecommendationTier::Good
        } else if score >= 40.0 {
            RecommendationTier::Fair
        } else {
            RecommendationTier::Poor
        }
    }
}

/// Per-factor scores in [0, 1], before weighting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_alignment: f64,
    pub role_relevance: f64,
    pub experience_fit: f64,
    pub growth_signal: f64,
    pub urgency_bonus: f64,
}

/// Outcome of scoring one candidate against one posting. Immutable; lives
/// only for the request/response cycle, never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    /// Weighted total in [0, 100], rounded to one decimal.
    pub total_score: f64,
    pub score_breakdown: ScoreBreakdown,
    /// Candidate skills that earned any credit, in candidate-skill order.
    pub matched_skills: Vec<String>,
    /// Job skills with no exact or partial candidate match, capped at 5.
    pub missing_skills: Vec<String>,
    pub recommendation_tier: RecommendationTier,
    /// Human-readable factor highlights. Never empty.
    pub explanation: Vec<String>,
}

/// Ranked and categorized output of a full matching run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchReport {
    pub ranked: Vec<MatchResult>,
    /// Non-exclusive buckets; only non-empty buckets appear.
    pub categories: BTreeMap<String, Vec<MatchResult>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(
            RecommendationTier::from_score(80.0),
            RecommendationTier::Excellent
        );
        assert_eq!(
            RecommendationTier::from_score(79.9),
            RecommendationTier::Good
        );
        assert_eq!(
            RecommendationTier::from_score(60.0),
            RecommendationTier::Good
        );
        assert_eq!(
            RecommendationTier::from_score(40.0),
            RecommendationTier::Fair
        );
        assert_eq!(
            RecommendationTier::from_score(39.9),
            RecommendationTier::Poor
        );
        assert_eq!(RecommendationTier::from_score(0.0), RecommendationTier::Poor);
    }

    #[test]
    fn test_breakdown_serializes_as_factor_map() {
        let json = serde_json::to_value(ScoreBreakdown::default()).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), 5);
        for factor in [
            "skill_alignment",
            "role_relevance",
            "experience_fit",
            "growth_signal",
            "urgency_bonus",
        ] {
            assert!(map[factor].is_f64());
        }
    }
}
