//! Candidate profile — the tuple built once per résumé and reused across
//! all matching calls.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::experience::ExperienceProfile;
use super::skills::SkillSet;

/// Suggested role with ranked alternatives. Created once per profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleSuggestion {
    pub primary_role: String,
    /// Descending score order, max 5, each above the alternative threshold.
    pub alternative_roles: Vec<String>,
    pub confidence: f64,
    /// role name → normalized score, for transparency.
    pub role_scores: std::collections::BTreeMap<String, f64>,
}

/// Contact details lifted from the résumé text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

/// Highest detected academic credential, ordered low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Diploma,
    Associate,
    Bachelor,
    Master,
    Doctorate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Uuid,
    pub skills: SkillSet,
    pub experience: ExperienceProfile,
    pub role: RoleSuggestion,
    pub contact: ContactInfo,
    pub education: Option<EducationLevel>,
    /// Skills per 1000 words of résumé text.
    pub skill_density: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_levels_are_ordered() {
        assert!(EducationLevel::Bachelor < EducationLevel::Master);
        assert!(EducationLevel::Master < EducationLevel::Doctorate);
        assert!(EducationLevel::Diploma < EducationLevel::Associate);
    }

    #[test]
    fn test_education_serde_snake_case() {
        let level: EducationLevel = serde_json::from_str(r#""master""#).unwrap();
        assert_eq!(level, EducationLevel::Master);
    }
}
