pub mod experience;
pub mod job;
pub mod profile;
pub mod report;
pub mod skills;

pub use experience::{ExperienceLevel, ExperienceProfile};
pub use job::JobPosting;
pub use profile::{CandidateProfile, ContactInfo, EducationLevel, RoleSuggestion};
pub use report::{MatchReport, MatchResult, RecommendationTier, ScoreBreakdown};
pub use skills::SkillSet;
