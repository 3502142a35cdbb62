//! Résumé-to-job matching engine.
//!
//! Turns unstructured résumé text into a structured candidate profile
//! (skills, experience level, suggested role, contact details) and matches
//! it against a pool of job postings with an explainable, multi-factor
//! compatibility score.
//!
//! The engine is computation-only: text extraction from PDFs and job-board
//! fetching live behind collaborator traits ([`sources::JobSource`],
//! [`extract::EntityRecognizer`], [`store::ProfileStore`]) injected by the
//! caller. Scoring is deterministic and side-effect-free.

pub mod config;
pub mod engine;
pub mod errors;
pub mod extract;
pub mod matching;
pub mod models;
pub mod ranking;
pub mod roles;
pub mod sources;
pub mod store;
pub mod taxonomy;

pub use config::EngineConfig;
pub use engine::{MatchEngine, MatchOptions};
pub use errors::EngineError;
pub use models::{
    CandidateProfile, ExperienceLevel, ExperienceProfile, JobPosting, MatchReport, MatchResult,
    RecommendationTier, RoleSuggestion, SkillSet,
};
