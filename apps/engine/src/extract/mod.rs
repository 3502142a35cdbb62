pub mod contact;
pub mod education;
pub mod experience;
pub mod skills;

pub use skills::{EntityRecognizer, NoopEntityRecognizer, RecognizedEntity, SkillExtractor};
