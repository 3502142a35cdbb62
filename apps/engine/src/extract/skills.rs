//! SkillExtractor — scans normalized text for taxonomy terms and returns a
//! deduplicated, categorized skill set with per-skill confidence.
//!
//! Pure keyword mode is the baseline contract. An injected
//! [`EntityRecognizer`] can add lower-confidence skills on top, but its
//! absence (the default) must not change the keyword results.

use std::sync::Arc;

use tracing::debug;

use crate::models::SkillSet;
use crate::taxonomy::TAXONOMY;

/// A named entity produced by an optional NER capability.
#[derive(Debug, Clone)]
pub struct RecognizedEntity {
    pub text: String,
    pub label: String,
    pub score: f64,
}

/// Optional named-entity capability, injected at construction time. No lazy
/// global model loading — callers that have a model wrap it in this trait,
/// everyone else gets [`NoopEntityRecognizer`].
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<RecognizedEntity>;
}

/// Default recognizer: no entities, no side effects.
pub struct NoopEntityRecognizer;

impl EntityRecognizer for NoopEntityRecognizer {
    fn recognize(&self, _text: &str) -> Vec<RecognizedEntity> {
        Vec::new()
    }
}

/// Entity surface forms must contain one of these substrings to be taken as
/// a tech term; everything else from the recognizer is ignored.
const TECH_HINTS: [&str; 5] = ["js", "py", "sql", "api", "framework"];

/// Category for recognizer-sourced skills that no taxonomy entry covers.
const UNCATEGORIZED: &str = "other";

pub struct SkillExtractor {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillExtractor {
    pub fn new() -> Self {
        SkillExtractor {
            recognizer: Arc::new(NoopEntityRecognizer),
        }
    }

    pub fn with_recognizer(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        SkillExtractor { recognizer }
    }

    /// Extracts a categorized skill set from arbitrary plain text.
    ///
    /// Empty text yields an empty set; "no skills found" is valid output,
    /// never an error.
    pub fn extract(&self, text: &str) -> SkillSet {
        let lowered = text.to_lowercase();
        let mut set = SkillSet::default();

        for category in TAXONOMY.iter() {
            for skill in &category.skills {
                let occurrences = skill.occurrences(&lowered);
                if occurrences > 0 {
                    set.insert(
                        category.name,
                        skill.display,
                        categorized_confidence(occurrences),
                    );
                }
            }
        }

        self.add_recognized_entities(text, &mut set);

        debug!(skills = set.len(), "skill extraction complete");
        set
    }

    /// Additive NER pass: ORG/MISC entities whose surface form carries a
    /// tech hint become lower-confidence skills under the `other` category.
    /// Entities already matched by the taxonomy keep their taxonomy entry.
    fn add_recognized_entities(&self, text: &str, set: &mut SkillSet) {
        let mut counts: Vec<(String, u32)> = Vec::new();
        for entity in self.recognizer.recognize(text) {
            if entity.label != "ORG" && entity.label != "MISC" {
                continue;
            }
            let surface = entity.text.trim();
            let lowered = surface.to_lowercase();
            if surface.is_empty() || !TECH_HINTS.iter().any(|hint| lowered.contains(hint)) {
                continue;
            }
            let display = title_case(surface);
            match counts.iter_mut().find(|(name, _)| *name == display) {
                Some((_, n)) => *n += 1,
                None => counts.push((display, 1)),
            }
        }

        for (display, occurrences) in counts {
            set.insert(UNCATEGORIZED, &display, uncategorized_confidence(occurrences));
        }
    }
}

fn categorized_confidence(occurrences: u32) -> f64 {
    (0.5 + 0.1 * occurrences as f64).min(1.0)
}

fn uncategorized_confidence(occurrences: u32) -> f64 {
    (0.1 * occurrences as f64).min(1.0)
}

fn title_case(term: &str) -> String {
    term.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
