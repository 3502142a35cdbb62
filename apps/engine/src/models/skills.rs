//! SkillSet — the categorized, deduplicated skill inventory of a candidate or posting.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Categorized skills extracted from free text.
///
/// Built fresh per extraction call and never mutated afterwards. BTree
/// containers keep iteration order deterministic, which the ranking layer
/// relies on for stable output across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    /// category name → canonical skill display names
    pub categories: BTreeMap<String, BTreeSet<String>>,
    /// flat view across categories, canonical display form
    pub all_skills: BTreeSet<String>,
    /// canonical display name → detection confidence in [0, 1]
    pub confidence: BTreeMap<String, f64>,
}

impl SkillSet {
    /// Inserts a skill under a category, deduplicating by lowercase key.
    /// A skill detected via several methods keeps its first category and the
    /// higher of the two confidences.
    pub fn insert(&mut self, category: &str, display: &str, confidence: f64) {
        let key = display.to_lowercase();
        if let Some(existing) = self
            .all_skills
            .iter()
            .find(|s| s.to_lowercase() == key)
            .cloned()
        {
            let entry = self.confidence.entry(existing).or_insert(0.0);
            if confidence > *entry {
                *entry = confidence;
            }
            return;
        }

        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(display.to_string());
        self.all_skills.insert(display.to_string());
        self.confidence.insert(display.to_string(), confidence);
    }

    pub fn is_empty(&self) -> bool {
        self.all_skills.is_empty()
    }

    pub fn len(&self) -> usize {
        self.all_skills.len()
    }

    /// Case-insensitive membership test against the flat skill view.
    pub fn contains(&self, skill: &str) -> bool {
        let key = skill.to_lowercase();
        self.all_skills.iter().any(|s| s.to_lowercase() == key)
    }

    /// Skills per 1000 words of source text. Zero for empty text.
    pub fn density(&self, word_count: usize) -> f64 {
        if word_count == 0 {
            return 0.0;
        }
        self.all_skills.len() as f64 / word_count as f64 * 1000.0
    }
}
