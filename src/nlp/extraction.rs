//! Entity extraction from free text (regex-based).

use regex::{Regex, RegexBuilder};

use super::{Language, Lexicon};
use crate::models::{Entity, EntityType};

/// Confidence assigned to entities found by a category pattern.
pub const PATTERN_CONFIDENCE: f64 = 0.9;
/// Confidence assigned to concept entities found by keyword.
pub const KEYWORD_CONFIDENCE: f64 = 0.7;

/// Extracts PERSON, ORGANIZATION, LOCATION and DATE entities by pattern, and
/// CONCEPT entities by keyword presence.
///
/// Matching is case-insensitive, so the "two capitalized words" person pattern
/// effectively matches any two adjacent words. Matches are not deduplicated.
pub struct EntityExtractor {
    lexicon: &'static Lexicon,
    patterns: Vec<(EntityType, Regex)>,
}

impl EntityExtractor {
    pub fn new(language: Language) -> Self {
        let lexicon = language.lexicon();
        let patterns = [
            (EntityType::Person, lexicon.person_pattern),
            (EntityType::Organization, lexicon.organization_pattern),
            (EntityType::Location, lexicon.location_pattern),
            (EntityType::Date, lexicon.date_pattern),
        ]
        .into_iter()
        .map(|(entity_type, pattern)| {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("Invalid regex pattern");
            (entity_type, regex)
        })
        .collect();

        Self { lexicon, patterns }
    }

    pub fn language(&self) -> Language {
        self.lexicon.language
    }

    /// Extract entities in category order (person, organization, location,
    /// date, then concepts in keyword order); within a category, matches are
    /// left to right.
    pub fn extract(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for (entity_type, regex) in &self.patterns {
            for m in regex.find_iter(text) {
                entities.push(
                    Entity::new(m.as_str(), *entity_type).with_confidence(PATTERN_CONFIDENCE),
                );
            }
        }

        let text_lower = text.to_lowercase();
        for keyword in self.lexicon.concept_keywords {
            if text_lower.contains(&keyword.to_lowercase()) {
                entities.push(
                    Entity::new(capitalize(keyword), EntityType::Concept)
                        .with_confidence(KEYWORD_CONFIDENCE),
                );
            }
        }

        log::info!("Extracted {} entities", entities.len());
        entities
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
