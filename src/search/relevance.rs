//! Additive relevance of a knowledge graph to a free-text query.

use crate::models::{EntityType, KnowledgeGraph};
use crate::nlp::Lexicon;

/// Query is contained in the graph name.
pub const NAME_MATCH_WEIGHT: f64 = 0.5;
/// Query is contained in at least one entity name (counted once).
pub const ENTITY_MATCH_WEIGHT: f64 = 0.3;
/// Query asks about people and the graph has a PERSON entity.
pub const PERSON_KEYWORD_WEIGHT: f64 = 0.2;
/// Query asks about organizations and the graph has an ORGANIZATION entity.
pub const ORGANIZATION_KEYWORD_WEIGHT: f64 = 0.2;

/// Relevance of `graph` to `query`, in [0, 1].
///
/// All containment tests are case-insensitive. The sum of the satisfied
/// weights is capped at 1.0.
pub fn graph_relevance(graph: &KnowledgeGraph, query: &str, lexicon: &Lexicon) -> f64 {
    let query_lower = query.to_lowercase();
    let mut relevance = 0.0;

    if graph.name.to_lowercase().contains(&query_lower) {
        relevance += NAME_MATCH_WEIGHT;
    }

    if graph
        .entities
        .iter()
        .any(|e| e.name.to_lowercase().contains(&query_lower))
    {
        relevance += ENTITY_MATCH_WEIGHT;
    }

    if mentions_any(&query_lower, lexicon.person_query_words)
        && graph.has_entity_type(EntityType::Person)
    {
        relevance += PERSON_KEYWORD_WEIGHT;
    }

    if mentions_any(&query_lower, lexicon.organization_query_words)
        && graph.has_entity_type(EntityType::Organization)
    {
        relevance += ORGANIZATION_KEYWORD_WEIGHT;
    }

    f64::min(relevance, 1.0)
}

fn mentions_any(query_lower: &str, words: &[&str]) -> bool {
    words.iter().any(|w| query_lower.contains(w))
}
