//! Heuristic hypotheses about a knowledge graph's structure.

use std::collections::HashMap;

use crate::models::{EntityType, KnowledgeGraph};
use crate::nlp::Lexicon;

/// Generate human-readable hypotheses for `graph`:
/// high connectivity (relations > 2 x entities), the most central entity
/// (source of the most relations, earliest-seen on ties), and people /
/// organization co-occurrence.
pub fn generate_hypotheses(graph: &KnowledgeGraph, lexicon: &Lexicon) -> Vec<String> {
    let mut hypotheses = Vec::new();

    if graph.relations.len() > graph.entities.len() * 2 {
        hypotheses.push(lexicon.high_connectivity_hypothesis());
    }

    if let Some(central) = most_connected_source(graph).and_then(|id| graph.entity(id)) {
        hypotheses.push(lexicon.central_entity_hypothesis(&central.name));
    }

    let people = graph.count_of(EntityType::Person);
    let organizations = graph.count_of(EntityType::Organization);
    if people > 0 && organizations > 0 {
        hypotheses.push(lexicon.people_organizations_hypothesis(people, organizations));
    }

    log::debug!("Generated {} hypotheses for '{}'", hypotheses.len(), graph.name);
    hypotheses
}

/// Entity id that is the source of the most relations. Ties go to the id seen
/// first in relation order.
fn most_connected_source(graph: &KnowledgeGraph) -> Option<&str> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for relation in &graph.relations {
        let id = relation.source_entity_id.as_str();
        let count = counts.entry(id).or_insert(0);
        if *count == 0 {
            order.push(id);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for id in order {
        let count = counts[id];
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((id, count));
        }
    }
    best.map(|(id, _)| id)
}
