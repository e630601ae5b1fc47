//! Relation building and knowledge graph assembly.

use chrono::Utc;
use std::collections::HashSet;
use uuid::Uuid;

use crate::error::{KmsError, Result};
use crate::models::{Entity, KnowledgeGraph, Relation, RelationType};

/// Strength of every co-occurrence relation.
pub const RELATED_TO_STRENGTH: f64 = 0.8;

/// Build RELATED_TO relations for every ordered pair of distinct entities whose
/// names both occur verbatim (case-sensitive) in `text`.
///
/// Entities extracted from `text` nearly always satisfy this, so the result is
/// an all-pairs clique: n entities give n * (n - 1) relations, source-major.
pub fn build_relations(entities: &[Entity], text: &str) -> Vec<Relation> {
    let present: Vec<bool> = entities.iter().map(|e| text.contains(&e.name)).collect();
    let mut relations = Vec::new();

    for (i, source) in entities.iter().enumerate() {
        for (j, target) in entities.iter().enumerate() {
            if i == j || !(present[i] && present[j]) {
                continue;
            }
            relations.push(Relation::new(
                source.id.as_str(),
                target.id.as_str(),
                RelationType::RelatedTo,
                RELATED_TO_STRENGTH,
            ));
        }
    }

    log::info!("Built {} relations", relations.len());
    relations
}

/// Assemble a knowledge graph.
///
/// Every relation endpoint must name an entity of this graph; a dangling
/// endpoint is rejected with [`KmsError::InvalidInput`].
pub fn create_knowledge_graph(
    name: &str,
    entities: Vec<Entity>,
    relations: Vec<Relation>,
) -> Result<KnowledgeGraph> {
    let ids: HashSet<&str> = entities.iter().map(|e| e.id.as_str()).collect();

    for relation in &relations {
        for endpoint in [&relation.source_entity_id, &relation.target_entity_id] {
            if !ids.contains(endpoint.as_str()) {
                return Err(KmsError::InvalidInput(format!(
                    "relation {} references entity {} which is not in graph '{}'",
                    relation.id, endpoint, name
                )));
            }
        }
    }

    let graph = KnowledgeGraph {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        entities,
        relations,
        created_at: Utc::now(),
    };

    log::info!(
        "Created knowledge graph '{}' ({} entities, {} relations)",
        graph.name,
        graph.entities.len(),
        graph.relations.len()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityType;
    use crate::nlp::{EntityExtractor, Language};

    #[test]
    fn test_build_relations_clique() {
        let text = "Company Microsoft in Seattle presented Windows 11 12.15.2024";
        let entities = EntityExtractor::new(Language::English).extract(text);
        let n = entities.len();
        let relations = build_relations(&entities, text);
        assert_eq!(relations.len(), n * (n - 1));
        assert!(relations.iter().all(|r| r.strength == RELATED_TO_STRENGTH));
        assert!(relations
            .iter()
            .all(|r| r.relation_type == RelationType::RelatedTo));
        assert!(relations
            .iter()
            .all(|r| r.source_entity_id != r.target_entity_id));
    }

    #[test]
    fn test_build_relations_order() {
        let text = "Alice met Bob";
        let a = Entity::new("Alice", EntityType::Person);
        let b = Entity::new("Bob", EntityType::Person);
        let relations = build_relations(&[a.clone(), b.clone()], text);
        assert_eq!(relations.len(), 2);
        assert_eq!(relations[0].source_entity_id, a.id);
        assert_eq!(relations[0].target_entity_id, b.id);
        assert_eq!(relations[1].source_entity_id, b.id);
        assert_eq!(relations[1].target_entity_id, a.id);
    }

    #[test]
    fn test_build_relations_skips_names_absent_from_text() {
        // Keyword matched in lowercase; the capitalized concept name is not verbatim in the text.
        let text = "the project is late";
        let concept = Entity::new("Project", EntityType::Concept);
        let other = Entity::new("late", EntityType::Concept);
        let third = Entity::new("the", EntityType::Concept);
        let relations = build_relations(&[concept, other, third], text);
        assert_eq!(relations.len(), 2);
    }

    #[test]
    fn test_build_relations_empty() {
        assert!(build_relations(&[], "anything").is_empty());
        let single = Entity::new("Solo", EntityType::Person);
        assert!(build_relations(&[single], "Solo").is_empty());
    }

    #[test]
    fn test_create_graph_empty() {
        let graph = create_knowledge_graph("Empty", Vec::new(), Vec::new()).unwrap();
        assert_eq!(graph.name, "Empty");
        assert!(graph.entities.is_empty());
        assert!(graph.relations.is_empty());
        assert_eq!(graph.id.len(), 36);
    }

    #[test]
    fn test_create_graph_keeps_order() {
        let text = "Alice met Bob";
        let entities = vec![
            Entity::new("Alice", EntityType::Person),
            Entity::new("Bob", EntityType::Person),
        ];
        let relations = build_relations(&entities, text);
        let graph = create_knowledge_graph("People", entities.clone(), relations.clone()).unwrap();
        assert_eq!(graph.entities, entities);
        assert_eq!(graph.relations, relations);
    }

    #[test]
    fn test_create_graph_rejects_dangling_relation() {
        let alice = Entity::new("Alice", EntityType::Person);
        let relation = Relation::new(alice.id.as_str(), "missing", RelationType::RelatedTo, 0.8);
        let err = create_knowledge_graph("Broken", vec![alice], vec![relation]).unwrap_err();
        assert!(matches!(err, KmsError::InvalidInput(_)));
        assert!(err.to_string().contains("missing"));
    }
}
