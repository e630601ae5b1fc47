//! Demonstration data: two small hand-built knowledge graphs.

use crate::error::Result;
use crate::graph::create_knowledge_graph;
use crate::models::{Entity, EntityType};
use crate::nlp::Language;
use crate::storage::StorageService;

/// (graph name, [(entity name, type)]) per language.
type GraphSeed = (&'static str, &'static [(&'static str, EntityType)]);

const ENGLISH_GRAPHS: [GraphSeed; 2] = [
    (
        "Tech Companies",
        &[
            ("Microsoft", EntityType::Organization),
            ("Windows 11", EntityType::Concept),
            ("Artificial Intelligence", EntityType::Concept),
            ("Seattle", EntityType::Location),
            ("Satya Nadella", EntityType::Person),
        ],
    ),
    (
        "Project SystemX",
        &[
            ("John Peterson", EntityType::Person),
            ("TechInnovations", EntityType::Organization),
            ("Risk Analysis", EntityType::Concept),
            ("Report Q4 2024", EntityType::Concept),
        ],
    ),
];

const RUSSIAN_GRAPHS: [GraphSeed; 2] = [
    (
        "Технологические компании",
        &[
            ("Microsoft", EntityType::Organization),
            ("Windows 11", EntityType::Concept),
            ("Искусственный интеллект", EntityType::Concept),
            ("Сиэтл", EntityType::Location),
            ("Сатья Наделла", EntityType::Person),
        ],
    ),
    (
        "Проект СистемаХ",
        &[
            ("Иван Петров", EntityType::Person),
            ("ТехноИнновации", EntityType::Organization),
            ("Анализ рисков", EntityType::Concept),
            ("Отчет Q4 2024", EntityType::Concept),
        ],
    ),
];

/// Save the demo graphs for `language` and return their ids.
pub fn seed(storage: &StorageService, language: Language) -> Result<Vec<String>> {
    let graphs = match language {
        Language::English => &ENGLISH_GRAPHS,
        Language::Russian => &RUSSIAN_GRAPHS,
    };

    let mut ids = Vec::with_capacity(graphs.len());
    for (name, entities) in graphs {
        let entities = entities
            .iter()
            .map(|(entity_name, entity_type)| Entity::new(*entity_name, *entity_type))
            .collect();
        let graph = create_knowledge_graph(name, entities, Vec::new())?;
        ids.push(storage.save_graph(graph));
    }

    log::info!("Demo data loaded: {} graphs", ids.len());
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserQuery;
    use crate::search::SearchService;
    use std::sync::Arc;

    #[test]
    fn test_seed_english() {
        let storage = StorageService::new();
        let ids = seed(&storage, Language::English).unwrap();
        assert_eq!(ids.len(), 2);
        let stats = storage.stats();
        assert_eq!(stats.graphs, 2);
        assert_eq!(stats.entities, 9);
        assert_eq!(storage.find_entities(Some(EntityType::Person)).len(), 2);
        let tech = storage.get_graph(&ids[0]).unwrap();
        assert_eq!(tech.name, "Tech Companies");
        assert!(tech.entities.iter().all(|e| e.confidence == 1.0));
    }

    #[test]
    fn test_seeded_search_finds_microsoft() {
        let storage = Arc::new(StorageService::new());
        seed(&storage, Language::English).unwrap();
        let service = SearchService::new(Arc::clone(&storage), Language::English);

        let results = service.search(&UserQuery::new("u", "Microsoft"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Tech Companies");

        // "company" is an organization keyword and both graphs hold an organization
        let results = service.search(&UserQuery::new("u", "company"));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Tech Companies");
    }

    #[test]
    fn test_seed_russian() {
        let storage = StorageService::new();
        seed(&storage, Language::Russian).unwrap();
        let names: Vec<_> = storage.list_graphs().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Технологические компании", "Проект СистемаХ"]);
    }
}
