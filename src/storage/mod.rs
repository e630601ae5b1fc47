//! In-memory storage for knowledge graphs and documents.
//!
//! Records are kept in insertion order behind one coarse mutex, so the service
//! can be shared across threads through an `Arc`. There is no update or delete;
//! saving a record under an id that is already stored replaces it in place.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::models::{Entity, EntityType, KnowledgeGraph, TransformedData};

/// Insertion-ordered records with an id index.
struct Slots<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Slots<T> {
    fn insert(&mut self, id: String, item: T) {
        match self.index.get(&id) {
            Some(&pos) => self.items[pos] = item,
            None => {
                self.index.insert(id, self.items.len());
                self.items.push(item);
            }
        }
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }
}

#[derive(Default)]
struct Store {
    graphs: Slots<KnowledgeGraph>,
    documents: Slots<TransformedData>,
}

/// Counts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StorageStats {
    pub graphs: usize,
    pub entities: usize,
    pub documents: usize,
}

/// Thread-safe store for graphs and documents
#[derive(Default)]
pub struct StorageService {
    store: Mutex<Store>,
}

impl StorageService {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // Every write is a single slot assignment, so a poisoned store is still consistent.
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Save a graph and return its id.
    pub fn save_graph(&self, graph: KnowledgeGraph) -> String {
        let id = graph.id.clone();
        log::info!("Saved graph '{}' ({})", graph.name, id);
        self.lock().graphs.insert(id.clone(), graph);
        id
    }

    pub fn get_graph(&self, id: &str) -> Option<KnowledgeGraph> {
        self.lock().graphs.get(id).cloned()
    }

    /// All graphs in insertion order.
    pub fn list_graphs(&self) -> Vec<KnowledgeGraph> {
        self.lock().graphs.items.clone()
    }

    /// Entities of every stored graph, optionally restricted to one category.
    pub fn find_entities(&self, entity_type: Option<EntityType>) -> Vec<Entity> {
        self.lock()
            .graphs
            .items
            .iter()
            .flat_map(|g| g.entities.iter())
            .filter(|e| entity_type.map_or(true, |t| e.entity_type == t))
            .cloned()
            .collect()
    }

    /// Save a document and return its id.
    pub fn save_document(&self, document: TransformedData) -> String {
        let id = document.id.clone();
        log::debug!("Saved document {}", id);
        self.lock().documents.insert(id.clone(), document);
        id
    }

    pub fn get_document(&self, id: &str) -> Option<TransformedData> {
        self.lock().documents.get(id).cloned()
    }

    /// All documents in insertion order.
    pub fn list_documents(&self) -> Vec<TransformedData> {
        self.lock().documents.items.clone()
    }

    pub fn stats(&self) -> StorageStats {
        let store = self.lock();
        StorageStats {
            graphs: store.graphs.items.len(),
            entities: store.graphs.items.iter().map(|g| g.entities.len()).sum(),
            documents: store.documents.items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::create_knowledge_graph;
    use serde_json::json;
    use std::sync::Arc;
    use std::thread;

    fn sample_graph(name: &str) -> KnowledgeGraph {
        let entities = vec![
            Entity::new("Microsoft", EntityType::Organization),
            Entity::new("Seattle", EntityType::Location),
            Entity::new("Satya Nadella", EntityType::Person),
        ];
        create_knowledge_graph(name, entities, Vec::new()).unwrap()
    }

    #[test]
    fn test_save_and_get_graph() {
        let storage = StorageService::new();
        let graph = sample_graph("Tech");
        let id = storage.save_graph(graph.clone());
        assert_eq!(id, graph.id);
        assert_eq!(storage.get_graph(&id), Some(graph));
    }

    #[test]
    fn test_get_unknown_graph() {
        let storage = StorageService::new();
        assert!(storage.get_graph("no-such-id").is_none());
        assert!(storage.get_document("no-such-id").is_none());
    }

    #[test]
    fn test_list_graphs_insertion_order() {
        let storage = StorageService::new();
        for name in ["first", "second", "third"] {
            storage.save_graph(sample_graph(name));
        }
        let names: Vec<_> = storage.list_graphs().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_resave_same_id_keeps_slot() {
        let storage = StorageService::new();
        let first = sample_graph("first");
        storage.save_graph(first.clone());
        storage.save_graph(sample_graph("second"));

        let mut renamed = first.clone();
        renamed.name = "first again".to_string();
        storage.save_graph(renamed);

        let names: Vec<_> = storage.list_graphs().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["first again", "second"]);
        assert_eq!(storage.stats().graphs, 2);
    }

    #[test]
    fn test_find_entities_filter() {
        let storage = StorageService::new();
        storage.save_graph(sample_graph("a"));
        storage.save_graph(sample_graph("b"));

        assert_eq!(storage.find_entities(None).len(), 6);
        let people = storage.find_entities(Some(EntityType::Person));
        assert_eq!(people.len(), 2);
        assert!(people.iter().all(|e| e.name == "Satya Nadella"));
        assert!(storage.find_entities(Some(EntityType::Date)).is_empty());
    }

    #[test]
    fn test_documents_and_stats() {
        let storage = StorageService::new();
        storage.save_graph(sample_graph("a"));
        let doc = TransformedData::new(json!({"sample": "data", "value": 42}));
        let id = storage.save_document(doc.clone());
        assert_eq!(storage.get_document(&id), Some(doc));
        assert_eq!(storage.list_documents().len(), 1);
        assert_eq!(
            storage.stats(),
            StorageStats {
                graphs: 1,
                entities: 3,
                documents: 1
            }
        );
    }

    #[test]
    fn test_concurrent_saves() {
        let storage = Arc::new(StorageService::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let storage = Arc::clone(&storage);
                thread::spawn(move || {
                    storage.save_graph(sample_graph(&format!("graph-{}", i)));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(storage.list_graphs().len(), 8);
        assert_eq!(storage.find_entities(None).len(), 24);
    }
}
