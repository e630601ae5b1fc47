//! Search over stored knowledge graphs and documents.

mod relevance;

pub use relevance::{
    graph_relevance, ENTITY_MATCH_WEIGHT, NAME_MATCH_WEIGHT, ORGANIZATION_KEYWORD_WEIGHT,
    PERSON_KEYWORD_WEIGHT,
};

use std::cmp::Ordering;
use std::sync::Arc;

use crate::error::{KmsError, Result};
use crate::models::{ResultKind, SearchResult, UserQuery};
use crate::nlp::{Language, Lexicon};
use crate::storage::StorageService;
use uuid::Uuid;

/// Upper bound on the number of results a search returns.
pub const MAX_SEARCH_RESULTS: usize = 10;
/// Fixed relevance of a document whose content contains the query.
pub const DOCUMENT_RELEVANCE: f64 = 0.7;
/// Source tag of graph hits.
pub const GRAPH_SOURCE: &str = "knowledge_base";
/// Source tag of document hits.
pub const DOCUMENT_SOURCE: &str = "document_store";

const DEFAULT_SNIPPET_CHARS: usize = 100;
const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Reject queries that are empty after trimming.
pub fn validate_query(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(KmsError::InvalidInput("Query cannot be empty".to_string()));
    }
    Ok(())
}

/// Ranks stored graphs and documents against user queries.
pub struct SearchService {
    storage: Arc<StorageService>,
    lexicon: &'static Lexicon,
    snippet_chars: usize,
    suggestion_limit: usize,
}

impl SearchService {
    pub fn new(storage: Arc<StorageService>, language: Language) -> Self {
        Self {
            storage,
            lexicon: language.lexicon(),
            snippet_chars: DEFAULT_SNIPPET_CHARS,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Number of content characters shown in a document snippet.
    pub fn with_snippet_chars(mut self, snippet_chars: usize) -> Self {
        self.snippet_chars = snippet_chars;
        self
    }

    /// Minimum number of suggestions returned by [`Self::suggest_queries`].
    pub fn with_suggestion_limit(mut self, suggestion_limit: usize) -> Self {
        self.suggestion_limit = suggestion_limit;
        self
    }

    pub fn storage(&self) -> &Arc<StorageService> {
        &self.storage
    }

    /// Search graphs and documents for `query`.
    ///
    /// Graphs with a relevance above zero and documents whose content contains
    /// the query are merged (graphs first, each in storage order), stably
    /// sorted by descending relevance and truncated to [`MAX_SEARCH_RESULTS`].
    /// Equal relevance therefore keeps graphs ahead of documents and storage
    /// order within each. An empty query yields no results.
    pub fn search(&self, query: &UserQuery) -> Vec<SearchResult> {
        if let Err(e) = validate_query(&query.text) {
            log::warn!("Search skipped: {}", e);
            return Vec::new();
        }

        let start = std::time::Instant::now();
        let mut results = Vec::new();

        for graph in self.storage.list_graphs() {
            let relevance = graph_relevance(&graph, &query.text, self.lexicon);
            if relevance > 0.0 {
                results.push(SearchResult {
                    id: Uuid::new_v4().to_string(),
                    query_id: query.id.clone(),
                    title: graph.name.clone(),
                    snippet: self.lexicon.graph_snippet(graph.entities.len()),
                    relevance,
                    data_type: ResultKind::Graph,
                    source: GRAPH_SOURCE.to_string(),
                });
            }
        }

        let query_lower = query.text.to_lowercase();
        for document in self.storage.list_documents() {
            let content = document.content_text();
            if !content.to_lowercase().contains(&query_lower) {
                continue;
            }
            let short_id: String = document.id.chars().take(8).collect();
            let preview: String = content.chars().take(self.snippet_chars).collect();
            results.push(SearchResult {
                id: Uuid::new_v4().to_string(),
                query_id: query.id.clone(),
                title: self.lexicon.document_title(&short_id),
                snippet: format!("{}...", preview),
                relevance: DOCUMENT_RELEVANCE,
                data_type: ResultKind::Document,
                source: DOCUMENT_SOURCE.to_string(),
            });
        }

        let matched = results.len();
        results.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(Ordering::Equal)
        });
        results.truncate(MAX_SEARCH_RESULTS);

        log::info!(
            "Search '{}': {} matches, returning {} ({:?})",
            query.text,
            matched,
            results.len(),
            start.elapsed()
        );
        results
    }

    /// Canned suggestions containing `partial` (case-insensitive), padded with
    /// the leading canned suggestions up to the configured limit.
    pub fn suggest_queries(&self, partial: &str) -> Vec<String> {
        let suggestions = self.lexicon.suggestions;
        let partial_lower = partial.to_lowercase();

        let mut filtered: Vec<String> = suggestions
            .iter()
            .filter(|s| s.to_lowercase().contains(&partial_lower))
            .map(|s| s.to_string())
            .collect();

        if filtered.len() < self.suggestion_limit {
            let missing = self.suggestion_limit - filtered.len();
            filtered.extend(suggestions.iter().take(missing).map(|s| s.to_string()));
        }
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_relations, create_knowledge_graph};
    use crate::models::{Entity, EntityType, TransformedData, User, UserRole};
    use crate::nlp::EntityExtractor;
    use serde_json::json;

    fn service() -> SearchService {
        SearchService::new(Arc::new(StorageService::new()), Language::English)
    }

    fn query(text: &str) -> UserQuery {
        UserQuery::new("user-1", text)
    }

    fn save_graph(service: &SearchService, name: &str, entities: Vec<Entity>) -> String {
        let graph = create_knowledge_graph(name, entities, Vec::new()).unwrap();
        service.storage().save_graph(graph)
    }

    fn assert_sorted(results: &[SearchResult]) {
        for pair in results.windows(2) {
            assert!(pair[0].relevance >= pair[1].relevance);
        }
    }

    #[test]
    fn test_end_to_end_pipeline() {
        let service = service();
        let user = User::new("analyst_1", UserRole::Analyst);
        let text = "Company Microsoft in Seattle presented Windows 11 12.15.2024";

        let entities = EntityExtractor::new(Language::English).extract(text);
        assert!(entities.iter().any(|e| e.entity_type == EntityType::Organization));
        assert!(entities.iter().any(|e| e.entity_type == EntityType::Location));
        assert!(entities.iter().any(|e| e.entity_type == EntityType::Date));

        let k = entities.len();
        let relations = build_relations(&entities, text);
        assert_eq!(relations.len(), k * (k - 1));

        let mut entities = entities;
        entities.push(Entity::new("Microsoft", EntityType::Organization));
        let graph = create_knowledge_graph("Tech Graph", entities, Vec::new()).unwrap();
        let graph_id = service.storage().save_graph(graph);

        let q = UserQuery::new(&user.id, "Microsoft");
        let results = service.search(&q);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Tech Graph");
        assert!(results[0].relevance >= ENTITY_MATCH_WEIGHT);
        assert_eq!(results[0].query_id, q.id);
        assert_eq!(results[0].data_type, ResultKind::Graph);
        assert_eq!(results[0].source, GRAPH_SOURCE);
        assert_eq!(
            results[0].snippet,
            format!("Knowledge graph with {} entities", k + 1)
        );
        assert!(service.storage().get_graph(&graph_id).is_some());
    }

    #[test]
    fn test_search_excludes_zero_relevance() {
        let service = service();
        save_graph(&service, "Tech Graph", vec![Entity::new("Microsoft", EntityType::Organization)]);
        assert!(service.search(&query("banana")).is_empty());
    }

    #[test]
    fn test_search_documents() {
        let service = service();
        let doc = TransformedData::new(json!({"sample": "data", "value": 42}));
        let doc_id = service.storage().save_document(doc);

        let results = service.search(&query("SAMPLE"));
        assert_eq!(results.len(), 1);
        let hit = &results[0];
        assert_eq!(hit.relevance, DOCUMENT_RELEVANCE);
        assert_eq!(hit.data_type, ResultKind::Document);
        assert_eq!(hit.source, DOCUMENT_SOURCE);
        assert_eq!(hit.title, format!("Document {}", &doc_id[..8]));
        assert_eq!(hit.snippet, "{\"sample\":\"data\",\"value\":42}...");
    }

    #[test]
    fn test_document_snippet_truncated() {
        let service = service().with_snippet_chars(5);
        service
            .storage()
            .save_document(TransformedData::new(json!("needle in a haystack")));
        let results = service.search(&query("needle"));
        assert_eq!(results[0].snippet, "needl...");
    }

    #[test]
    fn test_search_sorted_and_truncated() {
        let service = service();
        for i in 0..12 {
            service
                .storage()
                .save_document(TransformedData::new(json!(format!("alpha note {}", i))));
        }
        save_graph(&service, "alpha graph", vec![]);
        save_graph(
            &service,
            "alpha team",
            vec![Entity::new("alpha lead", EntityType::Person)],
        );

        let results = service.search(&query("alpha"));
        assert_eq!(results.len(), MAX_SEARCH_RESULTS);
        assert_sorted(&results);
        assert_eq!(results[0].title, "alpha team");
        assert!((results[0].relevance - 0.8).abs() < 1e-9);
        assert_eq!(results[1].relevance, DOCUMENT_RELEVANCE);
        assert!(results.iter().all(|r| r.title != "alpha graph"));
    }

    #[test]
    fn test_tie_break_graphs_before_documents() {
        let service = service();
        let first_doc = service
            .storage()
            .save_document(TransformedData::new(json!("company filings")));
        let second_doc = service
            .storage()
            .save_document(TransformedData::new(json!("company news")));
        // name match 0.5 + organization keyword 0.2 = 0.7, same as a document hit
        save_graph(
            &service,
            "Company Directory",
            vec![Entity::new("Acme", EntityType::Organization)],
        );

        let results = service.search(&query("company"));
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| (r.relevance - 0.7).abs() < 1e-9));
        assert_eq!(results[0].title, "Company Directory");
        assert_eq!(results[1].title, format!("Document {}", &first_doc[..8]));
        assert_eq!(results[2].title, format!("Document {}", &second_doc[..8]));
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let service = service();
        save_graph(&service, "Tech Graph", vec![]);
        assert!(service.search(&query("   ")).is_empty());
        assert!(matches!(validate_query(""), Err(KmsError::InvalidInput(_))));
        assert!(validate_query("Microsoft").is_ok());
    }

    #[test]
    fn test_suggest_queries() {
        let service = service();
        assert_eq!(
            service.suggest_queries("RISK"),
            vec![
                "Risk analysis".to_string(),
                "Find reports on the project".to_string(),
                "Show links between organizations".to_string(),
            ]
        );
        assert_eq!(service.suggest_queries("").len(), 5);
        assert_eq!(
            service.suggest_queries("zzz"),
            vec![
                "Find reports on the project".to_string(),
                "Show links between organizations".to_string(),
                "Risk analysis".to_string(),
            ]
        );
    }

    #[test]
    fn test_suggest_queries_custom_limit() {
        let service = service().with_suggestion_limit(1);
        assert_eq!(service.suggest_queries("graph"), vec!["Knowledge graph by topic".to_string()]);
        assert_eq!(service.suggest_queries("zzz").len(), 1);
    }
}
