pub mod config;
pub mod error;
pub mod models;
pub mod nlp;
pub mod graph;
pub mod storage;
pub mod search;
pub mod ingest;
pub mod demo;

pub use config::Config;
pub use error::{KmsError, Result};
pub use graph::{build_relations, create_knowledge_graph, generate_hypotheses};
pub use nlp::{analyze_sentiment, EntityExtractor, Language};
pub use search::SearchService;
pub use storage::StorageService;
