//! Knowledge graph module: relation building, graph assembly and hypotheses.
//!
//! Relations are derived from entity co-occurrence in the source text; graphs
//! are validated so that every relation endpoint is one of the graph's own
//! entities.

mod builder;
mod hypothesis;

pub use builder::{build_relations, create_knowledge_graph, RELATED_TO_STRENGTH};
pub use hypothesis::generate_hypotheses;
