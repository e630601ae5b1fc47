//! Knowledge records: entities, relations, graphs and ingested documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

use super::enums::{DataSourceType, EntityType, RelationType, StorageType};

/// Ordered extension map for free-form properties.
pub type Properties = BTreeMap<String, Value>;

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A semantic entity (node) extracted from text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Display name, e.g. the matched text span.
    pub name: String,
    pub entity_type: EntityType,
    /// Extraction confidence in [0, 1].
    pub confidence: f64,
    #[serde(default)]
    pub properties: Properties,
}

impl Entity {
    /// New entity with full confidence and no properties.
    pub fn new(name: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            entity_type,
            confidence: 1.0,
            properties: Properties::new(),
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// A directed relation (source --relation_type--> target) between two entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub id: String,
    pub source_entity_id: String,
    pub target_entity_id: String,
    pub relation_type: RelationType,
    /// Conventionally in [0, 1]; not enforced.
    pub strength: f64,
}

impl Relation {
    pub fn new(
        source_entity_id: impl Into<String>,
        target_entity_id: impl Into<String>,
        relation_type: RelationType,
        strength: f64,
    ) -> Self {
        Self {
            id: new_id(),
            source_entity_id: source_entity_id.into(),
            target_entity_id: target_entity_id.into(),
            relation_type,
            strength,
        }
    }
}

/// Named bundle of entities and the relations between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    pub id: String,
    pub name: String,
    pub entities: Vec<Entity>,
    pub relations: Vec<Relation>,
    pub created_at: DateTime<Utc>,
}

impl KnowledgeGraph {
    pub fn has_entity_type(&self, entity_type: EntityType) -> bool {
        self.entities.iter().any(|e| e.entity_type == entity_type)
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn count_of(&self, entity_type: EntityType) -> usize {
        self.entities
            .iter()
            .filter(|e| e.entity_type == entity_type)
            .count()
    }
}

/// A record as read from its source, before transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawData {
    pub id: String,
    pub source_type: DataSourceType,
    pub content: Value,
    #[serde(default)]
    pub metadata: Properties,
    pub timestamp: DateTime<Utc>,
}

impl RawData {
    pub fn new(source_type: DataSourceType, content: Value) -> Self {
        Self {
            id: new_id(),
            source_type,
            content,
            metadata: Properties::new(),
            timestamp: Utc::now(),
        }
    }
}

/// A record normalized for storage; searchable as a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformedData {
    pub id: String,
    pub source_id: Option<String>,
    pub content: Value,
    pub format: String,
    pub storage_type: StorageType,
    #[serde(default)]
    pub metadata: Properties,
}

impl TransformedData {
    pub fn new(content: Value) -> Self {
        Self {
            id: new_id(),
            source_id: None,
            content,
            format: "JSON".to_string(),
            storage_type: StorageType::Document,
            metadata: Properties::new(),
        }
    }

    /// Content rendered as text, the form document search matches against.
    pub fn content_text(&self) -> String {
        match &self.content {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
