//! Users, their queries and the results returned to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::data::{new_id, Properties};
use super::enums::{ResultKind, UserRole};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: UserRole,
    #[serde(default)]
    pub preferences: Properties,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: new_id(),
            username: username.into(),
            role,
            preferences: Properties::new(),
            created_at: Utc::now(),
        }
    }
}

/// A free-text query issued by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserQuery {
    pub id: String,
    pub user_id: String,
    pub text: String,
    /// Query type tag, `SEARCH` unless set otherwise.
    pub query_type: String,
    #[serde(default)]
    pub parameters: Properties,
    pub timestamp: DateTime<Utc>,
}

impl UserQuery {
    pub fn new(user_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            user_id: user_id.into(),
            text: text.into(),
            query_type: "SEARCH".to_string(),
            parameters: Properties::new(),
            timestamp: Utc::now(),
        }
    }
}

/// A ranked hit for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub query_id: String,
    pub title: String,
    pub snippet: String,
    /// Relevance in [0, 1].
    pub relevance: f64,
    pub data_type: ResultKind,
    /// `knowledge_base` or `document_store`.
    pub source: String,
}
