use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KmsError;

/// Kind of system a document was pulled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataSourceType {
    Sql,
    #[serde(rename = "NOSQL")]
    NoSql,
    File,
    Api,
    Stream,
}

/// Backing store a transformed record is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageType {
    Relational,
    #[default]
    Document,
    Graph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Analyst,
    #[default]
    User,
    Developer,
}

/// Category of an extracted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Person,
    Organization,
    Location,
    Date,
    #[default]
    Concept,
}

impl EntityType {
    /// All categories, in extraction order.
    pub const ALL: [EntityType; 5] = [
        EntityType::Person,
        EntityType::Organization,
        EntityType::Location,
        EntityType::Date,
        EntityType::Concept,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Person => "PERSON",
            EntityType::Organization => "ORGANIZATION",
            EntityType::Location => "LOCATION",
            EntityType::Date => "DATE",
            EntityType::Concept => "CONCEPT",
        }
    }

    /// Parse a category name case-insensitively (`person`, `PERSON`, ...).
    pub fn parse(name: &str) -> Option<Self> {
        let upper = name.trim().to_uppercase();
        Self::ALL.into_iter().find(|t| t.as_str() == upper)
    }
}

impl FromStr for EntityType {
    type Err = KmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
            KmsError::InvalidInput(format!(
                "unknown entity type '{}', expected one of {}",
                s.trim(),
                known.join(", ")
            ))
        })
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationType {
    IsA,
    PartOf,
    #[default]
    RelatedTo,
    LocatedIn,
}

/// Origin of a search hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultKind {
    Graph,
    Document,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultKind::Graph => f.write_str("GRAPH"),
            ResultKind::Document => f.write_str("DOCUMENT"),
        }
    }
}
