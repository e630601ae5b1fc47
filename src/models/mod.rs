//! Plain data records shared by every service.

mod data;
mod enums;
mod user;

pub use data::{Entity, KnowledgeGraph, Properties, RawData, Relation, TransformedData};
pub use enums::{DataSourceType, EntityType, RelationType, ResultKind, StorageType, UserRole};
pub use user::{SearchResult, User, UserQuery};
