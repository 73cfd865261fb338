use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a content item attributed to one author.
///
/// `author_id` is not checked against the authors store on write; a dangling
/// reference simply resolves to no author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post.
    pub fn new(author_id: Uuid, title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            content,
            created_at: Utc::now(),
        }
    }
}
