//! Data Transfer Objects - request/response types for the REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post as returned by `GET /api/posts`, including its stored fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_record_uses_camel_case_keys() {
        let record = PostRecord {
            id: Uuid::nil(),
            title: "Hello".into(),
            content: "World".into(),
            author_id: Uuid::nil(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("authorId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("author_id").is_none());
    }
}
