use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::derive;

/// Post entity - one published story.
///
/// Serialized with camelCase field names so the persisted collection keeps
/// the documented on-disk layout (`createdAt`, `readingTime`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub reading_time: u32,
}

impl Post {
    /// Build a post from a validated draft, computing every derived field.
    ///
    /// `excerpt`, `reading_time`, and `tags` are always recomputed here so
    /// they can never go stale relative to `content`; `id` and `created_at`
    /// are supplied by the store (fresh on create, carried over on update).
    pub fn from_draft(id: String, created_at: DateTime<Utc>, draft: &PostDraft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_owned(),
            content: draft.content.trim().to_owned(),
            excerpt: derive::excerpt(&draft.content),
            author: draft.author.trim().to_owned(),
            created_at,
            tags: derive::normalize_tags(&draft.tags),
            reading_time: derive::reading_time(&draft.content),
        }
    }
}

/// Author-supplied input for create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    /// Comma-separated tag list, exactly as typed in the editor.
    pub tags: String,
}
