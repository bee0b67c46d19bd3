//! The post store - sole owner of the persisted collection.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::domain::{Post, PostDraft};
use crate::error::StoreError;
use crate::ports::{StorageBackend, StorageError};

/// Default persistence key for the post collection.
pub const DEFAULT_STORE_KEY: &str = "markblog-posts";

/// CRUD service over one serialized post collection.
///
/// Every mutation is a full load, in-memory modify, full save cycle against
/// a single key, so the persisted value is always either the old snapshot or
/// the new one. There is no locking between independent store instances
/// sharing a backend: the later save wins outright. That is the accepted
/// single-writer model; callers needing multi-session safety must layer it
/// on top.
pub struct PostStore {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl PostStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_key(backend, DEFAULT_STORE_KEY)
    }

    pub fn with_key(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Current collection, most-recent-first.
    ///
    /// An absent key is an empty collection. A present value that fails to
    /// parse is treated as corrupt: the store recovers with an empty
    /// collection and logs a warning so the caller can tell the user that
    /// prior data may have been lost.
    pub async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let Some(raw) = self.backend.load(&self.key).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(posts) => Ok(posts),
            Err(err) => {
                warn!(
                    key = %self.key,
                    %err,
                    "stored collection is corrupt, recovering with an empty collection"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Look up one post by id.
    pub async fn get(&self, id: &str) -> Result<Option<Post>, StoreError> {
        Ok(self.list().await?.into_iter().find(|post| post.id == id))
    }

    /// Publish a new post at the head of the collection.
    ///
    /// Assigns a fresh id and `created_at`, computes the derived fields, and
    /// persists the whole collection before returning the created post.
    pub async fn create(&self, draft: &PostDraft) -> Result<Post, StoreError> {
        validate(draft)?;
        let mut posts = self.list().await?;
        let created_at = Utc::now();
        let id = next_id(&posts, created_at);
        let post = Post::from_draft(id, created_at, draft);
        posts.insert(0, post.clone());
        self.persist(&posts).await?;
        debug!(id = %post.id, "created post");
        Ok(post)
    }

    /// Replace an existing post in place.
    ///
    /// Derived fields and tags are recomputed from the draft; `created_at`
    /// and the post's position in the collection are preserved. Fails with
    /// [`StoreError::NotFound`] if the id is unknown, leaving the persisted
    /// collection untouched.
    pub async fn update(&self, id: &str, draft: &PostDraft) -> Result<Post, StoreError> {
        let mut posts = self.list().await?;
        let index = posts
            .iter()
            .position(|post| post.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_owned() })?;
        validate(draft)?;
        let post = Post::from_draft(id.to_owned(), posts[index].created_at, draft);
        posts[index] = post.clone();
        self.persist(&posts).await?;
        debug!(id = %post.id, "updated post");
        Ok(post)
    }

    /// Remove a post. Returns whether a removal occurred; deleting an
    /// unknown id is a no-op returning `false`, not an error.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut posts = self.list().await?;
        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == before {
            return Ok(false);
        }
        self.persist(&posts).await?;
        debug!(%id, "deleted post");
        Ok(true)
    }

    async fn persist(&self, posts: &[Post]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(posts)
            .map_err(|err| StorageError::Backend(err.to_string()))?;
        self.backend.save(&self.key, &raw).await?;
        Ok(())
    }
}

fn validate(draft: &PostDraft) -> Result<(), StoreError> {
    if draft.title.trim().is_empty() {
        return Err(StoreError::Validation("title must not be empty".into()));
    }
    if draft.content.trim().is_empty() {
        return Err(StoreError::Validation("content must not be empty".into()));
    }
    if draft.author.trim().is_empty() {
        return Err(StoreError::Validation("author must not be empty".into()));
    }
    Ok(())
}

/// Nanosecond creation timestamp as a decimal string, bumped past any id
/// already in the collection so ids stay unique even for back-to-back
/// creates on a coarse clock.
fn next_id(posts: &[Post], created_at: DateTime<Utc>) -> String {
    let mut stamp = created_at
        .timestamp_nanos_opt()
        .unwrap_or_else(|| created_at.timestamp_millis());
    let mut id = stamp.to_string();
    while posts.iter().any(|post| post.id == id) {
        stamp += 1;
        id = stamp.to_string();
    }
    id
}
