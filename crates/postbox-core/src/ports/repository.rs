use async_trait::async_trait;

use crate::domain::{Post, PostDraft};
use crate::error::RepoError;

/// Post repository - the storage contract both backends fulfill.
///
/// One service sits behind this trait with two interchangeable
/// implementations (relational table, in-memory list), selected by
/// configuration at startup.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in storage order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Persist a new post, assigning a fresh unique id.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Find a post by its exact id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// The most recently created post (highest id), or `None` when the
    /// collection is empty.
    async fn latest(&self) -> Result<Option<Post>, RepoError>;

    /// Replace all mutable fields of the post with the given id.
    /// Returns `None` when no such post exists; never creates one.
    async fn update(&self, id: i64, draft: PostDraft) -> Result<Option<Post>, RepoError>;

    /// Remove the post with the given id.
    /// Fails with `RepoError::NotFound` when no such post exists.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}
