//! In-memory storage backend - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postbox_core::domain::{Post, PostDraft};
use postbox_core::error::RepoError;
use postbox_core::ports::PostRepository;

struct MemoryStore {
    posts: Vec<Post>,
    next_id: i64,
}

/// In-memory post repository over a vec with an async RwLock.
///
/// Ids grow monotonically and are never reused, so "latest" is simply the
/// last element. Note: data is lost on process restart.
pub struct MemoryPostRepository {
    store: RwLock<MemoryStore>,
}

impl MemoryPostRepository {
    /// An empty repository.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(MemoryStore {
                posts: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// A repository pre-populated with the two fixture posts this service
    /// has always shipped with.
    pub fn seeded() -> Self {
        Self {
            store: RwLock::new(MemoryStore {
                posts: vec![
                    Post {
                        id: 1,
                        title: "title of post 1".to_string(),
                        content: "content of post 1".to_string(),
                        published: true,
                        rating: None,
                    },
                    Post {
                        id: 2,
                        title: "favourite foods".to_string(),
                        content: "I like pizza".to_string(),
                        published: true,
                        rating: None,
                    },
                ],
                next_id: 3,
            }),
        }
    }
}

impl Default for MemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.clone())
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let post = draft.into_post(id);
        store.posts.push(post.clone());

        tracing::debug!(post_id = id, "Created post");
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn latest(&self) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.last().cloned())
    }

    async fn update(&self, id: i64, draft: PostDraft) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;

        match store.posts.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                *existing = draft.into_post(id);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut store = self.store.write().await;

        match store.posts.iter().position(|p| p.id == id) {
            Some(index) => {
                store.posts.remove(index);
                Ok(())
            }
            None => Err(RepoError::NotFound),
        }
    }
}
