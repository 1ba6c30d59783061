use serde::{Deserialize, Serialize};

/// Post entity - the single resource this service manages.
///
/// The id is assigned by the storage backend (auto-increment column or
/// in-memory counter) and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub rating: Option<i32>,
}

/// The mutable fields of a post, used for both create and full-replace
/// update. `published` defaults to true when the request omits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub published: bool,
    pub rating: Option<i32>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            published: true,
            rating: None,
        }
    }

    /// Materialize a draft into a post with a storage-assigned id.
    pub fn into_post(self, id: i64) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            published: self.published,
            rating: self.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_defaults_to_published_without_rating() {
        let draft = PostDraft::new("t", "c");
        assert!(draft.published);
        assert_eq!(draft.rating, None);
    }

    #[test]
    fn into_post_keeps_all_fields() {
        let mut draft = PostDraft::new("title", "content");
        draft.rating = Some(4);
        let post = draft.into_post(7);
        assert_eq!(post.id, 7);
        assert_eq!(post.title, "title");
        assert_eq!(post.rating, Some(4));
    }
}
