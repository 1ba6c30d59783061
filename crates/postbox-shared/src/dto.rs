//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use postbox_core::domain::PostDraft;

/// Request body for creating or fully replacing a post.
///
/// `published` defaults to true when omitted; `rating` stays optional and
/// intentionally unbounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostBody {
    pub title: String,
    pub content: String,
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    pub rating: Option<i32>,
}

fn default_published() -> bool {
    true
}

impl From<PostBody> for PostDraft {
    fn from(body: PostBody) -> Self {
        Self {
            title: body.title,
            content: body.content,
            published: body.published,
            rating: body.rating,
        }
    }
}
