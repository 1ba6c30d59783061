//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub published: bool,
    pub rating: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for postbox_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            published: model.published,
            rating: model.rating,
        }
    }
}

/// Conversion from a draft to an insertable ActiveModel; the database
/// assigns the id.
impl From<postbox_core::domain::PostDraft> for ActiveModel {
    fn from(draft: postbox_core::domain::PostDraft) -> Self {
        Self {
            id: NotSet,
            title: Set(draft.title),
            content: Set(draft.content),
            published: Set(draft.published),
            rating: Set(draft.rating),
        }
    }
}
