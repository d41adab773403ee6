//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub brand: String,
    pub platform: String,
    pub due_date: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Double")]
    pub payment: f64,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for postdesk_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            brand: model.brand,
            platform: model.platform,
            due_date: model.due_date.into(),
            payment: model.payment,
            status: model.status,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<postdesk_core::domain::Post> for ActiveModel {
    fn from(post: postdesk_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            brand: Set(post.brand),
            platform: Set(post.platform),
            due_date: Set(post.due_date.into()),
            payment: Set(post.payment),
            status: Set(post.status),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
