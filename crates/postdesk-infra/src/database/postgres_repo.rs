//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::ActiveValue::Unchanged;
use sea_orm::{ActiveModelTrait, EntityTrait};
use uuid::Uuid;

use postdesk_core::domain::{Post, PostChanges};
use postdesk_core::error::RepoError;
use postdesk_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, RepoError> {
        tracing::debug!(post_id = %id, "Updating post");

        let existing = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;
        let created_at = existing.created_at;

        let mut post = Post::from(existing);
        post.apply(changes);

        let mut active: post::ActiveModel = post.into();
        active.id = Unchanged(id);
        active.created_at = Unchanged(created_at);

        // A concurrent delete between the read and the write surfaces as
        // RecordNotUpdated, which map_db_err reports as NotFound.
        let model = active.update(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }
}
