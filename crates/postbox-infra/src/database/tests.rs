#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;
    use postbox_core::domain::PostDraft;
    use postbox_core::error::RepoError;
    use postbox_core::ports::PostRepository;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn sample_model(id: i64) -> post::Model {
        post::Model {
            id,
            title: "Test Post".to_owned(),
            content: "Content".to_owned(),
            published: true,
            rating: None,
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(1)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let post = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.title, "Test Post");
        assert!(post.published);
    }

    #[tokio::test]
    async fn test_create_returns_assigned_id() {
        // Postgres inserts use RETURNING, so the mock answers with a query result
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(42)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let post = repo
            .create(PostDraft::new("Test Post", "Content"))
            .await
            .unwrap();
        assert_eq!(post.id, 42);
    }

    #[tokio::test]
    async fn test_update_missing_post_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo
            .update(999, PostDraft::new("t", "c"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.delete(999).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }
}
