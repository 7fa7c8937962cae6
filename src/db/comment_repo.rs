use crate::models::Comment;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a comment on a post or reel. The parent's `comments` mirror is
/// maintained separately by the fan-out service.
pub async fn create_comment(
    pool: &PgPool,
    author_id: Uuid,
    parent_id: Uuid,
    parent_kind: &str,
    body: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (author_id, parent_id, parent_kind, body)
        VALUES ($1, $2, $3, $4)
        RETURNING id, author_id, parent_id, parent_kind, body, created_at
        "#,
    )
    .bind(author_id)
    .bind(parent_id)
    .bind(parent_kind)
    .bind(body)
    .fetch_one(pool)
    .await
}

/// Comments under a post or reel, newest first.
pub async fn list_comments(
    pool: &PgPool,
    parent_id: Uuid,
    limit: i64,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, author_id, parent_id, parent_kind, body, created_at
        FROM comments
        WHERE parent_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(parent_id)
    .bind(limit.clamp(1, 100))
    .fetch_all(pool)
    .await
}
