use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new post. The media URL (if any) has already been resolved by
/// the media host.
pub async fn create_post(
    pool: &PgPool,
    owner_id: Uuid,
    caption: Option<&str>,
    media_url: Option<&str>,
    media_kind: Option<&str>,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (owner_id, caption, media_url, media_kind)
        VALUES ($1, $2, $3, $4)
        RETURNING id, owner_id, caption, media_url, media_kind, likes, comments, created_at
        "#,
    )
    .bind(owner_id)
    .bind(caption)
    .bind(media_url)
    .bind(media_kind)
    .fetch_one(pool)
    .await
}

pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, owner_id, caption, media_url, media_kind, likes, comments, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await
}

/// All posts, newest first.
pub async fn list_posts(pool: &PgPool, limit: i64) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, owner_id, caption, media_url, media_kind, likes, comments, created_at
        FROM posts
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit.clamp(1, 100))
    .fetch_all(pool)
    .await
}
