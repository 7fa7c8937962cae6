use crate::models::Reel;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn create_reel(
    pool: &PgPool,
    owner_id: Uuid,
    caption: Option<&str>,
    video_url: &str,
) -> Result<Reel, sqlx::Error> {
    sqlx::query_as::<_, Reel>(
        r#"
        INSERT INTO reels (owner_id, caption, video_url)
        VALUES ($1, $2, $3)
        RETURNING id, owner_id, caption, video_url, likes, comments, created_at
        "#,
    )
    .bind(owner_id)
    .bind(caption)
    .bind(video_url)
    .fetch_one(pool)
    .await
}

pub async fn find_reel_by_id(pool: &PgPool, reel_id: Uuid) -> Result<Option<Reel>, sqlx::Error> {
    sqlx::query_as::<_, Reel>(
        r#"
        SELECT id, owner_id, caption, video_url, likes, comments, created_at
        FROM reels
        WHERE id = $1
        "#,
    )
    .bind(reel_id)
    .fetch_optional(pool)
    .await
}

pub async fn list_reels(pool: &PgPool, limit: i64) -> Result<Vec<Reel>, sqlx::Error> {
    sqlx::query_as::<_, Reel>(
        r#"
        SELECT id, owner_id, caption, video_url, likes, comments, created_at
        FROM reels
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit.clamp(1, 100))
    .fetch_all(pool)
    .await
}
