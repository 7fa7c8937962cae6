use crate::models::User;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn create_user(pool: &PgPool, username: &str) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username)
        VALUES ($1)
        RETURNING id, username, followers, following, created_at
        "#,
    )
    .bind(username)
    .fetch_one(pool)
    .await
}

pub async fn find_user_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, followers, following, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
