use crate::models::Notification;
use sqlx::PgPool;
use uuid::Uuid;

/// All notifications for a recipient, newest first.
pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Notification>, sqlx::Error> {
    sqlx::query_as::<_, Notification>(
        r#"
        SELECT id, recipient_id, actor_id, notification_type, target_id, is_read, created_at
        FROM notifications
        WHERE recipient_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Mark a notification as read. Recipient-scoped, so a user cannot touch
/// another user's notifications; returns None when no row matched.
pub async fn mark_read(
    pool: &PgPool,
    notification_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Notification>, sqlx::Error> {
    sqlx::query_as::<_, Notification>(
        r#"
        UPDATE notifications SET is_read = TRUE
        WHERE id = $1 AND recipient_id = $2
        RETURNING id, recipient_id, actor_id, notification_type, target_id, is_read, created_at
        "#,
    )
    .bind(notification_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Delete a notification. Recipient-scoped; returns whether a row was removed.
pub async fn delete(
    pool: &PgPool,
    notification_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM notifications
        WHERE id = $1 AND recipient_id = $2
        "#,
    )
    .bind(notification_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
