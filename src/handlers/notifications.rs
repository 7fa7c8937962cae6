/// Notification handlers - list, mark read, delete
use crate::db::notification_repo;
use crate::error::{AppError, Result};
use crate::middleware::AuthenticatedUser;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

/// Get all notifications for the authenticated user, newest first
pub async fn list_notifications(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
) -> Result<HttpResponse> {
    let notifications = notification_repo::list_for_user(&pool, user.0).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "count": notifications.len(),
        "notifications": notifications,
    })))
}

/// Mark a notification as read
pub async fn mark_notification_read(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    notification_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let notification = notification_repo::mark_read(&pool, *notification_id, user.0)
        .await?
        .ok_or_else(|| AppError::NotFound("notification not found".into()))?;

    Ok(HttpResponse::Ok().json(notification))
}

/// Delete a notification
pub async fn delete_notification(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    notification_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let deleted = notification_repo::delete(&pool, *notification_id, user.0).await?;
    if !deleted {
        return Err(AppError::NotFound("notification not found".into()));
    }

    Ok(HttpResponse::NoContent().finish())
}
