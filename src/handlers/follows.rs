/// Follow handlers - bidirectional mirror transitions
use crate::error::Result;
use crate::middleware::AuthenticatedUser;
use crate::services::FollowService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

/// Follow a user
pub async fn follow_user(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    target_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let counts = FollowService::new((**pool).clone())
        .follow(user.0, *target_id)
        .await?;

    Ok(HttpResponse::Ok().json(counts))
}

/// Unfollow a user
pub async fn unfollow_user(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    target_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let counts = FollowService::new((**pool).clone())
        .unfollow(user.0, *target_id)
        .await?;

    Ok(HttpResponse::Ok().json(counts))
}
