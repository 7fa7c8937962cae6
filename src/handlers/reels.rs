/// Reel handlers - short-video content with the same like/comment mirrors
/// as posts.
use crate::db::{comment_repo, reel_repo};
use crate::error::{AppError, Result};
use crate::handlers::posts::{CreateCommentRequest, PaginationParams};
use crate::middleware::AuthenticatedUser;
use crate::models::NotificationType;
use crate::services::{FanoutService, MirrorField};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct CreateReelRequest {
    pub caption: Option<String>,
    pub video_url: String,
}

/// Create a reel. The video URL has already been resolved by the media host.
pub async fn create_reel(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    req: web::Json<CreateReelRequest>,
) -> Result<HttpResponse> {
    if req.video_url.trim().is_empty() {
        return Err(AppError::Validation("reel video URL is required".into()));
    }

    let reel = reel_repo::create_reel(&pool, user.0, req.caption.as_deref(), &req.video_url).await?;

    Ok(HttpResponse::Created().json(reel))
}

/// Get all reels, newest first
pub async fn list_reels(
    pool: web::Data<PgPool>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let reels = reel_repo::list_reels(&pool, query.limit).await?;

    Ok(HttpResponse::Ok().json(reels))
}

/// Like a reel
pub async fn like_reel(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    reel_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let reel = reel_repo::find_reel_by_id(&pool, *reel_id)
        .await?
        .ok_or_else(|| AppError::NotFound("reel not found".into()))?;

    let fanout = FanoutService::new((**pool).clone());
    let added = fanout
        .mirror_add(MirrorField::ReelLikes, reel.id, user.0)
        .await?;
    if !added {
        return Err(AppError::Conflict("reel already liked".into()));
    }

    fanout
        .notify_best_effort(NotificationType::Like, user.0, reel.owner_id, Some(reel.id))
        .await;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "liked": true })))
}

/// Remove a like from a reel; no-op when absent
pub async fn unlike_reel(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    reel_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let reel = reel_repo::find_reel_by_id(&pool, *reel_id)
        .await?
        .ok_or_else(|| AppError::NotFound("reel not found".into()))?;

    FanoutService::new((**pool).clone())
        .mirror_remove(MirrorField::ReelLikes, reel.id, user.0)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "liked": false })))
}

/// Comment on a reel
pub async fn create_reel_comment(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    reel_id: web::Path<Uuid>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let body = req.body.trim();
    if body.is_empty() {
        return Err(AppError::Validation("comment body is required".into()));
    }

    let reel = reel_repo::find_reel_by_id(&pool, *reel_id)
        .await?
        .ok_or_else(|| AppError::NotFound("reel not found".into()))?;

    let comment = comment_repo::create_comment(&pool, user.0, reel.id, "reel", body).await?;

    let fanout = FanoutService::new((**pool).clone());
    fanout
        .mirror_add_best_effort(MirrorField::ReelComments, reel.id, comment.id)
        .await;
    fanout
        .notify_best_effort(
            NotificationType::Comment,
            user.0,
            reel.owner_id,
            Some(reel.id),
        )
        .await;

    Ok(HttpResponse::Created().json(comment))
}

/// Comments under a reel, newest first
pub async fn list_reel_comments(
    pool: web::Data<PgPool>,
    reel_id: web::Path<Uuid>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let comments = comment_repo::list_comments(&pool, *reel_id, query.limit).await?;

    Ok(HttpResponse::Ok().json(comments))
}
