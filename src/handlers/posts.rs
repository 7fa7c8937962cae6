/// Post handlers - creation with follower fan-out, likes and comments.
///
/// Mirror updates and notifications attached to a primary action are
/// best-effort; only the primary persist can fail the request.
use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::middleware::AuthenticatedUser;
use crate::models::NotificationType;
use crate::services::{FanoutService, MirrorField};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub caption: Option<String>,
    pub media_url: Option<String>,
    pub media_kind: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub body: String,
}

/// Create a post and fan out a notification to every follower
pub async fn create_post(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let post = post_repo::create_post(
        &pool,
        user.0,
        req.caption.as_deref(),
        req.media_url.as_deref(),
        req.media_kind.as_deref(),
    )
    .await?;

    FanoutService::new((**pool).clone())
        .fan_out_post(user.0, post.id)
        .await;

    Ok(HttpResponse::Created().json(post))
}

/// Get all posts, newest first
pub async fn list_posts(
    pool: web::Data<PgPool>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let posts = post_repo::list_posts(&pool, query.limit).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Like a post
pub async fn like_post(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let post = post_repo::find_post_by_id(&pool, *post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("post not found".into()))?;

    let fanout = FanoutService::new((**pool).clone());
    let added = fanout
        .mirror_add(MirrorField::PostLikes, post.id, user.0)
        .await?;
    if !added {
        return Err(AppError::Conflict("post already liked".into()));
    }

    fanout
        .notify_best_effort(NotificationType::Like, user.0, post.owner_id, Some(post.id))
        .await;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "liked": true })))
}

/// Remove a like. Idempotent: unliking a post that was never liked is a
/// no-op, since callers may retry.
pub async fn unlike_post(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let post = post_repo::find_post_by_id(&pool, *post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("post not found".into()))?;

    FanoutService::new((**pool).clone())
        .mirror_remove(MirrorField::PostLikes, post.id, user.0)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "liked": false })))
}

/// Comment on a post
pub async fn create_post_comment(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    post_id: web::Path<Uuid>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let body = req.body.trim();
    if body.is_empty() {
        return Err(AppError::Validation("comment body is required".into()));
    }

    let post = post_repo::find_post_by_id(&pool, *post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("post not found".into()))?;

    let comment = comment_repo::create_comment(&pool, user.0, post.id, "post", body).await?;

    let fanout = FanoutService::new((**pool).clone());
    fanout
        .mirror_add_best_effort(MirrorField::PostComments, post.id, comment.id)
        .await;
    fanout
        .notify_best_effort(
            NotificationType::Comment,
            user.0,
            post.owner_id,
            Some(post.id),
        )
        .await;

    Ok(HttpResponse::Created().json(comment))
}

/// Comments under a post, newest first
pub async fn list_post_comments(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let comments = comment_repo::list_comments(&pool, *post_id, query.limit).await?;

    Ok(HttpResponse::Ok().json(comments))
}
