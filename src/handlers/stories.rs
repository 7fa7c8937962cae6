/// Story handlers - HTTP endpoints for ephemeral content
use crate::error::Result;
use crate::middleware::AuthenticatedUser;
use crate::models::NewStory;
use crate::services::StoriesService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// Create a new story
pub async fn create_story(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    req: web::Json<NewStory>,
) -> Result<HttpResponse> {
    let service = StoriesService::new((**pool).clone());
    let story = service.create_story(user.0, req.into_inner()).await?;

    Ok(HttpResponse::Created().json(story))
}

/// Get all active stories, newest first
pub async fn list_stories(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = StoriesService::new((**pool).clone());
    let stories = service.list_all().await?;

    Ok(HttpResponse::Ok().json(stories))
}

/// Get active stories from followed users only
pub async fn list_following_stories(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
) -> Result<HttpResponse> {
    let service = StoriesService::new((**pool).clone());
    let stories = service.list_following(user.0).await?;

    Ok(HttpResponse::Ok().json(stories))
}
