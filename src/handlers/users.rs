/// User profile handlers. Credentials and token issuance live in the
/// identity service; this surface only manages profile rows.
use crate::db::user_repo;
use crate::error::{AppError, Result};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

/// Create a user profile
pub async fn create_user(
    pool: web::Data<PgPool>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    let username = req.username.trim();
    if username.is_empty() {
        return Err(AppError::Validation("username is required".into()));
    }

    match user_repo::create_user(&pool, username).await {
        Ok(user) => Ok(HttpResponse::Created().json(user)),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            Err(AppError::Conflict("username already taken".into()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Get a user profile
pub async fn get_user(pool: web::Data<PgPool>, user_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let user = user_repo::find_user_by_id(&pool, *user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("user not found".into()))?;

    Ok(HttpResponse::Ok().json(user))
}
