/// Follow relationship transitions.
///
/// The actor's `following` mirror and the target's `followers` mirror must
/// change together, so both writes run in one transaction; partial failure
/// rolls back and propagates. The follow notification stays best-effort.
use crate::error::{AppError, Result};
use crate::models::NotificationType;
use crate::services::FanoutService;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Mirror cardinalities after a transition, returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct FollowCounts {
    pub followers_count: i32,
    pub following_count: i32,
}

#[derive(Clone)]
pub struct FollowService {
    pool: PgPool,
}

impl FollowService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// not-following -> following. Rejects self-follow, missing target and
    /// duplicate follow; on success both mirrors have changed atomically.
    pub async fn follow(&self, actor_id: Uuid, target_id: Uuid) -> Result<FollowCounts> {
        if actor_id == target_id {
            return Err(AppError::Validation("you cannot follow yourself".into()));
        }

        let mut tx = self.pool.begin().await?;

        let target_exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)"#)
                .bind(target_id)
                .fetch_one(&mut *tx)
                .await?;
        if !target_exists {
            return Err(AppError::NotFound("user not found".into()));
        }

        let added = sqlx::query(
            r#"
            UPDATE users SET following = array_append(following, $1)
            WHERE id = $2 AND NOT ($1 = ANY(following))
            "#,
        )
        .bind(target_id)
        .bind(actor_id)
        .execute(&mut *tx)
        .await?;
        if added.rows_affected() == 0 {
            return Err(AppError::Conflict("already following this user".into()));
        }

        sqlx::query(
            r#"
            UPDATE users SET followers = array_append(followers, $1)
            WHERE id = $2 AND NOT ($1 = ANY(followers))
            "#,
        )
        .bind(actor_id)
        .bind(target_id)
        .execute(&mut *tx)
        .await?;

        let counts = Self::fetch_counts(&mut tx, actor_id, target_id).await?;
        tx.commit().await?;

        FanoutService::new(self.pool.clone())
            .notify_best_effort(NotificationType::Follow, actor_id, target_id, None)
            .await;

        Ok(counts)
    }

    /// following -> not-following. Rejects missing target and absent
    /// relationship; both mirror removals are atomic.
    pub async fn unfollow(&self, actor_id: Uuid, target_id: Uuid) -> Result<FollowCounts> {
        let mut tx = self.pool.begin().await?;

        let target_exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)"#)
                .bind(target_id)
                .fetch_one(&mut *tx)
                .await?;
        if !target_exists {
            return Err(AppError::NotFound("user not found".into()));
        }

        let removed = sqlx::query(
            r#"
            UPDATE users SET following = array_remove(following, $1)
            WHERE id = $2 AND $1 = ANY(following)
            "#,
        )
        .bind(target_id)
        .bind(actor_id)
        .execute(&mut *tx)
        .await?;
        if removed.rows_affected() == 0 {
            return Err(AppError::Conflict("you are not following this user".into()));
        }

        sqlx::query(
            r#"
            UPDATE users SET followers = array_remove(followers, $1)
            WHERE id = $2 AND $1 = ANY(followers)
            "#,
        )
        .bind(actor_id)
        .bind(target_id)
        .execute(&mut *tx)
        .await?;

        let counts = Self::fetch_counts(&mut tx, actor_id, target_id).await?;
        tx.commit().await?;

        Ok(counts)
    }

    async fn fetch_counts(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        actor_id: Uuid,
        target_id: Uuid,
    ) -> Result<FollowCounts> {
        let following_count: i32 = sqlx::query_scalar(
            r#"SELECT COALESCE(cardinality(following), 0) FROM users WHERE id = $1"#,
        )
        .bind(actor_id)
        .fetch_one(&mut **tx)
        .await?;

        let followers_count: i32 = sqlx::query_scalar(
            r#"SELECT COALESCE(cardinality(followers), 0) FROM users WHERE id = $1"#,
        )
        .bind(target_id)
        .fetch_one(&mut **tx)
        .await?;

        Ok(FollowCounts {
            followers_count,
            following_count,
        })
    }
}
