/// Social fan-out: denormalized mirror maintenance and at-most-once
/// notification creation for like / comment / follow / post actions.
use crate::error::Result;
use crate::models::{Notification, NotificationType};
use futures::future::join_all;
use sqlx::PgPool;
use uuid::Uuid;

/// Denormalized array fields maintained with set semantics.
///
/// The table/column pair is fixed by the enum, so the SQL built from it
/// never interpolates caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorField {
    PostLikes,
    PostComments,
    ReelLikes,
    ReelComments,
    UserFollowers,
    UserFollowing,
}

impl MirrorField {
    pub fn table(&self) -> &'static str {
        match self {
            MirrorField::PostLikes | MirrorField::PostComments => "posts",
            MirrorField::ReelLikes | MirrorField::ReelComments => "reels",
            MirrorField::UserFollowers | MirrorField::UserFollowing => "users",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            MirrorField::PostLikes | MirrorField::ReelLikes => "likes",
            MirrorField::PostComments | MirrorField::ReelComments => "comments",
            MirrorField::UserFollowers => "followers",
            MirrorField::UserFollowing => "following",
        }
    }
}

/// Self-actions never produce a notification. Checked before any
/// persistence is attempted.
pub fn is_self_action(actor_id: Uuid, recipient_id: Uuid) -> bool {
    actor_id == recipient_id
}

#[derive(Clone)]
pub struct FanoutService {
    pool: PgPool,
}

impl FanoutService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a notification for a completed social action.
    ///
    /// Self-actions never notify, and duplicate (recipient, actor, type,
    /// target) tuples are suppressed by the storage-level dedup index.
    /// Returns the created notification, or `None` when suppressed.
    pub async fn notify(
        &self,
        notification_type: NotificationType,
        actor_id: Uuid,
        recipient_id: Uuid,
        target_id: Option<Uuid>,
    ) -> Result<Option<Notification>> {
        if is_self_action(actor_id, recipient_id) {
            return Ok(None);
        }

        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (recipient_id, actor_id, notification_type, target_id)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT DO NOTHING
            RETURNING id, recipient_id, actor_id, notification_type, target_id,
                      is_read, created_at
            "#,
        )
        .bind(recipient_id)
        .bind(actor_id)
        .bind(notification_type.as_str())
        .bind(target_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(notification)
    }

    /// Fire-and-forget variant of [`notify`](Self::notify): failures are
    /// logged and never reach the caller, so a primary action cannot be
    /// failed by its notification side effect.
    pub async fn notify_best_effort(
        &self,
        notification_type: NotificationType,
        actor_id: Uuid,
        recipient_id: Uuid,
        target_id: Option<Uuid>,
    ) {
        if let Err(e) = self
            .notify(notification_type, actor_id, recipient_id, target_id)
            .await
        {
            tracing::warn!(
                notification_type = notification_type.as_str(),
                %actor_id,
                %recipient_id,
                error = %e,
                "failed to create notification"
            );
        }
    }

    /// Add `value_id` to a mirror array. Single guarded statement, so the
    /// add is atomic under concurrent writers and a no-op when the value is
    /// already present. Returns whether the set changed.
    pub async fn mirror_add(
        &self,
        field: MirrorField,
        entity_id: Uuid,
        value_id: Uuid,
    ) -> Result<bool> {
        let sql = format!(
            "UPDATE {table} SET {col} = array_append({col}, $1) \
             WHERE id = $2 AND NOT ($1 = ANY({col}))",
            table = field.table(),
            col = field.column(),
        );
        let result = sqlx::query(&sql)
            .bind(value_id)
            .bind(entity_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove `value_id` from a mirror array; no-op when absent.
    /// Returns whether the set changed.
    pub async fn mirror_remove(
        &self,
        field: MirrorField,
        entity_id: Uuid,
        value_id: Uuid,
    ) -> Result<bool> {
        let sql = format!(
            "UPDATE {table} SET {col} = array_remove({col}, $1) \
             WHERE id = $2 AND $1 = ANY({col})",
            table = field.table(),
            col = field.column(),
        );
        let result = sqlx::query(&sql)
            .bind(value_id)
            .bind(entity_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Best-effort mirror add for side-effect mirrors (e.g. the comment id
    /// list on a post): the primary write has already succeeded, so a
    /// failed mirror update is logged and swallowed.
    pub async fn mirror_add_best_effort(
        &self,
        field: MirrorField,
        entity_id: Uuid,
        value_id: Uuid,
    ) {
        if let Err(e) = self.mirror_add(field, entity_id, value_id).await {
            tracing::warn!(
                table = field.table(),
                column = field.column(),
                %entity_id,
                error = %e,
                "failed to update mirror array"
            );
        }
    }

    /// Notify every follower of `author_id` about a new post.
    ///
    /// Per-follower failures are isolated and logged; the fan-out as a
    /// whole never fails the post-creation call.
    pub async fn fan_out_post(&self, author_id: Uuid, post_id: Uuid) {
        let followers: Vec<Uuid> = match sqlx::query_scalar(
            r#"SELECT followers FROM users WHERE id = $1"#,
        )
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await
        {
            Ok(Some(followers)) => followers,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(%author_id, error = %e, "failed to load followers for fan-out");
                return;
            }
        };

        let results = join_all(followers.iter().map(|follower_id| {
            self.notify(NotificationType::Post, author_id, *follower_id, Some(post_id))
        }))
        .await;

        for (follower_id, result) in followers.iter().zip(results) {
            if let Err(e) = result {
                tracing::warn!(
                    %author_id,
                    %follower_id,
                    %post_id,
                    error = %e,
                    "failed to notify follower of new post"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_fields_map_to_expected_tables() {
        assert_eq!(MirrorField::PostLikes.table(), "posts");
        assert_eq!(MirrorField::PostLikes.column(), "likes");
        assert_eq!(MirrorField::PostComments.column(), "comments");
        assert_eq!(MirrorField::ReelLikes.table(), "reels");
        assert_eq!(MirrorField::ReelComments.table(), "reels");
        assert_eq!(MirrorField::UserFollowers.table(), "users");
        assert_eq!(MirrorField::UserFollowers.column(), "followers");
        assert_eq!(MirrorField::UserFollowing.column(), "following");
    }

    #[test]
    fn self_actions_are_suppressed() {
        let user = Uuid::new_v4();
        assert!(is_self_action(user, user));
        assert!(!is_self_action(user, Uuid::new_v4()));
    }
}
