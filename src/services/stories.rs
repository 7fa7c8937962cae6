/// Ephemeral story lifecycle: creation, derived expiry, active-only listing.
use crate::error::{AppError, Result};
use crate::models::{NewStory, Story, StoryVariant};
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Allowed story durations in hours
pub const ALLOWED_DURATIONS: [i32; 4] = [2, 6, 12, 24];

/// Default story duration in hours
pub const DEFAULT_DURATION_HOURS: i32 = 24;

const DEFAULT_BG_COLOR: &str = "#000000";

/// Lenient duration policy: anything outside the allowed set (including
/// absent) falls back to the default rather than rejecting.
pub fn coerce_duration(duration_hours: Option<i32>) -> i32 {
    match duration_hours {
        Some(d) if ALLOWED_DURATIONS.contains(&d) => d,
        _ => DEFAULT_DURATION_HOURS,
    }
}

/// Expiry is derived from the creation-time clock reading exactly once.
pub fn compute_expires_at(created_at: DateTime<Utc>, duration_hours: i32) -> DateTime<Utc> {
    created_at + Duration::hours(duration_hours as i64)
}

/// Resolved per-variant content columns for a new story. The variants are
/// mutually exclusive: media stories carry a URL, text stories carry text
/// and a background color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryContent {
    pub media_url: Option<String>,
    pub text_content: Option<String>,
    pub bg_color: Option<String>,
}

/// Validate a creation payload by variant: media variants require a
/// pre-resolved URL, the text variant requires non-empty trimmed text.
pub fn validate_content(req: &NewStory) -> Result<StoryContent> {
    match req.variant {
        StoryVariant::Image | StoryVariant::Video => {
            let url = req
                .media_url
                .as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .ok_or_else(|| AppError::Validation("story media URL is required".into()))?;
            Ok(StoryContent {
                media_url: Some(url.to_string()),
                text_content: None,
                bg_color: None,
            })
        }
        StoryVariant::Text => {
            let text = req
                .text
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .ok_or_else(|| AppError::Validation("text is required for a text story".into()))?;
            let bg = req
                .bg_color
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .unwrap_or(DEFAULT_BG_COLOR);
            Ok(StoryContent {
                media_url: None,
                text_content: Some(text.to_string()),
                bg_color: Some(bg.to_string()),
            })
        }
    }
}

#[derive(Clone)]
pub struct StoriesService {
    pool: PgPool,
}

impl StoriesService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a story. Media variants require a pre-resolved URL; the text
    /// variant requires non-empty trimmed text. The persisted row is
    /// immutable afterwards except for passive expiry.
    pub async fn create_story(&self, owner_id: Uuid, req: NewStory) -> Result<Story> {
        let content = validate_content(&req)?;
        let duration_hours = coerce_duration(req.duration_hours);
        let created_at = Utc::now();
        let expires_at = compute_expires_at(created_at, duration_hours);

        let story = sqlx::query_as::<_, Story>(
            r#"
            INSERT INTO stories (owner_id, variant, media_url, text_content, bg_color,
                                 caption, duration_hours, created_at, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, owner_id, variant, media_url, text_content, bg_color,
                      caption, duration_hours, created_at, expires_at
            "#,
        )
        .bind(owner_id)
        .bind(req.variant.as_str())
        .bind(content.media_url)
        .bind(content.text_content)
        .bind(content.bg_color)
        .bind(req.caption)
        .bind(duration_hours)
        .bind(created_at)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(story)
    }

    /// All non-expired stories, newest first. The `expires_at > NOW()`
    /// filter is authoritative; the background sweeper only reclaims rows.
    pub async fn list_all(&self) -> Result<Vec<Story>> {
        let stories = sqlx::query_as::<_, Story>(
            r#"
            SELECT id, owner_id, variant, media_url, text_content, bg_color,
                   caption, duration_hours, created_at, expires_at
            FROM stories
            WHERE expires_at > NOW()
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(stories)
    }

    /// Non-expired stories from users the caller follows, newest first.
    /// Applies the same expiry filter as every other listing.
    pub async fn list_following(&self, user_id: Uuid) -> Result<Vec<Story>> {
        let stories = sqlx::query_as::<_, Story>(
            r#"
            SELECT s.id, s.owner_id, s.variant, s.media_url, s.text_content, s.bg_color,
                   s.caption, s.duration_hours, s.created_at, s.expires_at
            FROM stories s
            WHERE s.expires_at > NOW()
              AND s.owner_id = ANY((SELECT following FROM users WHERE id = $1))
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(stories)
    }

    /// Delete expired stories. Returns affected rows.
    pub async fn sweep_expired(&self) -> Result<u64> {
        let result = sqlx::query(r#"DELETE FROM stories WHERE expires_at <= NOW()"#)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_duration_keeps_allowed_values() {
        for d in ALLOWED_DURATIONS {
            assert_eq!(coerce_duration(Some(d)), d);
        }
    }

    #[test]
    fn coerce_duration_falls_back_to_default() {
        assert_eq!(coerce_duration(None), 24);
        assert_eq!(coerce_duration(Some(0)), 24);
        assert_eq!(coerce_duration(Some(3)), 24);
        assert_eq!(coerce_duration(Some(-6)), 24);
        assert_eq!(coerce_duration(Some(48)), 24);
    }

    #[test]
    fn expires_at_is_created_at_plus_duration() {
        let created_at = Utc::now();
        for d in ALLOWED_DURATIONS {
            let expires_at = compute_expires_at(created_at, d);
            assert_eq!(expires_at - created_at, Duration::hours(d as i64));
        }
    }

    fn text_payload(text: Option<&str>) -> NewStory {
        NewStory {
            variant: StoryVariant::Text,
            media_url: None,
            text: text.map(str::to_string),
            bg_color: None,
            caption: None,
            duration_hours: None,
        }
    }

    fn media_payload(variant: StoryVariant, media_url: Option<&str>) -> NewStory {
        NewStory {
            variant,
            media_url: media_url.map(str::to_string),
            text: None,
            bg_color: None,
            caption: None,
            duration_hours: None,
        }
    }

    #[test]
    fn blank_text_story_is_rejected() {
        for text in [None, Some(""), Some("   \n\t")] {
            let err = validate_content(&text_payload(text)).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[test]
    fn media_story_without_url_is_rejected() {
        for variant in [StoryVariant::Image, StoryVariant::Video] {
            for url in [None, Some(""), Some("   ")] {
                let err = validate_content(&media_payload(variant, url)).unwrap_err();
                assert!(matches!(err, AppError::Validation(_)));
            }
        }
    }

    #[test]
    fn text_story_gets_default_background() {
        let content = validate_content(&text_payload(Some("  hello  "))).unwrap();
        assert_eq!(content.text_content.as_deref(), Some("hello"));
        assert_eq!(content.bg_color.as_deref(), Some("#000000"));
        assert!(content.media_url.is_none());
    }

    #[test]
    fn media_story_keeps_resolved_url() {
        let content =
            validate_content(&media_payload(StoryVariant::Image, Some("https://cdn/x.jpg")))
                .unwrap();
        assert_eq!(content.media_url.as_deref(), Some("https://cdn/x.jpg"));
        assert!(content.text_content.is_none());
        assert!(content.bg_color.is_none());
    }
}
