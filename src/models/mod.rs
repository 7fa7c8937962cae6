/// Data models for the social API
///
/// Persisted entities (sqlx rows) and request payloads for:
/// - Story: time-boxed ephemeral content (media or text variant)
/// - Post / Reel: feed content with denormalized like/comment mirrors
/// - Comment: authoritative relation behind the comment mirrors
/// - Notification: at-most-once social notification
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Story content variant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoryVariant {
    Image,
    Video,
    Text,
}

impl StoryVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryVariant::Image => "image",
            StoryVariant::Video => "video",
            StoryVariant::Text => "text",
        }
    }

    pub fn is_media(&self) -> bool {
        matches!(self, StoryVariant::Image | StoryVariant::Video)
    }
}

impl TryFrom<&str> for StoryVariant {
    type Error = AppError;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        match s {
            "image" => Ok(StoryVariant::Image),
            "video" => Ok(StoryVariant::Video),
            "text" => Ok(StoryVariant::Text),
            _ => Err(AppError::Validation("invalid story variant".into())),
        }
    }
}

/// Story entity - ephemeral content item, visible until expires_at
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Story {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub variant: String,
    pub media_url: Option<String>,
    pub text_content: Option<String>,
    pub bg_color: Option<String>,
    pub caption: Option<String>,
    pub duration_hours: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Creation payload for a story.
///
/// For media variants the URL has already been resolved by the media host;
/// this service never receives raw bytes.
#[derive(Debug, Clone, Deserialize)]
pub struct NewStory {
    pub variant: StoryVariant,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub duration_hours: Option<i32>,
}

/// Notification type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    /// User liked a post/reel
    Like,
    /// User commented on a post/reel
    Comment,
    /// User started following
    Follow,
    /// Followed user published a new post
    Post,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Like => "like",
            NotificationType::Comment => "comment",
            NotificationType::Follow => "follow",
            NotificationType::Post => "post",
        }
    }
}

impl TryFrom<&str> for NotificationType {
    type Error = AppError;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        match s {
            "like" => Ok(NotificationType::Like),
            "comment" => Ok(NotificationType::Comment),
            "follow" => Ok(NotificationType::Follow),
            "post" => Ok(NotificationType::Post),
            _ => Err(AppError::Validation("invalid notification type".into())),
        }
    }
}

/// Notification entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub actor_id: Uuid,
    pub notification_type: String,
    pub target_id: Option<Uuid>,
    #[serde(rename = "read")]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Post entity with denormalized like/comment mirrors
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub caption: Option<String>,
    pub media_url: Option<String>,
    pub media_kind: Option<String>,
    pub likes: Vec<Uuid>,
    pub comments: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Reel entity with denormalized like/comment mirrors
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reel {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub caption: Option<String>,
    pub video_url: String,
    pub likes: Vec<Uuid>,
    pub comments: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Comment entity - authoritative relation behind the comment mirrors
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub author_id: Uuid,
    pub parent_id: Uuid,
    pub parent_kind: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// User profile with denormalized follow mirrors
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub followers: Vec<Uuid>,
    pub following: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}
