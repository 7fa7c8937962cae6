use chrono::{Duration, Utc};
/// Unit tests for social-api core functionality
///
/// This test module covers:
/// - Story duration coercion and expiry derivation
/// - Story creation payload parsing and defaults
/// - Notification model serialization and type parsing
/// - Mirror field table/column mapping
use social_api::models::*;
use social_api::services::fanout::is_self_action;
use social_api::services::stories::{
    coerce_duration, compute_expires_at, validate_content, ALLOWED_DURATIONS,
    DEFAULT_DURATION_HOURS,
};
use social_api::services::MirrorField;
use social_api::AppError;
use uuid::Uuid;

#[test]
fn test_notification_type_serialization() {
    let types = vec![
        NotificationType::Like,
        NotificationType::Comment,
        NotificationType::Follow,
        NotificationType::Post,
    ];

    for notification_type in types {
        let json = serde_json::to_string(&notification_type).unwrap();
        let deserialized: NotificationType = serde_json::from_str(&json).unwrap();
        assert_eq!(notification_type, deserialized);
    }
}

#[test]
fn test_notification_type_as_str() {
    assert_eq!(NotificationType::Like.as_str(), "like");
    assert_eq!(NotificationType::Comment.as_str(), "comment");
    assert_eq!(NotificationType::Follow.as_str(), "follow");
    assert_eq!(NotificationType::Post.as_str(), "post");
}

#[test]
fn test_notification_type_parsing_rejects_unknown() {
    assert!(NotificationType::try_from("like").is_ok());
    assert!(NotificationType::try_from("mention").is_err());
    assert!(NotificationType::try_from("").is_err());
}

#[test]
fn test_notification_read_field_serializes_as_read() {
    let notification = Notification {
        id: Uuid::new_v4(),
        recipient_id: Uuid::new_v4(),
        actor_id: Uuid::new_v4(),
        notification_type: "follow".to_string(),
        target_id: None,
        is_read: false,
        created_at: Utc::now(),
    };

    let json = serde_json::to_value(&notification).unwrap();
    assert_eq!(json["read"], serde_json::json!(false));
    assert!(json.get("is_read").is_none());
}

#[test]
fn test_story_variant_parsing() {
    assert_eq!(StoryVariant::try_from("image").unwrap(), StoryVariant::Image);
    assert_eq!(StoryVariant::try_from("video").unwrap(), StoryVariant::Video);
    assert_eq!(StoryVariant::try_from("text").unwrap(), StoryVariant::Text);
    assert!(StoryVariant::try_from("gif").is_err());
}

#[test]
fn test_story_variant_media_classification() {
    assert!(StoryVariant::Image.is_media());
    assert!(StoryVariant::Video.is_media());
    assert!(!StoryVariant::Text.is_media());
}

#[test]
fn test_duration_coercion_allows_only_valid_values() {
    for d in ALLOWED_DURATIONS {
        assert_eq!(coerce_duration(Some(d)), d);
    }
    assert_eq!(coerce_duration(Some(1)), DEFAULT_DURATION_HOURS);
    assert_eq!(coerce_duration(Some(13)), DEFAULT_DURATION_HOURS);
    assert_eq!(coerce_duration(Some(100)), DEFAULT_DURATION_HOURS);
    assert_eq!(coerce_duration(None), DEFAULT_DURATION_HOURS);
}

#[test]
fn test_expiry_equals_creation_plus_duration() {
    let created_at = Utc::now();
    let expires_at = compute_expires_at(created_at, 6);
    assert_eq!(expires_at - created_at, Duration::hours(6));
}

#[test]
fn test_expiry_window_boundaries() {
    // A 6h story is visible at T + 5h59m and gone at T + 6h01m.
    let created_at = Utc::now();
    let expires_at = compute_expires_at(created_at, 6);

    let just_before = created_at + Duration::minutes(5 * 60 + 59);
    let just_after = created_at + Duration::minutes(6 * 60 + 1);

    assert!(expires_at > just_before);
    assert!(expires_at <= just_after);
}

#[test]
fn test_new_story_payload_defaults() {
    let payload: NewStory =
        serde_json::from_str(r#"{"variant": "text", "text": "hello"}"#).unwrap();

    assert_eq!(payload.variant, StoryVariant::Text);
    assert_eq!(payload.text.as_deref(), Some("hello"));
    assert!(payload.bg_color.is_none());
    assert!(payload.caption.is_none());
    assert!(payload.duration_hours.is_none());
}

#[test]
fn test_new_story_media_payload() {
    let payload: NewStory = serde_json::from_str(
        r#"{"variant": "video", "media_url": "https://cdn.example/v.mp4", "duration_hours": 12}"#,
    )
    .unwrap();

    assert_eq!(payload.variant, StoryVariant::Video);
    assert_eq!(
        payload.media_url.as_deref(),
        Some("https://cdn.example/v.mp4")
    );
    assert_eq!(coerce_duration(payload.duration_hours), 12);
}

#[test]
fn test_blank_text_story_fails_validation() {
    for text in [None, Some("".to_string()), Some("   \n\t".to_string())] {
        let payload = NewStory {
            variant: StoryVariant::Text,
            media_url: None,
            text,
            bg_color: None,
            caption: None,
            duration_hours: None,
        };
        let err = validate_content(&payload).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}

#[test]
fn test_media_story_without_url_fails_validation() {
    for variant in [StoryVariant::Image, StoryVariant::Video] {
        let payload = NewStory {
            variant,
            media_url: None,
            text: None,
            bg_color: None,
            caption: None,
            duration_hours: None,
        };
        let err = validate_content(&payload).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}

#[test]
fn test_valid_variants_resolve_content() {
    let text_payload = NewStory {
        variant: StoryVariant::Text,
        media_url: None,
        text: Some("  hello  ".to_string()),
        bg_color: None,
        caption: None,
        duration_hours: None,
    };
    let content = validate_content(&text_payload).unwrap();
    assert_eq!(content.text_content.as_deref(), Some("hello"));
    assert_eq!(content.bg_color.as_deref(), Some("#000000"));
    assert!(content.media_url.is_none());

    let media_payload = NewStory {
        variant: StoryVariant::Image,
        media_url: Some("https://cdn.example/s.jpg".to_string()),
        text: None,
        bg_color: None,
        caption: None,
        duration_hours: None,
    };
    let content = validate_content(&media_payload).unwrap();
    assert_eq!(content.media_url.as_deref(), Some("https://cdn.example/s.jpg"));
    assert!(content.text_content.is_none());
}

#[test]
fn test_self_action_never_notifies() {
    let user = Uuid::new_v4();
    assert!(is_self_action(user, user));
    assert!(!is_self_action(user, Uuid::new_v4()));
}

#[test]
fn test_mirror_field_mapping() {
    let cases = [
        (MirrorField::PostLikes, "posts", "likes"),
        (MirrorField::PostComments, "posts", "comments"),
        (MirrorField::ReelLikes, "reels", "likes"),
        (MirrorField::ReelComments, "reels", "comments"),
        (MirrorField::UserFollowers, "users", "followers"),
        (MirrorField::UserFollowing, "users", "following"),
    ];

    for (field, table, column) in cases {
        assert_eq!(field.table(), table);
        assert_eq!(field.column(), column);
    }
}
