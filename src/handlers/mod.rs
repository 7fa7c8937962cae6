/// HTTP request handlers and route wiring.
pub mod follows;
pub mod notifications;
pub mod posts;
pub mod reels;
pub mod stories;
pub mod users;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/users", web::post().to(users::create_user))
            .route("/users/{id}", web::get().to(users::get_user))
            .route("/users/{id}/follow", web::post().to(follows::follow_user))
            .route(
                "/users/{id}/follow",
                web::delete().to(follows::unfollow_user),
            )
            .route("/stories", web::post().to(stories::create_story))
            .route("/stories", web::get().to(stories::list_stories))
            .route(
                "/stories/following",
                web::get().to(stories::list_following_stories),
            )
            .route("/posts", web::post().to(posts::create_post))
            .route("/posts", web::get().to(posts::list_posts))
            .route("/posts/{id}/like", web::post().to(posts::like_post))
            .route("/posts/{id}/like", web::delete().to(posts::unlike_post))
            .route(
                "/posts/{id}/comments",
                web::post().to(posts::create_post_comment),
            )
            .route(
                "/posts/{id}/comments",
                web::get().to(posts::list_post_comments),
            )
            .route("/reels", web::post().to(reels::create_reel))
            .route("/reels", web::get().to(reels::list_reels))
            .route("/reels/{id}/like", web::post().to(reels::like_reel))
            .route("/reels/{id}/like", web::delete().to(reels::unlike_reel))
            .route(
                "/reels/{id}/comments",
                web::post().to(reels::create_reel_comment),
            )
            .route(
                "/reels/{id}/comments",
                web::get().to(reels::list_reel_comments),
            )
            .route(
                "/notifications",
                web::get().to(notifications::list_notifications),
            )
            .route(
                "/notifications/{id}/read",
                web::post().to(notifications::mark_notification_read),
            )
            .route(
                "/notifications/{id}",
                web::delete().to(notifications::delete_notification),
            ),
    );
}
