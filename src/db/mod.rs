/// Database access layer: sqlx repositories over PostgreSQL.
pub mod comment_repo;
pub mod notification_repo;
pub mod post_repo;
pub mod reel_repo;
pub mod user_repo;
