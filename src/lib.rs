/// Social API service
///
/// REST backend for a small social platform: ephemeral stories with
/// time-boxed expiry, posts and reels with denormalized like/comment
/// mirrors, follow relationships, and at-most-once notifications fanned
/// out from social actions.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route wiring
/// - `models`: persisted entities and request payloads
/// - `services`: business logic (stories, fan-out, follows)
/// - `db`: database access layer
/// - `jobs`: background jobs (story expiry sweeper)
/// - `middleware`: authenticated-user extraction
/// - `error`: error types and HTTP mapping
/// - `config`: configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod jobs;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
