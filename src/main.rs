use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::info;
use tracing_actix_web::TracingLogger;

use social_api::{config::Config, handlers, jobs};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    info!("starting social-api");

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        env = %config.app.env,
        port = config.app.port,
        "configuration loaded"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .context("Failed to verify database connection")?;
    info!("database pool created and verified");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    info!("database migrations completed");

    tokio::spawn(jobs::story_sweeper::start_story_sweeper(
        pool.clone(),
        Duration::from_secs(config.jobs.story_sweep_interval_secs),
    ));

    let bind_addr = format!("{}:{}", config.app.host, config.app.port);
    info!(addr = %bind_addr, "starting HTTP server");

    let pool_data = web::Data::new(pool);
    let allowed_origins = config.cors.allowed_origins.clone();

    HttpServer::new(move || {
        let cors = if allowed_origins.trim() == "*" {
            Cors::permissive()
        } else {
            allowed_origins
                .split(',')
                .fold(Cors::default(), |cors, origin| {
                    cors.allowed_origin(origin.trim())
                })
                .allow_any_method()
                .allow_any_header()
        };

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(pool_data.clone())
            .route("/health", web::get().to(|| async { "OK" }))
            .configure(handlers::configure)
    })
    .bind(&bind_addr)
    .context("Failed to bind HTTP server")?
    .run()
    .await
    .context("HTTP server error")?;

    info!("social-api shutting down");
    Ok(())
}
