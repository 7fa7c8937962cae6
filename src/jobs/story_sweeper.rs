//! Story expiry sweeper background job
//!
//! Stories are authoritatively invisible once `expires_at` passes because
//! every listing query filters on it; this job reclaims the expired rows.
//! Sweep lag only delays deletion, never visibility.

use crate::services::StoriesService;
use sqlx::PgPool;
use std::time::Duration;
use tokio::time::sleep;

pub async fn start_story_sweeper(pool: PgPool, interval: Duration) {
    tracing::info!(
        interval_secs = interval.as_secs(),
        "starting story expiry sweeper"
    );

    let service = StoriesService::new(pool);

    loop {
        sleep(interval).await;

        match service.sweep_expired().await {
            Ok(0) => tracing::debug!("story sweep: nothing expired"),
            Ok(n) => tracing::info!(swept = n, "story sweep: deleted expired stories"),
            Err(e) => tracing::error!(error = %e, "story sweep failed"),
        }
    }
}
