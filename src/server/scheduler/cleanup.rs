use std::{collections::HashSet, sync::Arc};

use sea_orm::DatabaseConnection;
use serenity::cache::Cache;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::cleanup::GuildCleanupService};

/// Every Saturday at 00:00 UTC.
const CLEANUP_SCHEDULE: &str = "0 0 0 * * Sat";

/// Starts the weekly guild cleanup.
///
/// Guild IDs are read from the bot's cache when the job fires.
///
/// # Arguments
/// - `db` - Database connection
/// - `cache` - Cache of the running bot client
///
/// # Returns
/// - `Ok(JobScheduler)` - Started scheduler, keep it alive for the job to run
/// - `Err(AppError::SchedulerErr)` - Failed to create or start the scheduler
pub async fn start_scheduler(
    db: DatabaseConnection,
    cache: Arc<Cache>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(CLEANUP_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();
        let cache = cache.clone();

        Box::pin(async move {
            if let Err(e) = cleanup_guilds(&db, &cache).await {
                tracing::error!("Error cleaning up guilds: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Guild cleanup scheduler started");

    Ok(scheduler)
}

async fn cleanup_guilds(db: &DatabaseConnection, cache: &Cache) -> Result<usize, AppError> {
    let current_guilds: HashSet<u64> = cache.guilds().iter().map(|id| id.get()).collect();

    GuildCleanupService::new(db)
        .cleanup_guilds(&current_guilds)
        .await
}
