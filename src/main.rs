use anyhow::Result;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::info;

use shoe_catalog::storefront::Storefront;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    info!("Starting Dipali Shoe House catalog service");

    let storefront = Storefront::new();

    // Load once immediately so there is always something to render
    storefront.refresh().await;

    let facets = storefront.facets().await;
    info!(
        "Catalog ready: {} products, {} categories, {} brands",
        storefront.products().await.len(),
        facets.categories.len(),
        facets.brands.len()
    );

    // Re-ingest on a schedule; stale in-flight responses are dropped
    let sched = JobScheduler::new().await?;

    let job_front = storefront.clone();
    sched
        .add(Job::new_async("0 */15 * * * *", move |_uuid, _l| {
            let storefront = job_front.clone();
            Box::pin(async move {
                storefront.refresh().await;
            })
        })?)
        .await?;

    info!("Scheduler started - refreshing catalog every 15 minutes");
    sched.start().await?;

    // Keep the program running
    loop {
        tokio::time::sleep(tokio::time::Duration::from_secs(30)).await;
    }
}
