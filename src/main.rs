use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use agrifire_sync::config::{Config, StateTarget};
use agrifire_sync::sync::Syncer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with environment filter support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,agrifire_sync=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    // State names spelled the way the portal expects them, including the
    // portal's own "UTTAR PRADES".
    let targets = vec![
        StateTarget::new("PB", "PUNJAB", "minuslevel901"),
        StateTarget::new("UP", "UTTAR PRADES", "minuslevel31"),
        StateTarget::new("HR", "HARYANA", "minuslevel31"),
    ];

    let config = Config::bhuvan(std::env::current_dir()?);
    info!(
        "Starting fire point sync for {} states into {}",
        targets.len(),
        config.storage_root.display()
    );

    let syncer = Syncer::new(&config);
    let summaries = syncer.run(&targets).await;

    for summary in &summaries {
        info!(
            "{}: {} written, {} skipped, {} failed",
            summary.state_code, summary.written, summary.skipped, summary.failed
        );
    }

    Ok(())
}
