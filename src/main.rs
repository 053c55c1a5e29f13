//! Single-invocation sync entry point: load configuration, run the
//! pipeline, print the JSON summary. Exits non-zero only for
//! invocation-level failures (configuration or the initial batch read).

use anyhow::Result;
use clap::Parser;

use airsync::config::Config;
use airsync::sync::SyncService;

#[derive(Parser, Debug)]
#[command(name = "airsync", about = "Sync Airtable site records against Zenchette")]
struct Args {
    /// Compute and report updates without writing them to Airtable.
    /// Also honored via the DRY_RUN environment variable.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    config.dry_run = config.dry_run || args.dry_run;

    let service = SyncService::new(&config)?;
    let report = service.run().await?;

    println!("{}", serde_json::to_string_pretty(&report.summary())?);
    Ok(())
}
