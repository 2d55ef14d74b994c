//! Scholar Snapshot - Entry Point
//!
//! Writes one profile's publications to a JSON file and exits.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholar_snapshot::{Config, ProfileSnapshotBuilder, config::api, formatters};

#[derive(Parser, Debug)]
#[command(name = "scholar-snapshot")]
#[command(about = "Snapshot a Google Scholar profile's publications to JSON")]
#[command(version)]
struct Cli {
    /// Google Scholar user id (e.g. oVm7TyYAAAAJ)
    #[arg(long, env = "SCHOLAR_USER_ID")]
    user: String,

    /// Output file path
    #[arg(long, default_value = "publications.json")]
    out: PathBuf,

    /// Base URL to fetch from (mirror or mock server)
    #[arg(long, env = "SCHOLAR_BASE_URL", default_value = api::BASE_URL)]
    base_url: String,

    /// Publications requested per page
    #[arg(long, default_value_t = api::PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..=100))]
    page_size: u32,

    /// Request timeout in seconds
    #[arg(long, default_value_t = api::REQUEST_TIMEOUT.as_secs(), value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Fail when no publications are found on a page that is not a profile
    #[arg(long)]
    strict: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout carries the progress lines only
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %cli.base_url,
        page_size = cli.page_size,
        "Starting scholar-snapshot"
    );

    let config = Config::new()
        .with_base_url(cli.base_url)
        .with_page_size(cli.page_size)
        .with_request_timeout(Duration::from_secs(cli.timeout))
        .with_strict(cli.strict);
    let builder = ProfileSnapshotBuilder::new(&config)?;

    println!("{}", formatters::progress_line(&cli.user));

    let envelope = builder.run(&cli.user, &cli.out).await.map_err(|e| {
        tracing::error!(error = %e, "Snapshot failed");
        anyhow::anyhow!(e.to_user_message())
    })?;

    println!("{}", formatters::summary_line(&envelope, &cli.out));
    Ok(())
}
