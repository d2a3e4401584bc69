use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use feed_normalizer::driver::{FeedError, FeedProcessor, ProcessorConfig, write_output};
use feed_normalizer::feed::read_feed;
use feed_normalizer::normalize::Normalizer;
use feed_normalizer::resolve::{GoTransitResolver, TableError};

/// Output file used when none is given.
const DEFAULT_OUTPUT: &str = "normalized.json";

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error("usage: feed-normalizer <gtfs-dir> [output.json]")]
    Usage,

    #[error("invalid code table: {0}")]
    Table(#[from] TableError),

    #[error("invalid cleaning rule: {0}")]
    Rule(#[from] regex::Error),

    #[error(transparent)]
    Feed(#[from] FeedError),
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run(std::env::args().skip(1).collect()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ RunError::Usage) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "Feed normalization failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Vec<String>) -> Result<(), RunError> {
    let mut args = args.into_iter();
    let feed_dir = PathBuf::from(args.next().ok_or(RunError::Usage)?);
    let output = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string()));
    if args.next().is_some() {
        return Err(RunError::Usage);
    }

    let config = ProcessorConfig::from_env();
    info!(
        feed = %feed_dir.display(),
        batch_size = config.batch_size,
        numeric_ids = config.numeric_ids,
        "Normalizing feed"
    );

    let processor = FeedProcessor::new(
        GoTransitResolver::new()?,
        Normalizer::go_transit()?,
        config,
    );

    let feed = tokio::task::spawn_blocking(move || read_feed(&feed_dir))
        .await
        .map_err(FeedError::from)?
        .map_err(FeedError::from)?;

    let normalized = processor.process(feed).await?;
    write_output(&output, &normalized)?;

    info!(output = %output.display(), "Wrote normalized feed");
    Ok(())
}
