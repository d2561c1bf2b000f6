mod config;
mod fetcher;
mod fixture;
mod languages;
mod summary;

pub const USER_AGENT: &str = concat!("wikifixtures/", env!("CARGO_PKG_VERSION"));

use clap::Parser;
use config::{Cli, Config};
use fetcher::Fetcher;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wikifixtures=info".parse()?),
        )
        .init();

    let config = Config::try_from(Cli::parse()).inspect_err(|e| error!("{e}"))?;

    if config.check {
        let checked = fetcher::check(&config.out_dir, &config.entries)
            .inspect_err(|e| error!("fixture check failed: {e}"))?;
        info!(languages = checked, "all fixtures verified");
        return Ok(());
    }

    let written = Fetcher::new(&config)?
        .run(&config.entries)
        .await
        .inspect_err(|e| error!("run aborted: {e}"))?;
    info!(languages = written, out_dir = %config.out_dir.display(), "done");
    Ok(())
}
