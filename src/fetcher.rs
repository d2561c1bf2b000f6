use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::config::Config;
use crate::fixture::{self, FixtureError};
use crate::languages::Entry;
use crate::summary::{SummaryClient, SummaryError};

/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Global HTTP client timeout covering DNS + connect + response body.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
/// Maximum redirect hops before aborting.
const MAX_REDIRECTS: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),
}

/// Walks the language table one entry at a time: fetch, write, pause.
///
/// The first error stops the run. Files written for earlier entries are kept;
/// nothing is written for the failing entry or any entry after it.
pub struct Fetcher {
    client: SummaryClient,
    out_dir: PathBuf,
    delay: Duration,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(HTTP_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self::with_client(
            SummaryClient::new(http, config.endpoint.clone()),
            config.out_dir.clone(),
            config.delay,
        ))
    }

    pub fn with_client(client: SummaryClient, out_dir: PathBuf, delay: Duration) -> Self {
        Self {
            client,
            out_dir,
            delay,
        }
    }

    /// Processes `entries` in order. Returns how many languages were written.
    pub async fn run(&self, entries: &[Entry]) -> Result<usize, RunError> {
        for entry in entries {
            self.process(entry).await?;
            debug!(delay_ms = self.delay.as_millis() as u64, "throttling");
            tokio::time::sleep(self.delay).await;
        }
        Ok(entries.len())
    }

    async fn process(&self, entry: &Entry) -> Result<usize, RunError> {
        let extract = self.client.fetch_extract(entry).await?;
        Ok(fixture::write_all(&self.out_dir, entry.lang, &extract)?)
    }
}

/// Verifies the fixtures of every entry without touching the network.
pub fn check(out_dir: &Path, entries: &[Entry]) -> Result<usize, FixtureError> {
    for entry in entries {
        let chars = fixture::verify(out_dir, entry.lang)?;
        info!(lang = entry.lang, chars, "fixture ok");
    }
    Ok(entries.len())
}
