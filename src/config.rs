use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::languages::{self, Entry};
use crate::summary::DEFAULT_ENDPOINT;

/// Download Wikipedia "water" article summaries and write UTF-8 text fixtures
/// plus their per-character code point listings.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Existing directory the fixture files are written into
    pub out_dir: PathBuf,

    /// Summary URL template with `{lang}` and `{article}` placeholders
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Pause between two languages, in milliseconds
    #[arg(long, default_value_t = 200)]
    pub delay_ms: u64,

    /// Only process this language code (repeatable)
    #[arg(long = "lang", value_name = "CODE")]
    pub langs: Vec<String>,

    /// Verify existing fixtures in OUT_DIR instead of downloading
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("not an existing directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("endpoint template is missing the {0} placeholder")]
    MissingPlaceholder(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub out_dir: PathBuf,
    pub endpoint: String,
    pub delay: Duration,
    pub entries: Vec<Entry>,
    pub check: bool,
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if !cli.out_dir.is_dir() {
            return Err(ConfigError::NotADirectory(cli.out_dir));
        }
        for placeholder in ["{lang}", "{article}"] {
            if !cli.endpoint.contains(placeholder) {
                return Err(ConfigError::MissingPlaceholder(placeholder));
            }
        }
        let entries = languages::select(&cli.langs).map_err(ConfigError::UnknownLanguage)?;

        Ok(Self {
            out_dir: cli.out_dir,
            endpoint: cli.endpoint,
            delay: Duration::from_millis(cli.delay_ms),
            entries,
            check: cli.check,
        })
    }
}
