use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordwise_config::store::StoreBackend;

pub mod profile;
pub mod shell;
pub mod state;

#[cfg(test)]
mod tests;

use self::profile::{ConfigSource, load_config};
use self::state::AppState;

#[derive(Parser)]
#[command(name = "wordwise", version, about = "Word-frequency chat agents with plurality voting")]
struct Cli {
    /// JSON config file (defaults to ./wordwise.json when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lexicon store file
    #[arg(long)]
    store: Option<String>,

    /// Keep the lexicon in memory instead of on disk
    #[arg(long)]
    in_memory: bool,

    /// Stopword list, one word per line
    #[arg(long)]
    stopwords: Option<String>,

    /// Turns remembered per agent
    #[arg(long)]
    memory_limit: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let (mut config, source) = load_config(cli.config.as_deref())?;
    if let Some(store) = cli.store {
        config.store.path = store;
    }
    if cli.in_memory {
        config.store.backend = StoreBackend::Memory;
    }
    if let Some(stopwords) = cli.stopwords {
        config.stopwords_path = stopwords;
    }
    if let Some(limit) = cli.memory_limit {
        config.memory_limit = limit;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    match &source {
        ConfigSource::File(path) => tracing::info!("Loaded config from {}", path.display()),
        ConfigSource::Missing(path) => {
            tracing::warn!("Config file {} not found, using defaults", path.display())
        }
        ConfigSource::Defaults => tracing::debug!("No config file, using defaults"),
    }

    let mut state = AppState::new(config)?;
    tracing::info!(
        agents = state.pool.len(),
        memory_limit = state.config.memory_limit,
        "Ready"
    );

    let interactive = atty::is(atty::Stream::Stdin);
    shell::run(&mut state.pool, io::stdin().lock(), io::stdout().lock(), interactive)?;

    tracing::info!("Shutdown requested");
    Ok(())
}
