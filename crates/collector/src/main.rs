mod cmd;
mod lock;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lyricline_core::{load_config, validate_config, CollectionKind, Config};

use lock::LockError;

/// Default config file when neither `--config` nor `LYRICLINE_CONFIG` is set
const DEFAULT_CONFIG_PATH: &str = "lyricline.toml";

#[derive(Parser)]
#[command(name = "lyricline")]
#[command(version, about = "Assemble a text word by word from live posts")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, env = "LYRICLINE_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full collection and rotate the stored collections
    Collect,
    /// Replace the stored word list with the words of a text file
    Ingest {
        /// UTF-8 text file to read
        file: PathBuf,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the items of a collection
    Show {
        /// Collection to print (upcoming, recent, prev)
        #[arg(default_value = "recent")]
        collection: CollectionKind,

        /// Print at most this many items
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Obtain an application-only bearer token from app_key/app_secret
    Token,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.json);

    if let Err(e) = run(cli).await {
        error!("Fatal error: {:#}", e);
        let code = e.downcast_ref::<LockError>().map_or(1, LockError::exit_code);
        std::process::exit(code);
    }
}

fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = load(&config_path)?;

    match cli.command {
        Commands::Collect => cmd::collect::run(&config).await,
        Commands::Ingest { file, yes } => cmd::ingest::run(&config, &file, yes),
        Commands::Show { collection, limit } => cmd::show::run(&config, collection, limit),
        Commands::Token => cmd::token::run(&config).await,
    }
}

fn load(path: &Path) -> Result<Config> {
    info!("Loading configuration from {:?}", path);
    let config =
        load_config(path).with_context(|| format!("Failed to load config from {:?}", path))?;
    validate_config(&config).context("Configuration validation failed")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_defaults() {
        let cli = Cli::try_parse_from(["lyricline", "show"]).unwrap();
        match cli.command {
            Commands::Show { collection, limit } => {
                assert_eq!(collection, CollectionKind::Recent);
                assert_eq!(limit, None);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_parse_ingest_with_global_flags() {
        let cli = Cli::try_parse_from([
            "lyricline",
            "ingest",
            "lyrics.txt",
            "--yes",
            "--config",
            "/etc/lyricline.toml",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/lyricline.toml")));
        match cli.command {
            Commands::Ingest { file, yes } => {
                assert_eq!(file, PathBuf::from("lyrics.txt"));
                assert!(yes);
            }
            _ => panic!("expected ingest"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_collection() {
        assert!(Cli::try_parse_from(["lyricline", "show", "archive"]).is_err());
    }
}
