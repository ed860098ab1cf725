//! Positor - chat quiz bot front-end.
//!
//! Wires the game engine to a console transport: loads config, builds the
//! ontology and the shared session store, then hands off to the REPL.

mod config;
mod parser;
mod repl;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use positor_core::ontology::Ontology;
use positor_core::session::{create_seeded_store, create_shared_store};

#[derive(Parser)]
#[command(name = "positord")]
#[command(about = "Positor - a quiz bot over categorical statements", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Path to config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the statement generator for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("positord v{} starting", env!("CARGO_PKG_VERSION"));

    let config = config::BotConfig::load(args.config.as_deref())?;

    let ontology = match &config.ontology_path {
        Some(path) => Arc::new(
            Ontology::from_path(path)
                .with_context(|| format!("loading ontology from {}", path.display()))?,
        ),
        None => Arc::new(Ontology::builtin()),
    };
    info!("Ontology loaded: {} terms", ontology.len());

    if config::transport_token().is_none() {
        info!(
            "{} not set; running the console transport only",
            config::TOKEN_ENV
        );
    }

    let store = match args.seed {
        Some(seed) => {
            info!("Statement generator seeded with {}", seed);
            create_seeded_store(ontology, seed)
        }
        None => create_shared_store(ontology),
    };

    repl::run(store, &config).await
}
