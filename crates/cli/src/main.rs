//! Arkana effect engine command-line client.
//!
//! Drives the effect service against a file repository so turns, scene ends
//! and deactivations can be exercised outside the bot.
//!
//! # Examples
//!
//! ```bash
//! arkana seed
//! arkana apply 1 arkana_stoneskin
//! arkana turn 1 -n 2
//! arkana deactivate 1 arkana_stoneskin
//! arkana --format json show 1
//! ```

mod commands;
mod config;
mod dirs;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;

use arkana_content::ContentFactory;
use arkana_runtime::{EffectService, FileCharacterRepository, OracleManager};
use commands::{
    Apply, Catalog, Context, Deactivate, EndScene, List, OutputFormat, Refresh, Seed, Show, Turn,
};
use config::CliConfig;

/// Arkana/Gor effect and live-stat engine
#[derive(Parser)]
#[command(name = "arkana")]
#[command(about = "Apply, decay and clear roleplay effects", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (overrides ARKANA_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Character record directory (overrides ARKANA_SAVE_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "summary")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Register characters from the fixture file
    Seed(Seed),

    /// List stored characters
    List(List),

    /// Show one character
    Show(Show),

    /// List the effect catalog
    Catalog(Catalog),

    /// Apply a catalog effect
    Apply(Apply),

    /// Use turns
    Turn(Turn),

    /// End the scene
    EndScene(EndScene),

    /// Cancel an own scene effect
    Deactivate(Deactivate),

    /// Recompute cached live stats
    Refresh(Refresh),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env();

    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    let ctx = build_context(&cli, &config)?;

    let result = match cli.command {
        Command::Seed(cmd) => cmd.execute(&ctx),
        Command::List(cmd) => cmd.execute(&ctx),
        Command::Show(cmd) => cmd.execute(&ctx),
        Command::Catalog(cmd) => cmd.execute(&ctx),
        Command::Apply(cmd) => cmd.execute(&ctx),
        Command::Turn(cmd) => cmd.execute(&ctx),
        Command::EndScene(cmd) => cmd.execute(&ctx),
        Command::Deactivate(cmd) => cmd.execute(&ctx),
        Command::Refresh(cmd) => cmd.execute(&ctx),
    };

    result.inspect_err(|err| tracing::warn!("Command failed: {:#}", err))
}

/// Composition root: content, oracles, repository, service.
fn build_context(cli: &Cli, config: &CliConfig) -> Result<Context> {
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(|| PathBuf::from("data"));
    let save_dir = cli
        .save_dir
        .clone()
        .or_else(|| config.save_dir.clone())
        .unwrap_or_else(dirs::save_dir);

    let content = ContentFactory::new(data_dir);
    let engine_config = content.load_config()?;
    let definitions = content.load_effects()?;
    tracing::info!(
        "Loaded {} effect definitions from {}",
        definitions.len(),
        content.data_dir().display()
    );

    let repository = FileCharacterRepository::new(&save_dir)
        .with_context(|| format!("Failed to open save directory {}", save_dir.display()))?;
    tracing::debug!("Character records in {}", repository.base_dir().display());

    let service = EffectService::builder()
        .config(config.runtime_config(engine_config))
        .oracles(OracleManager::from_definitions(definitions))
        .repository(Arc::new(repository))
        .build()?;

    Ok(Context {
        service,
        content,
        format: cli.format,
    })
}
