//! Subcommands of the `arkana` binary.

mod characters;
mod effects;

pub use characters::{Catalog, List, Seed, Show};
pub use effects::{Apply, Deactivate, EndScene, Refresh, Turn};

use anyhow::Result;
use console::style;

use arkana_content::ContentFactory;
use arkana_runtime::{EffectReport, EffectService};

/// Output format shared by every subcommand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Summary,
    /// camelCase JSON, as a request handler would return it
    Json,
}

/// Everything a subcommand needs.
pub struct Context {
    pub service: EffectService,
    pub content: ContentFactory,
    pub format: OutputFormat,
}

impl Context {
    /// Print `value` as JSON, or run `summary` for the summary format.
    pub fn emit<T: serde::Serialize>(&self, value: &T, summary: impl FnOnce(&T)) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Summary => summary(value),
        }
        Ok(())
    }

    pub fn emit_report(&self, report: &EffectReport) -> Result<()> {
        self.emit(report, |report| {
            println!("{}", style(report.message()).bold());
            if !report.removed.is_empty() {
                println!("  removed: {}", report.removed.join(", "));
            }
        })
    }
}
