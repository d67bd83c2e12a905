//! Character and catalog inspection commands.

use anyhow::{Context as _, Result};
use arkana_core::{CharacterId, EffectOracle, LiveStatValue};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use super::Context;
use arkana_content::CharacterLoader;
use arkana_runtime::CharacterSheet;

/// Register characters from a fixture file
#[derive(Parser)]
pub struct Seed {
    /// Fixture file (defaults to `characters.ron` in the data directory)
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,
}

impl Seed {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let templates = match self.file {
            Some(path) => CharacterLoader::load(&path)?,
            None => ctx.content.load_characters()?,
        };

        let mut registered = Vec::with_capacity(templates.len());
        for template in &templates {
            let record = ctx
                .service
                .register(template)
                .with_context(|| format!("Failed to register {}", template.name))?;
            registered.push(CharacterSheet::new(record, &ctx.service.config().engine));
        }

        ctx.emit(&registered, |sheets| {
            for sheet in sheets {
                println!("Registered {} {}", style(sheet.id).cyan(), sheet.name);
            }
        })
    }
}

/// List stored characters
#[derive(Parser)]
pub struct List {}

impl List {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let sheets = ctx.service.characters()?;

        ctx.emit(&sheets, |sheets| {
            if sheets.is_empty() {
                println!("{}", style("No characters stored. Run `arkana seed` first.").dim());
            }
            for sheet in sheets {
                println!(
                    "{} {:<16} {:<7} HP {}/{}  effects: {}",
                    style(sheet.id).cyan(),
                    sheet.name,
                    sheet.universe,
                    sheet.stats.health,
                    sheet.stats.max_hp,
                    sheet.active_effects.len()
                );
            }
        })
    }
}

/// Show one character with active effects and live stats
#[derive(Parser)]
pub struct Show {
    /// Character id
    #[arg(value_name = "ID")]
    id: u64,
}

impl Show {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let sheet = ctx.service.character(CharacterId(self.id))?;
        ctx.emit(&sheet, print_sheet)
    }
}

fn print_sheet(sheet: &CharacterSheet) {
    println!(
        "{} {} ({}, v{})",
        style(sheet.id).cyan(),
        style(&sheet.name).bold(),
        sheet.universe,
        sheet.version
    );
    println!("  HP {}/{}", sheet.stats.health, sheet.stats.max_hp);
    println!(
        "  Physical {}  Dexterity {}  Mental {}  Perception {}",
        sheet.effective.physical,
        sheet.effective.dexterity,
        sheet.effective.mental,
        sheet.effective.perception
    );

    println!("{}", style("Active effects").underlined());
    if sheet.active_effects.is_empty() {
        println!("  {}", style("none").dim());
    }
    for effect in &sheet.active_effects {
        let remaining = effect
            .lifetime
            .turns_left()
            .map(|left| format!(", {left} turns left"))
            .unwrap_or_default();
        let caster = effect
            .caster
            .as_deref()
            .map(|caster| format!(", cast by {caster}"))
            .unwrap_or_default();
        println!(
            "  {} [{}] {}{}{}",
            effect.name,
            effect.effect_id,
            effect.class(),
            remaining,
            caster
        );
    }

    println!("{}", style("Live stats").underlined());
    if sheet.live_stats.is_empty() {
        println!("  {}", style("none").dim());
    }
    for (stat, value) in sheet.live_stats.iter() {
        match value {
            LiveStatValue::Number(delta) => println!("  {stat}: {delta:+}"),
            LiveStatValue::Flags(flags) => {
                let flags: Vec<_> = flags.iter().map(String::as_str).collect();
                println!("  {stat}: {}", flags.join(", "));
            }
        }
    }
}

/// List the effect catalog
#[derive(Parser)]
pub struct Catalog {}

impl Catalog {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let definitions = ctx.service.oracles().effects().all_definitions();

        ctx.emit(&definitions, |definitions| {
            for definition in definitions {
                println!(
                    "{:<24} {:<16} {:<10} {}",
                    style(&definition.id).cyan(),
                    definition.name,
                    definition.duration,
                    definition.target
                );
            }
        })
    }
}
