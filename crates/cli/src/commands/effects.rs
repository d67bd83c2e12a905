//! Effect lifecycle commands.

use anyhow::Result;
use arkana_core::CharacterId;
use arkana_runtime::EffectReport;
use clap::Parser;

use super::Context;

/// Apply a catalog effect to a character
#[derive(Parser)]
pub struct Apply {
    /// Character id
    #[arg(value_name = "ID")]
    id: u64,

    /// Catalog effect id (see `arkana catalog`)
    #[arg(value_name = "EFFECT")]
    effect_id: String,

    /// Name of the casting character (omit for self-cast)
    #[arg(short, long, value_name = "NAME")]
    caster: Option<String>,
}

impl Apply {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let report =
            ctx.service
                .apply(CharacterId(self.id), &self.effect_id, self.caster.as_deref())?;
        ctx.emit_report(&report)
    }
}

/// Use one or more turns: turn-based effects count down
#[derive(Parser)]
pub struct Turn {
    /// Character id
    #[arg(value_name = "ID")]
    id: u64,

    /// Number of turns to consume
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,
}

impl Turn {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let id = CharacterId(self.id);
        let mut total: Option<EffectReport> = None;

        for turn in 1..=self.count {
            match ctx.service.use_turn(id) {
                Ok(report) => match total.as_mut() {
                    Some(total) => total.absorb(report),
                    None => total = Some(report),
                },
                Err(err) => {
                    // Earlier turns are already committed
                    if let Some(total) = &total {
                        ctx.emit_report(total)?;
                    }
                    let count = self.count;
                    return Err(anyhow::Error::from(err).context(format!("turn {turn} of {count} failed")));
                }
            }
        }

        match total {
            Some(total) => ctx.emit_report(&total),
            None => Ok(()),
        }
    }
}

/// End the scene: clear every temporary effect
#[derive(Parser)]
pub struct EndScene {
    /// Character id
    #[arg(value_name = "ID")]
    id: u64,
}

impl EndScene {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let report = ctx.service.end_scene(CharacterId(self.id))?;
        ctx.emit_report(&report)
    }
}

/// Cancel one of the character's own scene effects (uses a turn)
#[derive(Parser)]
pub struct Deactivate {
    /// Character id
    #[arg(value_name = "ID")]
    id: u64,

    /// Active effect id
    #[arg(value_name = "EFFECT")]
    effect_id: String,

    /// Requester name (defaults to the character's own name)
    #[arg(long = "as", value_name = "NAME")]
    requester: Option<String>,
}

impl Deactivate {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let id = CharacterId(self.id);
        let report = match self.requester.as_deref() {
            Some(requester) => ctx.service.deactivate(id, &self.effect_id, requester)?,
            None => ctx.service.deactivate_own(id, &self.effect_id)?,
        };
        ctx.emit_report(&report)
    }
}

/// Recompute cached live stats after a catalog change
#[derive(Parser)]
pub struct Refresh {
    /// Character id
    #[arg(value_name = "ID")]
    id: u64,
}

impl Refresh {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let report = ctx.service.refresh(CharacterId(self.id))?;
        ctx.emit_report(&report)
    }
}
