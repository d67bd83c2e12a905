//! Caller-visible results of effect operations.

use arkana_core::{
    ActiveEffect, BaseAttributes, CharacterId, EffectUpdate, EffectiveAttributes, EngineConfig,
    LiveStats, Universe,
};
use serde::Serialize;

use crate::repository::{CharacterRecord, CharacterStats};

/// What a request handler reports after a committed effect update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectReport {
    pub character_id: CharacterId,
    pub effects_removed: usize,
    pub effects_remaining: usize,
    /// Name of the self-deactivated effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivated: Option<String>,
    /// Name of the newly applied effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied: Option<String>,
    /// Names of every removed effect, deactivated one included.
    pub removed: Vec<String>,
    pub max_hp: i32,
    pub health: i32,
    pub health_clamped: bool,
    pub version: u64,
}

impl EffectReport {
    pub fn new(character_id: CharacterId, update: &EffectUpdate, version: u64) -> Self {
        Self {
            character_id,
            effects_removed: update.effects_removed(),
            effects_remaining: update.effects_remaining(),
            deactivated: update.deactivated.as_ref().map(|effect| effect.name.clone()),
            applied: update.applied.as_ref().map(|effect| effect.name.clone()),
            removed: update.removed.iter().map(|effect| effect.name.clone()).collect(),
            max_hp: update.vitals.vitals.max_hp,
            health: update.vitals.vitals.health,
            health_clamped: update.health_clamped(),
            version,
        }
    }

    /// Folds a later report for the same character into this one.
    ///
    /// Removals accumulate; remaining count, vitals and version come from
    /// `later`.
    pub fn absorb(&mut self, later: EffectReport) {
        self.effects_removed += later.effects_removed;
        self.removed.extend(later.removed);
        self.effects_remaining = later.effects_remaining;
        self.deactivated = later.deactivated.or(self.deactivated.take());
        self.applied = later.applied.or(self.applied.take());
        self.max_hp = later.max_hp;
        self.health = later.health;
        self.health_clamped |= later.health_clamped;
        self.version = later.version;
    }

    /// One-line summary for chat-style clients.
    pub fn message(&self) -> String {
        let mut message = match (&self.deactivated, &self.applied) {
            (Some(name), _) => format!("{name} deactivated."),
            (None, Some(name)) => format!("{name} applied."),
            (None, None) => String::from("Effects updated."),
        };
        message.push_str(&format!(
            " {} removed, {} remaining. HP {}/{}",
            self.effects_removed, self.effects_remaining, self.health, self.max_hp
        ));
        if self.health_clamped {
            message.push_str(" (clamped)");
        }
        message
    }
}

/// Read view of a stored character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheet {
    pub id: CharacterId,
    pub name: String,
    pub universe: Universe,
    pub attributes: BaseAttributes,
    pub effective: EffectiveAttributes,
    pub stats: CharacterStats,
    pub active_effects: Vec<ActiveEffect>,
    pub live_stats: LiveStats,
    pub version: u64,
}

impl CharacterSheet {
    pub fn new(record: CharacterRecord, config: &EngineConfig) -> Self {
        let effective =
            EffectiveAttributes::compute(&record.attributes, &record.live_stats, config);
        Self {
            id: record.id,
            name: record.name,
            universe: record.universe,
            attributes: record.attributes,
            effective,
            stats: record.stats,
            active_effects: record.active_effects,
            live_stats: record.live_stats,
            version: record.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(removed: &[&str], remaining: usize, health: i32, version: u64) -> EffectReport {
        EffectReport {
            character_id: CharacterId(1),
            effects_removed: removed.len(),
            effects_remaining: remaining,
            deactivated: None,
            applied: None,
            removed: removed.iter().map(|name| name.to_string()).collect(),
            max_hp: 15,
            health,
            health_clamped: false,
            version,
        }
    }

    #[test]
    fn absorb_accumulates_removals_across_turns() {
        let mut total = report(&["Daze"], 2, 15, 4);
        total.absorb(report(&[], 2, 15, 5));
        total.absorb(report(&["Haste"], 1, 12, 6));

        assert_eq!(total.effects_removed, 2);
        assert_eq!(total.removed, vec!["Daze", "Haste"]);
        assert_eq!(total.effects_remaining, 1);
        assert_eq!(total.health, 12);
        assert_eq!(total.version, 6);
    }

    #[test]
    fn absorb_keeps_clamp_and_deactivation() {
        let mut total = report(&["Ward"], 0, 15, 1);
        total.deactivated = Some("Ward".into());
        total.health_clamped = true;
        total.absorb(report(&[], 0, 15, 2));

        assert!(total.health_clamped);
        assert_eq!(total.deactivated.as_deref(), Some("Ward"));
    }
}
