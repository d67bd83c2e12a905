//! Turn/scene processing for active effects.
//!
//! The [`EffectEngine`] is a pure reducer over a [`CharacterEffects`]
//! snapshot. Each operation produces an [`EffectUpdate`] holding the new
//! effect list, the recomputed live stats and the reconciled vitals; the host
//! persists all three together or not at all.
//!
//! Lifecycle handled here:
//!
//! ```text
//! Active(turns:N) --turn-used--> Active(turns:N-1) --...--> removed
//! Active(scene)   --scene-end--> removed
//! Active(turns:*) --scene-end--> removed
//! Active(scene)   --self-deactivate--> removed, then turn-used on siblings
//! Active(permanent) is only ever removed by the host
//! ```

mod apply;
mod deactivate;
mod scene;
mod turns;

pub use deactivate::{Deactivation, deactivate_effect};
pub use scene::clear_scene_effects;
pub use turns::process_turn;

use crate::config::EngineConfig;
use crate::effect::ActiveEffect;
use crate::env::EffectOracle;
use crate::state::CharacterEffects;
use crate::stats::{LiveStats, Vitals, VitalsUpdate};

/// Result of one list transformation: what stayed and what was dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectPass {
    pub effects: Vec<ActiveEffect>,
    pub removed: Vec<ActiveEffect>,
}

impl EffectPass {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// Recomputes live stats for an effect list.
///
/// Base attributes are not folded into the map: live stats hold modifiers
/// only. Use [`crate::stats::EffectiveAttributes`] for the combined view.
pub fn recalculate_live_stats<C>(effects: &[ActiveEffect], catalog: &C) -> LiveStats
where
    C: EffectOracle + ?Sized,
{
    LiveStats::recalculate(effects, catalog)
}

/// Everything the host must persist after an engine operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectUpdate {
    pub active_effects: Vec<ActiveEffect>,
    /// Every effect that left the list, including a deactivated one.
    pub removed: Vec<ActiveEffect>,
    /// Set by self-deactivation.
    pub deactivated: Option<ActiveEffect>,
    /// Set by effect application.
    pub applied: Option<ActiveEffect>,
    pub live_stats: LiveStats,
    pub vitals: VitalsUpdate,
}

impl EffectUpdate {
    pub fn effects_removed(&self) -> usize {
        self.removed.len()
    }

    pub fn effects_remaining(&self) -> usize {
        self.active_effects.len()
    }

    pub fn health_clamped(&self) -> bool {
        self.vitals.clamped
    }
}

/// Effect engine bound to a read-only catalog.
///
/// All operations are pure: the input snapshot is never mutated, and a
/// failed precondition leaves nothing to persist.
pub struct EffectEngine<'a, C>
where
    C: EffectOracle + ?Sized,
{
    catalog: &'a C,
    config: EngineConfig,
}

impl<'a, C> EffectEngine<'a, C>
where
    C: EffectOracle + ?Sized,
{
    pub fn new(catalog: &'a C, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a C {
        self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Recomputes live stats and vitals without changing the effect list.
    pub fn refresh(&self, character: &CharacterEffects) -> EffectUpdate {
        self.finish(
            character,
            EffectPass {
                effects: character.active_effects.clone(),
                removed: Vec::new(),
            },
        )
    }

    /// Derives live stats and vitals for the post-operation list.
    fn finish(&self, character: &CharacterEffects, pass: EffectPass) -> EffectUpdate {
        let live_stats = recalculate_live_stats(&pass.effects, self.catalog);
        let vitals = Vitals::reconcile(
            character.attributes.max_hp,
            &live_stats,
            character.health,
            &self.config,
        );

        EffectUpdate {
            active_effects: pass.effects,
            removed: pass.removed,
            deactivated: None,
            applied: None,
            live_stats,
            vitals,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::effect::{ActiveEffect, EffectDuration, EffectLifetime};
    use crate::env::{EffectDefinition, EffectOracle};

    pub struct TestCatalog(pub Vec<EffectDefinition>);

    impl EffectOracle for TestCatalog {
        fn definition(&self, effect_id: &str) -> Option<&EffectDefinition> {
            self.0.iter().find(|definition| definition.id == effect_id)
        }

        fn all_definitions(&self) -> Vec<&EffectDefinition> {
            self.0.iter().collect()
        }
    }

    /// scene_ward (scene, Health +10), haste (turns:3), daze (turns:1),
    /// blessing (permanent, Perception +1), rage (scene, Strength_rollbonus +2).
    pub fn catalog() -> TestCatalog {
        TestCatalog(vec![
            EffectDefinition::new("scene_ward", "Scene Ward", EffectDuration::Scene)
                .with_delta("Health", 10),
            EffectDefinition::new("haste", "Haste", EffectDuration::Turns(3))
                .with_delta("Dexterity_rollbonus", 1),
            EffectDefinition::new("daze", "Daze", EffectDuration::Turns(1)).with_flag("stun", "dazed"),
            EffectDefinition::new("blessing", "Blessing", EffectDuration::Permanent)
                .with_delta("Perception", 1),
            EffectDefinition::new("rage", "Rage", EffectDuration::Scene)
                .with_delta("Strength_rollbonus", 2),
        ])
    }

    pub fn scene(id: &str) -> ActiveEffect {
        ActiveEffect::new(id, id, EffectLifetime::Scene)
    }

    pub fn turns(id: &str, total: u32, left: u32) -> ActiveEffect {
        ActiveEffect::new(id, id, EffectLifetime::Turns { total, left })
    }

    pub fn permanent(id: &str) -> ActiveEffect {
        ActiveEffect::new(id, id, EffectLifetime::Permanent)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::stats::BaseAttributes;

    #[test]
    fn refresh_recomputes_without_touching_list() {
        let catalog = catalog();
        let engine = EffectEngine::new(&catalog, EngineConfig::default());
        let character = CharacterEffects::new(
            BaseAttributes::default(),
            20,
            vec![scene("scene_ward"), permanent("blessing")],
        );

        let update = engine.refresh(&character);

        assert_eq!(update.active_effects, character.active_effects);
        assert_eq!(update.effects_removed(), 0);
        assert_eq!(update.live_stats.health_delta(), 10);
        assert_eq!(update.live_stats.number("Perception"), Some(1));
        assert_eq!(update.vitals.vitals, Vitals::new(20, 25));
    }
}
