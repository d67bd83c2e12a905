use crate::config::EngineConfig;
use crate::effect::{ActiveEffect, DurationClass};
use crate::env::EffectOracle;
use crate::state::CharacterEffects;

use super::{EffectEngine, EffectPass, EffectUpdate};

/// Ends the current scene.
///
/// Removes every effect whose stored lifetime or catalog entry is scene
/// scoped. Turn-based effects are removed as well unless
/// `config.clear_turn_effects_on_scene_end` is off. Permanent effects always
/// survive.
pub fn clear_scene_effects<C>(
    effects: &[ActiveEffect],
    catalog: &C,
    config: &EngineConfig,
) -> EffectPass
where
    C: EffectOracle + ?Sized,
{
    let (removed, effects): (Vec<_>, Vec<_>) = effects
        .iter()
        .cloned()
        .partition(|effect| ends_with_scene(effect, catalog, config));

    EffectPass { effects, removed }
}

fn ends_with_scene<C>(effect: &ActiveEffect, catalog: &C, config: &EngineConfig) -> bool
where
    C: EffectOracle + ?Sized,
{
    if catalog.duration_class(&effect.effect_id) == Some(DurationClass::Scene) {
        return true;
    }

    match effect.class() {
        DurationClass::Scene => true,
        DurationClass::Turns => config.clear_turn_effects_on_scene_end,
        DurationClass::Permanent => false,
    }
}

/// Scene processing methods for EffectEngine.
impl<'a, C> EffectEngine<'a, C>
where
    C: EffectOracle + ?Sized,
{
    /// Applies a `scene-end` transition and clamps health to the new cap.
    pub fn end_scene(&self, character: &CharacterEffects) -> EffectUpdate {
        let pass = clear_scene_effects(&character.active_effects, self.catalog, &self.config);
        self.finish(character, pass)
    }
}
