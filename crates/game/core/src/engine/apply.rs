use chrono::{DateTime, Utc};

use crate::effect::{ActiveEffect, EffectError};
use crate::env::EffectOracle;
use crate::state::CharacterEffects;

use super::{EffectEngine, EffectPass, EffectUpdate};

/// Effect application methods for EffectEngine.
impl<'a, C> EffectEngine<'a, C>
where
    C: EffectOracle + ?Sized,
{
    /// Instantiates catalog entry `effect_id` on the character.
    ///
    /// An already active instance of the same id is replaced and reported as
    /// removed, so reapplying refreshes the countdown. Applying does not use a
    /// turn.
    pub fn apply(
        &self,
        character: &CharacterEffects,
        effect_id: &str,
        caster: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<EffectUpdate, EffectError> {
        let definition =
            self.catalog
                .definition(effect_id)
                .ok_or_else(|| EffectError::UnknownEffect {
                    effect_id: effect_id.to_string(),
                })?;
        let applied = ActiveEffect::from_definition(definition, caster, now);

        let (removed, mut effects): (Vec<_>, Vec<_>) = character
            .active_effects
            .iter()
            .cloned()
            .partition(|effect| effect.effect_id == effect_id);
        effects.push(applied.clone());

        let mut update = self.finish(character, EffectPass { effects, removed });
        update.applied = Some(applied);
        Ok(update)
    }
}
