use crate::effect::{ActiveEffect, DurationClass, EffectError};
use crate::env::EffectOracle;
use crate::state::CharacterEffects;

use super::{EffectEngine, EffectPass, EffectUpdate, process_turn};

/// Outcome of a successful self-deactivation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deactivation {
    /// The cancelled effect, for response messaging.
    pub effect: ActiveEffect,
    /// Remaining effects after the consumed turn.
    pub effects: Vec<ActiveEffect>,
    /// Siblings that expired during the consumed turn.
    pub expired: Vec<ActiveEffect>,
}

/// Cancels one scene effect on behalf of `requester`.
///
/// Checks, in order: the id is active (first match wins), the effect is
/// scene scoped, and it was not cast by someone else. On success the effect
/// is removed and the remainder goes through [`process_turn`].
pub fn deactivate_effect<C>(
    effects: &[ActiveEffect],
    effect_id: &str,
    requester: &str,
    catalog: &C,
) -> Result<Deactivation, EffectError>
where
    C: EffectOracle + ?Sized,
{
    let index = effects
        .iter()
        .position(|effect| effect.effect_id == effect_id)
        .ok_or_else(|| EffectError::NotFound {
            effect_id: effect_id.to_string(),
        })?;
    let effect = &effects[index];

    let class = catalog
        .duration_class(effect_id)
        .unwrap_or_else(|| effect.class());
    if class != DurationClass::Scene {
        return Err(EffectError::InvalidState {
            effect_id: effect_id.to_string(),
            class,
        });
    }

    if let Some(caster) = effect.caster.as_deref().filter(|_| effect.is_cast_by_other(requester)) {
        return Err(EffectError::Forbidden {
            effect_id: effect_id.to_string(),
            caster: caster.to_string(),
        });
    }

    let mut remaining = effects.to_vec();
    let effect = remaining.remove(index);
    let pass = process_turn(&remaining);

    Ok(Deactivation {
        effect,
        effects: pass.effects,
        expired: pass.removed,
    })
}

/// Self-deactivation methods for EffectEngine.
impl<'a, C> EffectEngine<'a, C>
where
    C: EffectOracle + ?Sized,
{
    /// Applies a `self-deactivate` transition.
    ///
    /// On error nothing has changed and nothing should be persisted.
    pub fn deactivate(
        &self,
        character: &CharacterEffects,
        effect_id: &str,
        requester: &str,
    ) -> Result<EffectUpdate, EffectError> {
        let Deactivation {
            effect,
            effects,
            expired,
        } = deactivate_effect(&character.active_effects, effect_id, requester, self.catalog)?;

        let mut removed = Vec::with_capacity(expired.len() + 1);
        removed.push(effect.clone());
        removed.extend(expired);

        let mut update = self.finish(character, EffectPass { effects, removed });
        update.deactivated = Some(effect);
        Ok(update)
    }
}
