use crate::effect::{ActiveEffect, EffectLifetime};
use crate::env::EffectOracle;
use crate::state::CharacterEffects;

use super::{EffectEngine, EffectPass, EffectUpdate};

/// Consumes one turn: every turn-based effect counts down by one and is
/// dropped on reaching zero.
///
/// Scene and permanent effects pass through unchanged; the scene
/// `turnsLeft` sentinel is never decremented.
pub fn process_turn(effects: &[ActiveEffect]) -> EffectPass {
    let mut pass = EffectPass::default();

    for effect in effects {
        match effect.lifetime {
            EffectLifetime::Turns { total, left } => {
                let left = left.saturating_sub(1);
                if left == 0 {
                    pass.removed.push(effect.clone());
                } else {
                    let mut decayed = effect.clone();
                    decayed.lifetime = EffectLifetime::Turns { total, left };
                    pass.effects.push(decayed);
                }
            }
            EffectLifetime::Scene | EffectLifetime::Permanent => {
                pass.effects.push(effect.clone());
            }
        }
    }

    pass
}

/// Turn processing methods for EffectEngine.
impl<'a, C> EffectEngine<'a, C>
where
    C: EffectOracle + ?Sized,
{
    /// Applies a `turn-used` transition to the whole effect list.
    pub fn use_turn(&self, character: &CharacterEffects) -> EffectUpdate {
        let pass = process_turn(&character.active_effects);
        self.finish(character, pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::test_support::*;
    use crate::stats::BaseAttributes;

    #[test]
    fn expiring_effect_is_dropped_and_sibling_decays() {
        let pass = process_turn(&[turns("haste", 3, 3), turns("daze", 1, 1)]);

        assert_eq!(pass.removed_count(), 1);
        assert_eq!(pass.removed[0].effect_id, "daze");
        assert_eq!(pass.effects.len(), 1);
        assert_eq!(pass.effects[0].lifetime.turns_left(), Some(2));
    }

    #[test]
    fn scene_and_permanent_effects_never_decay() {
        let input = vec![scene("scene_ward"), permanent("blessing")];
        let mut effects = input.clone();
        for _ in 0..5 {
            effects = process_turn(&effects).effects;
        }

        assert_eq!(effects, input);
    }

    #[test]
    fn stale_zero_countdown_is_removed() {
        let pass = process_turn(&[turns("haste", 3, 0)]);

        assert!(pass.effects.is_empty());
        assert_eq!(pass.removed_count(), 1);
    }

    #[test]
    fn input_list_is_not_modified() {
        let input = vec![turns("haste", 3, 2)];
        let _ = process_turn(&input);

        assert_eq!(input[0].lifetime.turns_left(), Some(2));
    }

    #[test]
    fn use_turn_recomputes_live_stats() {
        let catalog = catalog();
        let engine = EffectEngine::new(&catalog, EngineConfig::default());
        let character = CharacterEffects::new(
            BaseAttributes::default(),
            15,
            vec![turns("daze", 1, 1), turns("haste", 3, 2)],
        );

        let update = engine.use_turn(&character);

        assert_eq!(update.effects_removed(), 1);
        assert_eq!(update.effects_remaining(), 1);
        assert!(!update.live_stats.has_flag("stun", "dazed"));
        assert_eq!(update.live_stats.number("Dexterity_rollbonus"), Some(1));
    }
}
