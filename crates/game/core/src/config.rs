/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Lower bound for a character's effective maximum HP.
    ///
    /// Negative `Health` deltas can never push the cap below this value.
    pub min_max_hp: i32,

    /// Whether ending a scene also strips turn-based effects.
    ///
    /// Enabled by default: end of scene resets every temporary effect and
    /// leaves only permanent ones.
    pub clear_turn_effects_on_scene_end: bool,
}

impl EngineConfig {
    // ===== wire constants =====
    /// `turnsLeft` value stored for scene effects. Never decremented.
    pub const SCENE_TURNS_SENTINEL: u32 = 999;
    /// Stat key whose numeric delta modifies maximum HP.
    pub const HEALTH_STAT: &'static str = "Health";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MIN_MAX_HP: i32 = 1;

    pub fn new() -> Self {
        Self {
            min_max_hp: Self::DEFAULT_MIN_MAX_HP,
            clear_turn_effects_on_scene_end: true,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
