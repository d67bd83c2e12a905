//! Vitals - Layer 3 of the stat system.
//!
//! Max HP is never stored as truth: it is base max HP plus the live `Health`
//! delta. Current health IS stored and must be clamped whenever the cap
//! shrinks below it.

use super::live::LiveStats;
use crate::config::EngineConfig;

/// Current health against its effective cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Vitals {
    pub health: i32,
    pub max_hp: i32,
}

impl Vitals {
    pub const fn new(health: i32, max_hp: i32) -> Self {
        Self { health, max_hp }
    }

    /// Recomputes max HP from `live` and clamps `health` down to it.
    ///
    /// Health is never raised: losing a debuff does not heal.
    pub fn reconcile(
        base_max_hp: i32,
        live: &LiveStats,
        health: i32,
        config: &EngineConfig,
    ) -> VitalsUpdate {
        let max_hp = live.effective_max_hp(base_max_hp, config);
        let clamped = health > max_hp;

        VitalsUpdate {
            vitals: Self {
                health: health.min(max_hp),
                max_hp,
            },
            previous_health: health,
            clamped,
        }
    }
}

/// Result of a vitals reconciliation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VitalsUpdate {
    pub vitals: Vitals,
    pub previous_health: i32,
    /// True when health was lowered to the new cap.
    pub clamped: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::live::LiveStatValue;

    fn health_buff(delta: i32) -> LiveStats {
        let mut live = LiveStats::new();
        live.insert("Health", LiveStatValue::Number(delta));
        live
    }

    #[test]
    fn buff_raises_cap_without_healing() {
        let update = Vitals::reconcile(15, &health_buff(10), 12, &EngineConfig::default());

        assert_eq!(update.vitals, Vitals::new(12, 25));
        assert!(!update.clamped);
    }

    #[test]
    fn health_clamps_when_buff_expires() {
        // Character at 23/25 while buffed; buff gone → cap back to 15
        let update = Vitals::reconcile(15, &LiveStats::new(), 23, &EngineConfig::default());

        assert_eq!(update.vitals, Vitals::new(15, 15));
        assert_eq!(update.previous_health, 23);
        assert!(update.clamped);
    }

    #[test]
    fn debuff_shrinks_cap_and_clamps() {
        let update = Vitals::reconcile(15, &health_buff(-5), 14, &EngineConfig::default());

        assert_eq!(update.vitals, Vitals::new(10, 10));
        assert!(update.clamped);
    }

    #[test]
    fn negative_health_is_untouched() {
        let update = Vitals::reconcile(15, &LiveStats::new(), -3, &EngineConfig::default());

        assert_eq!(update.vitals.health, -3);
        assert!(!update.clamped);
    }
}
