//! Damage application.

/// Health and endurance of a fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    pub health: u32,
    pub endurance: u32,
}

impl Vitals {
    pub const fn new(health: u32, endurance: u32) -> Self {
        Self { health, endurance }
    }

    /// Both pools are empty; the fighter has lost the round.
    pub const fn is_depleted(&self) -> bool {
        self.health == 0 && self.endurance == 0
    }
}

/// Hit reaction chosen after damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageEffect {
    /// Health and endurance both remain; the defender recoils.
    Recoil,
    /// Endurance is gone but health remains.
    Stunned,
    /// Both pools are empty.
    Defeated,
}

/// Splits `amount` evenly between health and endurance.
///
/// Each pool loses half the damage rounded up (so an odd amount behaves as
/// the fractional half truncated after subtraction) and is clamped at 0.
pub fn apply_damage(vitals: Vitals, amount: u32) -> (Vitals, DamageEffect) {
    let half = amount.div_ceil(2);
    let after = Vitals {
        health: vitals.health.saturating_sub(half),
        endurance: vitals.endurance.saturating_sub(half),
    };
    let effect = if after.is_depleted() {
        DamageEffect::Defeated
    } else if after.endurance == 0 {
        DamageEffect::Stunned
    } else {
        DamageEffect::Recoil
    };
    (after, effect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_damage_across_both_pools() {
        let (after, effect) = apply_damage(Vitals::new(10, 10), 6);
        assert_eq!(after, Vitals::new(7, 7));
        assert_eq!(effect, DamageEffect::Recoil);
    }

    #[test]
    fn odd_damage_rounds_the_loss_up() {
        let (after, _) = apply_damage(Vitals::new(10, 10), 5);
        assert_eq!(after, Vitals::new(7, 7));
    }

    #[test]
    fn pools_clamp_at_zero() {
        let (after, effect) = apply_damage(Vitals::new(3, 40), 20);
        assert_eq!(after, Vitals::new(0, 30));
        assert_eq!(effect, DamageEffect::Recoil);

        let (after, effect) = apply_damage(Vitals::new(40, 3), 20);
        assert_eq!(after, Vitals::new(30, 0));
        assert_eq!(effect, DamageEffect::Stunned);

        let (after, effect) = apply_damage(Vitals::new(2, 4), 100);
        assert!(after.is_depleted());
        assert_eq!(effect, DamageEffect::Defeated);
    }

    #[test]
    fn damage_never_increases_a_pool() {
        let mut vitals = Vitals::new(50, 45);
        for amount in [0, 1, 7, 13, 2, 90, 4] {
            let (after, _) = apply_damage(vitals, amount);
            assert!(after.health <= vitals.health);
            assert!(after.endurance <= vitals.endurance);
            vitals = after;
        }
        assert!(vitals.is_depleted());
    }
}
