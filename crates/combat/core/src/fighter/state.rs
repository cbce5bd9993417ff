//! Combat states and move legality.

use bitflags::bitflags;

use crate::moves::MoveCategory;

/// The single active combat state of a fighter.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CombatState {
    #[default]
    Standing,
    Walking,
    Crouching,
    Jumping,
    /// Hit-stun after non-lethal damage.
    Recoil,
    /// Opponent defeated; only finishing moves remain.
    Victory,
    Scrap,
    Destruction,
}

bitflags! {
    /// Set of [`CombatState`]s, used for transition guards.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StateSet: u8 {
        const STANDING    = 1 << 0;
        const WALKING     = 1 << 1;
        const CROUCHING   = 1 << 2;
        const JUMPING     = 1 << 3;
        const RECOIL      = 1 << 4;
        const VICTORY     = 1 << 5;
        const SCRAP       = 1 << 6;
        const DESTRUCTION = 1 << 7;

        /// States a jump can start from.
        const GROUNDED = Self::STANDING.bits() | Self::WALKING.bits() | Self::CROUCHING.bits();
        /// States that ignore stop/move/crouch reports from physics.
        const LOCKED = Self::RECOIL.bits() | Self::SCRAP.bits() | Self::DESTRUCTION.bits();
        /// States in which movement commands are no longer issued.
        const POST_VICTORY = Self::VICTORY.bits() | Self::SCRAP.bits() | Self::DESTRUCTION.bits();
    }
}

impl CombatState {
    pub const fn flag(self) -> StateSet {
        match self {
            Self::Standing => StateSet::STANDING,
            Self::Walking => StateSet::WALKING,
            Self::Crouching => StateSet::CROUCHING,
            Self::Jumping => StateSet::JUMPING,
            Self::Recoil => StateSet::RECOIL,
            Self::Victory => StateSet::VICTORY,
            Self::Scrap => StateSet::SCRAP,
            Self::Destruction => StateSet::DESTRUCTION,
        }
    }

    pub const fn is_in(self, set: StateSet) -> bool {
        set.contains(self.flag())
    }
}

/// Result of checking a move against a fighter's state.
///
/// Finishing moves advance the state when they pass: a scrap move moves a
/// victorious fighter to `Scrap`, a destruction move moves it to
/// `Destruction`. `next_state` equals the input state otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Legality {
    pub allowed: bool,
    pub next_state: CombatState,
}

impl Legality {
    const fn deny(state: CombatState) -> Self {
        Self {
            allowed: false,
            next_state: state,
        }
    }

    const fn allow(next_state: CombatState) -> Self {
        Self {
            allowed: true,
            next_state,
        }
    }
}

/// Decides whether a move of `category` may start in `state`.
///
/// Pure: identical inputs always yield the same result. Re-checking a
/// finishing move against the state it produced passes again.
pub const fn check_move(state: CombatState, category: MoveCategory, close: bool) -> Legality {
    use CombatState as S;
    use MoveCategory as C;

    match (state, category) {
        (S::Jumping, C::JumpOnly) => Legality::allow(state),
        (S::Jumping, _) => Legality::deny(state),

        (S::Victory | S::Scrap, C::Scrap) => Legality::allow(S::Scrap),
        (S::Scrap | S::Destruction, C::Destruction) => Legality::allow(S::Destruction),
        (S::Victory | S::Scrap | S::Destruction, _) => Legality::deny(state),

        (_, C::CloseRange) if close => Legality::allow(state),
        (_, C::CloseRange | C::JumpOnly | C::Scrap | C::Destruction) => Legality::deny(state),
        (_, C::Normal) => Legality::allow(state),
    }
}
