//! Small value types shared across the combat core.

use core::fmt;

/// Identifies an animation and, equivalently, the move slot that owns it.
///
/// Move tables are indexed by the same id as the animation they play, so a
/// fighter's current animation id is also the key of the move it performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationId(pub u8);

impl AnimationId {
    pub const JUMPING: Self = Self(1);
    pub const STANDUP: Self = Self(2);
    pub const STUNNED: Self = Self(3);
    pub const CROUCHING: Self = Self(4);
    pub const DAMAGE: Self = Self(9);
    pub const WALKING: Self = Self(10);
    pub const IDLE: Self = Self(11);
    pub const DEFEAT: Self = Self(47);
    pub const VICTORY: Self = Self(48);

    /// Animations every fighter archetype must provide.
    pub const REQUIRED: [Self; 9] = [
        Self::IDLE,
        Self::WALKING,
        Self::JUMPING,
        Self::CROUCHING,
        Self::DAMAGE,
        Self::STANDUP,
        Self::STUNNED,
        Self::DEFEAT,
        Self::VICTORY,
    ];

    /// Looping base animations during which new input is accepted.
    pub const fn is_idle_family(self) -> bool {
        matches!(self.0, 1 | 4 | 10 | 11)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Integer world position, as reported by the physics collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Horizontal facing of a fighter or animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Facing {
    #[default]
    Right,
    /// Sprites are drawn mirrored.
    Left,
}

impl Facing {
    /// Returns `1` for right and `-1` for left.
    pub const fn sign(self) -> i32 {
        match self {
            Self::Right => 1,
            Self::Left => -1,
        }
    }

    pub const fn from_sign(sign: i32) -> Self {
        if sign < 0 { Self::Left } else { Self::Right }
    }

    pub const fn is_mirrored(self) -> bool {
        matches!(self, Self::Left)
    }

    pub const fn reversed(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

/// Which of the two duel participants a fighter is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum FighterSlot {
    One,
    Two,
}

impl FighterSlot {
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}
