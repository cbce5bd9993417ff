use core::fmt;

use crate::types::Facing;

/// A single entry of a fighter's input history.
///
/// Directions follow the numeric keypad layout as seen by a fighter facing
/// right: `6` is forward, `4` is back, `2` is down and `5` is neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputSymbol {
    DownBack,
    Down,
    DownForward,
    Back,
    Neutral,
    Forward,
    UpBack,
    Up,
    UpForward,
    Punch,
    Kick,
}

impl InputSymbol {
    pub const fn as_char(self) -> char {
        match self {
            Self::DownBack => '1',
            Self::Down => '2',
            Self::DownForward => '3',
            Self::Back => '4',
            Self::Neutral => '5',
            Self::Forward => '6',
            Self::UpBack => '7',
            Self::Up => '8',
            Self::UpForward => '9',
            Self::Punch => 'P',
            Self::Kick => 'K',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '1' => Self::DownBack,
            '2' => Self::Down,
            '3' => Self::DownForward,
            '4' => Self::Back,
            '5' => Self::Neutral,
            '6' => Self::Forward,
            '7' => Self::UpBack,
            '8' => Self::Up,
            '9' => Self::UpForward,
            'P' => Self::Punch,
            'K' => Self::Kick,
            _ => return None,
        })
    }
}

impl TryFrom<char> for InputSymbol {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}

impl fmt::Display for InputSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Raw commands a controller can issue to a fighter.
///
/// Screen-relative directions are recorded as facing-relative symbols;
/// movement commands additionally drive the physics body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FighterAction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    Punch,
    Kick,
    Stop,
    WalkLeft,
    WalkRight,
    Crouch,
    Jump,
}

impl FighterAction {
    /// Symbol recorded for this action, if any, for a fighter with `facing`.
    pub const fn symbol(self, facing: Facing) -> Option<InputSymbol> {
        let mirrored = facing.is_mirrored();
        Some(match self {
            Self::Up => InputSymbol::Up,
            Self::Down => InputSymbol::Down,
            Self::Left if mirrored => InputSymbol::Forward,
            Self::Left => InputSymbol::Back,
            Self::Right if mirrored => InputSymbol::Back,
            Self::Right => InputSymbol::Forward,
            Self::UpLeft if mirrored => InputSymbol::UpForward,
            Self::UpLeft => InputSymbol::UpBack,
            Self::UpRight if mirrored => InputSymbol::UpBack,
            Self::UpRight => InputSymbol::UpForward,
            Self::DownLeft if mirrored => InputSymbol::DownForward,
            Self::DownLeft => InputSymbol::DownBack,
            Self::DownRight if mirrored => InputSymbol::DownBack,
            Self::DownRight => InputSymbol::DownForward,
            Self::Punch => InputSymbol::Punch,
            Self::Kick => InputSymbol::Kick,
            Self::Stop => InputSymbol::Neutral,
            Self::WalkLeft | Self::WalkRight | Self::Crouch | Self::Jump => return None,
        })
    }
}
