use super::SpriteMask;
use crate::config::CombatConfig;
use crate::error::LoadError;
use crate::input::InputSymbol;
use crate::types::AnimationId;

/// Legality tag of a move.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MoveCategory {
    #[default]
    Normal,
    /// Only performed in the air.
    JumpOnly,
    /// Only performed while flagged close to the opponent; always connects.
    CloseRange,
    /// Finishing move available after winning.
    Scrap,
    /// Follow-up finishing move available after a scrap.
    Destruction,
}

/// Hit point authored on an attack animation.
///
/// `x` is relative to the attacker facing right and mirrored with the
/// attacker's facing; the point is only live on animation frame `frame`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionPoint {
    pub x: i32,
    pub y: i32,
    pub frame: u32,
}

impl CollisionPoint {
    pub const fn new(x: i32, y: i32, frame: u32) -> Self {
        Self { x, y, frame }
    }
}

/// Static frame data of a move's animation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationFrames {
    /// Offset from the owner's position where spawned instances start.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_x: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_y: i32,
    /// Sprites addressed by frame letter (`A` is index 0).
    #[cfg_attr(feature = "serde", serde(default))]
    pub sprites: Vec<SpriteMask>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub collision: Vec<CollisionPoint>,
}

impl AnimationFrames {
    pub fn sprite(&self, index: usize) -> Option<&SpriteMask> {
        self.sprites.get(index)
    }

    /// Collision points live on `frame`, with their index in the table.
    pub fn points_on_frame(
        &self,
        frame: u32,
    ) -> impl Iterator<Item = (usize, &CollisionPoint)> + '_ {
        self.collision
            .iter()
            .enumerate()
            .filter(move |(_, point)| point.frame == frame)
    }
}

/// Input sequence of a move, most recent symbol first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputSequence(Vec<InputSymbol>);

impl InputSequence {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the authored move string, e.g. `"K32"`.
    pub fn parse(slot: AnimationId, text: &str) -> Result<Self, LoadError> {
        let symbols = text
            .chars()
            .map(|c| {
                InputSymbol::try_from(c).map_err(|symbol| LoadError::InvalidSymbol { slot, symbol })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if symbols.len() > CombatConfig::INPUT_HISTORY_LEN {
            return Err(LoadError::SequenceTooLong { slot });
        }
        Ok(Self(symbols))
    }

    pub fn as_slice(&self) -> &[InputSymbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for InputSequence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// A single populated slot of a move table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveDefinition {
    /// Slot id, which is also the animation played by this move.
    pub id: AnimationId,
    pub input: InputSequence,
    pub category: MoveCategory,
    pub damage: u32,
    /// Text shown on the defender's hit reaction.
    pub footer: Option<String>,
    pub frames: AnimationFrames,
}

impl MoveDefinition {
    /// An animation-only slot that can never be triggered by input.
    pub fn animation(id: AnimationId, frames: AnimationFrames) -> Self {
        Self {
            id,
            input: InputSequence::empty(),
            category: MoveCategory::Normal,
            damage: 0,
            footer: None,
            frames,
        }
    }

    pub fn attack(
        id: AnimationId,
        input: InputSequence,
        category: MoveCategory,
        damage: u32,
        frames: AnimationFrames,
    ) -> Self {
        Self {
            id,
            input,
            category,
            damage,
            footer: None,
            frames,
        }
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn is_triggerable(&self) -> bool {
        !self.input.is_empty()
    }
}
