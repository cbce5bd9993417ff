//! Common error infrastructure for combat-core.
//!
//! Only asset problems surface as errors. Data inconsistencies met while a
//! tick is running degrade to "no hit" or "no animation change", and misuse
//! of the fighter lifecycle is logged and ignored, so neither has a variant
//! here.

use crate::config::CombatConfig;
use crate::types::AnimationId;

/// How bad a load failure is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid authored data; the same input will fail again.
    ///
    /// Examples: malformed input sequence, mask size mismatch
    Validation,

    /// The fighter cannot be assembled at all.
    ///
    /// Examples: a required base animation is missing
    Fatal,
}

/// Common trait for all combat-core errors.
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Failures while assembling a move table or a fighter from loaded assets.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error(
        "move slot {slot} is outside the move table (max {max})",
        max = CombatConfig::MAX_MOVES
    )]
    SlotOutOfRange { slot: AnimationId },

    #[error("move slot {0} is defined more than once")]
    DuplicateSlot(AnimationId),

    #[error("move {slot} has invalid input symbol {symbol:?}")]
    InvalidSymbol { slot: AnimationId, symbol: char },

    #[error("input sequence of move {slot} is longer than the input history")]
    SequenceTooLong { slot: AnimationId },

    #[error("required animation {0} is missing")]
    MissingAnimation(AnimationId),

    #[error("required animation {0} has no sprites")]
    EmptyAnimation(AnimationId),

    #[error(
        "sprite {sprite} of animation {slot} has {actual} mask bytes, expected {expected}"
    )]
    MaskSizeMismatch {
        slot: AnimationId,
        sprite: usize,
        expected: usize,
        actual: usize,
    },
}

impl CombatError for LoadError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingAnimation(_) | Self::EmptyAnimation(_) => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SlotOutOfRange { .. } => "LOAD_SLOT_OUT_OF_RANGE",
            Self::DuplicateSlot(_) => "LOAD_DUPLICATE_SLOT",
            Self::InvalidSymbol { .. } => "LOAD_INVALID_SYMBOL",
            Self::SequenceTooLong { .. } => "LOAD_SEQUENCE_TOO_LONG",
            Self::MissingAnimation(_) => "LOAD_MISSING_ANIMATION",
            Self::EmptyAnimation(_) => "LOAD_EMPTY_ANIMATION",
            Self::MaskSizeMismatch { .. } => "LOAD_MASK_SIZE_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_base_animation_is_fatal() {
        let error = LoadError::MissingAnimation(AnimationId::IDLE);
        assert_eq!(error.severity(), ErrorSeverity::Fatal);
        assert_eq!(error.error_code(), "LOAD_MISSING_ANIMATION");
    }

    #[test]
    fn malformed_data_is_a_validation_error() {
        let error = LoadError::InvalidSymbol {
            slot: AnimationId(20),
            symbol: 'x',
        };
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(error.to_string(), "move #20 has invalid input symbol 'x'");
    }
}
