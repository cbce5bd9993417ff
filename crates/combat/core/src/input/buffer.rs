use core::fmt;

use arrayvec::ArrayVec;

use super::InputSymbol;
use crate::config::CombatConfig;

/// Most-recent-first history of a fighter's input symbols.
///
/// Capacity is fixed; recording into a full buffer drops the oldest symbol.
/// A symbol equal to the current head is never recorded again, so holding a
/// direction does not flood the history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputBuffer {
    symbols: ArrayVec<InputSymbol, { CombatConfig::INPUT_HISTORY_LEN }>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `symbol` as the new head.
    ///
    /// Returns `false` when the symbol repeats the current head and was
    /// therefore ignored.
    pub fn record(&mut self, symbol: InputSymbol) -> bool {
        if self.head() == Some(symbol) {
            return false;
        }
        if self.symbols.is_full() {
            self.symbols.pop();
        }
        self.symbols.insert(0, symbol);
        true
    }

    /// Forgets the whole history; the next symbol starts a fresh sequence.
    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn head(&self) -> Option<InputSymbol> {
        self.symbols.first().copied()
    }

    /// Returns true if the most recent symbols equal `sequence`, head first.
    pub fn starts_with(&self, sequence: &[InputSymbol]) -> bool {
        self.symbols.starts_with(sequence)
    }

    pub fn as_slice(&self) -> &[InputSymbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        CombatConfig::INPUT_HISTORY_LEN
    }
}

impl fmt::Display for InputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
