use std::collections::HashMap;

use super::MoveDefinition;
use crate::config::CombatConfig;
use crate::error::LoadError;
use crate::types::AnimationId;

/// Sparse move table of one fighter archetype.
///
/// Only populated slots are stored. `order` keeps slot ids ascending because
/// table order is match priority: the lowest slot whose sequence matches wins.
#[derive(Clone, Debug, Default)]
pub struct MoveTable {
    moves: HashMap<AnimationId, MoveDefinition>,
    order: Vec<AnimationId>,
}

impl MoveTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table and checks it can back a fighter.
    pub fn from_moves(
        moves: impl IntoIterator<Item = MoveDefinition>,
    ) -> Result<Self, LoadError> {
        let mut table = Self::new();
        for definition in moves {
            table.insert(definition)?;
        }
        table.validate()?;
        Ok(table)
    }

    /// Adds a populated slot.
    ///
    /// # Errors
    ///
    /// Rejects slots outside the table, duplicate slots, and sprites whose
    /// mask size disagrees with their dimensions.
    pub fn insert(&mut self, definition: MoveDefinition) -> Result<(), LoadError> {
        let id = definition.id;
        if id.index() >= CombatConfig::MAX_MOVES {
            return Err(LoadError::SlotOutOfRange { slot: id });
        }
        if self.moves.contains_key(&id) {
            return Err(LoadError::DuplicateSlot(id));
        }
        if let Some((sprite, mask)) = definition
            .frames
            .sprites
            .iter()
            .enumerate()
            .find(|(_, mask)| !mask.is_consistent())
        {
            return Err(LoadError::MaskSizeMismatch {
                slot: id,
                sprite,
                expected: mask.expected_len(),
                actual: mask.pixels().len(),
            });
        }

        let position = self.order.partition_point(|existing| *existing < id);
        self.order.insert(position, id);
        self.moves.insert(id, definition);
        Ok(())
    }

    /// Checks that every base animation a fighter falls back to is present
    /// and has at least one sprite.
    pub fn validate(&self) -> Result<(), LoadError> {
        for id in AnimationId::REQUIRED {
            let definition = self.get(id).ok_or(LoadError::MissingAnimation(id))?;
            if definition.frames.sprites.is_empty() {
                return Err(LoadError::EmptyAnimation(id));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: AnimationId) -> Option<&MoveDefinition> {
        self.moves.get(&id)
    }

    pub fn contains(&self, id: AnimationId) -> bool {
        self.moves.contains_key(&id)
    }

    /// Iterates over populated slots in table order.
    pub fn iter(&self) -> impl Iterator<Item = &MoveDefinition> + '_ {
        self.order.iter().filter_map(|id| self.moves.get(id))
    }

    pub fn ids(&self) -> &[AnimationId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
