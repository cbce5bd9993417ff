//! Content factory for assembling fighters from data files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use combat_core::{CombatConfig, Facing, FighterSetup, FighterSlot, MoveTable, Position};

use crate::loaders::{ConfigLoader, LoadResult, MoveTableLoader};
use crate::roster::FighterArchetype;

/// Content factory that loads combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── combat.toml
/// └── moves/
///     ├── jaguar.ron
///     └── shadow.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load combat configuration from `combat.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        ConfigLoader::load(&self.data_dir.join("combat.toml"))
    }

    /// Load the move table of `archetype` from `moves/`.
    pub fn load_moves(&self, archetype: FighterArchetype) -> LoadResult<Arc<MoveTable>> {
        let path = self.data_dir.join("moves").join(archetype.table_file());
        MoveTableLoader::load(&path).map(Arc::new)
    }

    /// Everything needed to create a fighter of `archetype`.
    pub fn fighter_setup(
        &self,
        slot: FighterSlot,
        archetype: FighterArchetype,
        position: Position,
        facing: Facing,
    ) -> LoadResult<FighterSetup> {
        let config = self.load_config()?;
        let moves = self.load_moves(archetype)?;
        Ok(FighterSetup::new(slot, moves, position, facing).with_config(config))
    }
}
