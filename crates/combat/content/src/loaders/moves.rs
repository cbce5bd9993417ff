//! Move table loader.

use std::path::Path;

use combat_core::{
    AnimationFrames, AnimationId, InputSequence, MoveCategory, MoveDefinition, MoveTable,
};
use serde::Deserialize;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// One populated slot as authored in a move table file.
///
/// ```ron
/// (
///     slot: 21,
///     input: "K32",
///     category: Normal,
///     damage: 40,
///     footer: Some("SWEEP"),
///     frames: (sprites: [...], collision: [(x: 12, y: -20, frame: 1)]),
/// )
/// ```
///
/// Animation-only slots (idle, walking, projectiles) leave `input` empty.
#[derive(Clone, Debug, Deserialize)]
pub struct MoveRecord {
    pub slot: u8,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub category: MoveCategory,
    #[serde(default)]
    pub damage: u32,
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default)]
    pub frames: AnimationFrames,
}

impl MoveRecord {
    fn into_definition(self) -> LoadResult<MoveDefinition> {
        let id = AnimationId(self.slot);
        let input = InputSequence::parse(id, &self.input)?;
        let mut definition =
            MoveDefinition::attack(id, input, self.category, self.damage, self.frames);
        definition.footer = self.footer;
        Ok(definition)
    }
}

/// Loader for per-archetype move tables from RON files.
pub struct MoveTableLoader;

impl MoveTableLoader {
    /// Load and validate a move table from a RON file.
    pub fn load(path: &Path) -> LoadResult<MoveTable> {
        let content = read_file(path)?;
        let table = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid move table {}: {}", path.display(), e))?;
        debug!(path = %path.display(), moves = table.len(), "loaded move table");
        Ok(table)
    }

    /// Parse and validate a move table from RON text.
    pub fn parse(content: &str) -> LoadResult<MoveTable> {
        let records: Vec<MoveRecord> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse move table RON: {}", e))?;
        let moves = records
            .into_iter()
            .map(MoveRecord::into_definition)
            .collect::<LoadResult<Vec<_>>>()?;
        Ok(MoveTable::from_moves(moves)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use combat_core::{CombatError, ErrorSeverity, InputSymbol, LoadError};

    use super::*;

    const SPRITE: &str = "(anchor_x: -1, anchor_y: -2, width: 2, height: 2, pixels: [1, 1, 0, 1])";

    fn base_slots() -> String {
        AnimationId::REQUIRED
            .iter()
            .map(|id| format!("(slot: {}, frames: (sprites: [{SPRITE}])),\n", id.0))
            .collect()
    }

    fn table_text(extra: &str) -> String {
        format!("[\n{}{}\n]", base_slots(), extra)
    }

    #[test]
    fn parses_attacks_with_frames() {
        let text = table_text(
            r#"(
                slot: 21,
                input: "K32",
                category: CloseRange,
                damage: 40,
                footer: Some("SWEEP"),
                frames: (
                    start_x: 5,
                    sprites: [(anchor_x: 0, anchor_y: 0, width: 1, height: 1, pixels: [3])],
                    collision: [(x: 12, y: -20, frame: 1)],
                ),
            ),"#,
        );
        let table = MoveTableLoader::parse(&text).unwrap();

        assert_eq!(table.len(), AnimationId::REQUIRED.len() + 1);
        let sweep = table.get(AnimationId(21)).unwrap();
        assert_eq!(
            sweep.input.as_slice(),
            &[InputSymbol::Kick, InputSymbol::DownForward, InputSymbol::Down]
        );
        assert_eq!(sweep.category, MoveCategory::CloseRange);
        assert_eq!(sweep.damage, 40);
        assert_eq!(sweep.footer.as_deref(), Some("SWEEP"));
        assert_eq!(sweep.frames.start_x, 5);
        assert_eq!(sweep.frames.collision.len(), 1);
        assert!(table.get(AnimationId::IDLE).unwrap().input.is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", table_text(r#"(slot: 20, input: "P", damage: 10),"#)).unwrap();

        let table = MoveTableLoader::load(file.path()).unwrap();
        assert!(table.get(AnimationId(20)).unwrap().is_triggerable());
    }

    #[test]
    fn rejects_unknown_symbols() {
        let err = MoveTableLoader::parse(&table_text(r#"(slot: 20, input: "PX"),"#)).unwrap_err();
        let load = err.downcast_ref::<LoadError>().unwrap();
        assert_eq!(
            load,
            &LoadError::InvalidSymbol {
                slot: AnimationId(20),
                symbol: 'X'
            }
        );
        assert_eq!(load.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn rejects_out_of_range_slots() {
        let err = MoveTableLoader::parse(&table_text("(slot: 70),")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::SlotOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_tables_missing_base_animations() {
        let text = format!("[(slot: 11, frames: (sprites: [{SPRITE}]))]");
        let err = MoveTableLoader::parse(&text).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::MissingAnimation(_))
        ));
    }

    #[test]
    fn rejects_inconsistent_masks() {
        let text = table_text(
            "(slot: 20, frames: (sprites: [\
                (anchor_x: 0, anchor_y: 0, width: 2, height: 2, pixels: [1]),\
            ])),",
        );
        let err = MoveTableLoader::parse(&text).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::MaskSizeMismatch { .. })
        ));
    }

    #[test]
    fn malformed_ron_is_an_error() {
        assert!(MoveTableLoader::parse("[(slot: )]").is_err());
    }
}
