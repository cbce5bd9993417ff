use super::InputBuffer;
use crate::moves::{MoveDefinition, MoveTable};

/// Finds the move triggered by the current input history.
///
/// Moves are scanned in table order and the first one whose input sequence
/// is a prefix of `buffer` and that passes `allowed` wins. Sequence length
/// plays no part: a short generic sequence listed early shadows a longer,
/// more specific one listed later. `allowed` runs only for moves whose
/// sequence matched, and scanning stops at the first move it accepts.
pub fn find_match<'t>(
    table: &'t MoveTable,
    buffer: &InputBuffer,
    mut allowed: impl FnMut(&MoveDefinition) -> bool,
) -> Option<&'t MoveDefinition> {
    table.iter().find(|definition| {
        let sequence = definition.input.as_slice();
        !sequence.is_empty()
            && sequence.len() <= buffer.len()
            && buffer.starts_with(sequence)
            && allowed(definition)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSymbol::{self, *};
    use crate::mock::MoveTableBuilder;
    use crate::moves::MoveCategory;
    use crate::types::AnimationId;

    fn buffer_of(symbols: &[InputSymbol]) -> InputBuffer {
        let mut buffer = InputBuffer::new();
        for symbol in symbols {
            buffer.record(*symbol);
        }
        buffer
    }

    #[test]
    fn earlier_table_entry_wins_over_longer_sequence() {
        let table = MoveTableBuilder::new()
            .with_move(AnimationId(20), "P", MoveCategory::Normal, 10)
            .with_move(AnimationId(21), "P632", MoveCategory::Normal, 40)
            .build();
        let buffer = buffer_of(&[Down, DownForward, Forward, Punch]);

        let found = find_match(&table, &buffer, |_| true).map(|m| m.id);
        assert_eq!(found, Some(AnimationId(20)));
    }

    #[test]
    fn rejected_move_falls_through_to_next_match() {
        let table = MoveTableBuilder::new()
            .with_move(AnimationId(20), "K", MoveCategory::CloseRange, 10)
            .with_move(AnimationId(21), "K", MoveCategory::Normal, 5)
            .build();
        let buffer = buffer_of(&[Kick]);

        let mut checked = Vec::new();
        let found = find_match(&table, &buffer, |m| {
            checked.push(m.id);
            m.category != MoveCategory::CloseRange
        });

        assert_eq!(found.map(|m| m.id), Some(AnimationId(21)));
        assert_eq!(checked, vec![AnimationId(20), AnimationId(21)]);
    }

    #[test]
    fn sequence_longer_than_history_never_matches() {
        let table = MoveTableBuilder::new()
            .with_move(AnimationId(20), "K2", MoveCategory::Normal, 10)
            .build();
        let buffer = buffer_of(&[Kick]);

        assert!(find_match(&table, &buffer, |_| true).is_none());
    }

    #[test]
    fn animation_only_slots_are_never_matched() {
        let table = MoveTableBuilder::new().build();
        let buffer = buffer_of(&[Kick]);

        assert!(table.get(AnimationId::IDLE).is_some());
        assert!(find_match(&table, &buffer, |_| true).is_none());
    }
}
