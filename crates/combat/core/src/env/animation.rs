use crate::fighter::CombatEventSink;
use crate::moves::AnimationFrames;
use crate::types::{AnimationId, Facing, Position};

/// A running instance of an animation.
///
/// Dropping the instance releases it.
pub trait AnimationPlayer {
    fn id(&self) -> AnimationId;

    /// Index of the frame currently displayed.
    fn frame_index(&self) -> u32;

    /// Sprite letter of the displayed frame (`'A'` is the first sprite).
    fn frame_letter(&self) -> Option<char>;

    /// Sprite index of the displayed frame.
    fn sprite_index(&self) -> Option<usize> {
        self.frame_letter()
            .filter(char::is_ascii_uppercase)
            .map(|letter| (letter as u8 - b'A') as usize)
    }

    /// False while the displayed frame is still being decoded.
    fn is_frame_ready(&self) -> bool;

    /// True once a non-repeating sequence has completed.
    fn is_finished(&self) -> bool;

    /// Forces the sequence to count as completed.
    fn finish(&mut self);

    fn set_repeat(&mut self, repeat: bool);

    fn set_facing(&mut self, facing: Facing);

    fn position(&self) -> Position;

    fn set_position(&mut self, position: Position);

    /// Attaches text shown alongside the animation.
    fn set_display_string(&mut self, text: &str);

    /// Skips ahead to the next frame.
    fn next_frame(&mut self);

    /// Advances playback by one step, reporting spawn/release/recoil
    /// requests authored on the frames it passes.
    fn run(&mut self, events: &mut dyn CombatEventSink);
}

/// Creates animation instances for a fighter.
pub trait AnimationEngine {
    /// Creates an instance of animation `id` at `position`. The returned
    /// instance is already running, non-repeating and facing right.
    fn create(
        &mut self,
        id: AnimationId,
        frames: &AnimationFrames,
        position: Position,
    ) -> Box<dyn AnimationPlayer>;
}
