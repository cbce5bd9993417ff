use super::AnimationPlayer;

/// Fire-and-forget drawing of animation instances.
pub trait Renderer {
    fn draw(&mut self, player: &dyn AnimationPlayer);
}
