use crate::fighter::CombatEventSink;
use crate::types::Position;

/// Physics body of a single fighter.
///
/// Commands may report state changes synchronously through `events`
/// (e.g. `jump` reports [`CombatEvent::Jump`](crate::fighter::CombatEvent::Jump),
/// `walk(0.0)` reports `Stop`). The core never integrates motion itself.
pub trait PhysicsBody {
    fn position(&self) -> Position;

    /// Moves the body without affecting its velocity.
    fn set_position(&mut self, position: Position);

    fn is_in_air(&self) -> bool;

    /// Sets horizontal velocity; zero halts the body.
    fn walk(&mut self, velocity_x: f32, events: &mut dyn CombatEventSink);

    /// Starts a jump with the given vertical velocity if grounded.
    fn jump(&mut self, velocity_y: f32, events: &mut dyn CombatEventSink);

    fn crouch(&mut self, events: &mut dyn CombatEventSink);

    /// Applies a recoil impulse requested by an animation and integrates it.
    fn recoil(&mut self, impulse_x: f32, impulse_y: f32, events: &mut dyn CombatEventSink);

    /// Integrates one physics step.
    fn step(&mut self, events: &mut dyn CombatEventSink);
}
