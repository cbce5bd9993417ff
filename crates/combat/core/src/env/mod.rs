//! Traits describing the external collaborators of a fighter.
//!
//! The physics integrator, the animation playback engine and the renderer
//! live outside this crate. A fighter owns one instance of each and talks to
//! them only through these narrow contracts. Anything a collaborator wants to
//! report back (landing, stopping, spawning a projectile) is pushed into the
//! [`CombatEventSink`](crate::fighter::CombatEventSink) passed to the call
//! and handled by the owning fighter once the call returns.
mod animation;
mod physics;
mod render;

pub use animation::{AnimationEngine, AnimationPlayer};
pub use physics::PhysicsBody;
pub use render::Renderer;
