//! Move definitions and the per-archetype move table.
//!
//! Tables are produced by the asset loaders and are read-only at runtime.
//! A move slot doubles as an animation: the slot id is the animation id
//! played when the move triggers, and non-attack animations (idle, walk,
//! hit reactions) are slots with an empty input sequence.

mod definition;
mod sprite;
mod table;

pub use definition::{
    AnimationFrames, CollisionPoint, InputSequence, MoveCategory, MoveDefinition,
};
pub use sprite::SpriteMask;
pub use table::MoveTable;
