//! Deterministic combat resolution for two-fighter duels.
//!
//! `combat-core` turns raw fighter actions into move selection, drives each
//! fighter through its combat states and decides whether an active attack
//! connects using the defender's sprite mask. Physics, animation playback and
//! rendering are external collaborators reached through the traits in
//! [`env`]; every simulation tick flows through [`engine::CombatEngine`].
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod fighter;
pub mod input;
pub mod moves;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use combat::{
    Color, DamageEffect, DebugImage, HitOutcome, Rect, SpritePlacement, Vitals, resolve_hit,
};
pub use config::CombatConfig;
pub use engine::{CombatEngine, Duel, TickReport};
pub use env::{AnimationEngine, AnimationPlayer, PhysicsBody, Renderer};
pub use error::{CombatError, ErrorSeverity, LoadError};
pub use fighter::{
    ChildArena, ChildId, CombatEvent, CombatEventSink, CombatState, EventQueue, Fighter,
    FighterSetup, Legality, StateSet, check_move,
};
pub use input::{FighterAction, InputBuffer, InputSymbol, find_match};
pub use moves::{
    AnimationFrames, CollisionPoint, InputSequence, MoveCategory, MoveDefinition, MoveTable,
    SpriteMask,
};
pub use types::{AnimationId, Facing, FighterSlot, Position};
