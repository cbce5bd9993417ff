//! Hit detection and damage.
//!
//! # Core Functions
//!
//! - `resolve_hit`: one directional attacker → defender resolution per tick
//! - `apply_damage`: health/endurance split and hit reaction selection
//! - `SpritePlacement`: world ↔ sprite-local transform shared by the box and
//!   pixel stages

pub mod collision;
pub mod damage;
pub mod debug;
pub mod geometry;

pub use collision::{HitOutcome, resolve_hit};
pub use damage::{DamageEffect, Vitals, apply_damage};
pub use debug::{Color, DebugImage};
pub use geometry::{Rect, SpritePlacement, attack_point, close_in};
