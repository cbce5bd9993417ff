//! Data-driven combat content and loaders.
//!
//! This crate turns on-disk data into `combat-core` types:
//! - Move tables per fighter archetype (RON)
//! - Combat configuration (TOML)
//!
//! Tables are validated on load, so anything returned here can back a
//! [`combat_core::Fighter`].

pub mod loaders;
pub mod roster;

pub use loaders::{ConfigLoader, ContentFactory, LoadResult, MoveRecord, MoveTableLoader};
pub use roster::FighterArchetype;
