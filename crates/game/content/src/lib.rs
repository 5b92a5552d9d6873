//! Data-driven content and loaders for the move picker.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Move description tables (data-driven via RON)
//! - Session option overrides (data-driven via TOML)
//!
//! A default move table is bundled with the crate so clients can start without
//! a data directory. All loaders deserialize straight into game-core types.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, LoadResult, MoveTableLoader, OverridesLoader};
