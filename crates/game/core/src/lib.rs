//! Data model shared across the move picker's client layers.
//!
//! `game-core` defines the canonical types (moves, candidate lists, description
//! records, session configuration) and the [`source::MoveDescriptionSource`]
//! capability. It performs no I/O; loaders live in `game-content` and UI-facing
//! state in `client-frontend-core`.
pub mod config;
pub mod error;
pub mod moves;
pub mod record;
pub mod source;

pub use config::{ConfigOverrides, ConfigValue, SessionConfig};
pub use error::{ErrorSeverity, GameError};
pub use moves::{Move, MoveList};
pub use record::{MoveField, MoveRecord};
pub use source::{MoveDescriptionSource, MoveTable, SourceError};
