//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, session initialization, description-source
//! assembly, and setup wiring that can be reused by the terminal client or any
//! other front-end crate.
pub mod builder;
pub mod config;
pub mod error;
pub mod initializer;
pub mod lifecycle;
pub mod session;
pub mod sources;

pub use builder::{ClientSetup, SetupBuilder};
pub use config::{BootstrapConfig, parse_move_list};
pub use error::{LifecycleError, LifecycleState};
pub use initializer::{Configured, Initialized, InitializerState, SessionInitializer, Unconfigured};
pub use lifecycle::SessionLifecycle;
pub use session::{
    Clock, FixedClock, IdSource, RandomIdSource, SequenceIdSource, SessionId, SessionRecord,
    SystemClock,
};
pub use sources::{
    ContentSourceFactory, DescriptionSourceFactory, DetachedSourceFactory, EmbeddedSourceFactory,
};
