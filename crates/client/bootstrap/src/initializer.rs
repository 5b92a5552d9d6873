//! Typestate session initializer.
//!
//! The lifecycle `Unconfigured → Configured → Initialized` is encoded in the
//! type parameter, so `create_session` only exists once the initializer has
//! been initialized. Use [`crate::SessionLifecycle`] when the state must be
//! tracked at runtime instead (e.g., across an FFI boundary).
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use game_core::{ConfigValue, SessionConfig};

use crate::error::LifecycleState;
use crate::session::{Clock, IdSource, RandomIdSource, SessionRecord, SystemClock, stamp_record};

mod sealed {
    pub trait Sealed {}
}

/// Marker trait for initializer lifecycle states.
pub trait InitializerState: sealed::Sealed {
    const STATE: LifecycleState;
}

/// No configuration applied yet.
#[derive(Debug)]
pub struct Unconfigured;

/// Configuration merged, not yet initialized.
#[derive(Debug)]
pub struct Configured;

/// Ready to create sessions.
#[derive(Debug)]
pub struct Initialized;

impl sealed::Sealed for Unconfigured {}
impl sealed::Sealed for Configured {}
impl sealed::Sealed for Initialized {}

impl InitializerState for Unconfigured {
    const STATE: LifecycleState = LifecycleState::Unconfigured;
}

impl InitializerState for Configured {
    const STATE: LifecycleState = LifecycleState::Configured;
}

impl InitializerState for Initialized {
    const STATE: LifecycleState = LifecycleState::Initialized;
}

/// Fluent session bootstrapper: `configure(..).initialize().create_session()`.
pub struct SessionInitializer<S: InitializerState = Unconfigured> {
    config: SessionConfig,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdSource>,
    _state: PhantomData<S>,
}

impl SessionInitializer<Unconfigured> {
    /// Initializer using the wall clock and random ids.
    pub fn new() -> Self {
        Self::with_sources(Arc::new(SystemClock), Arc::new(RandomIdSource))
    }

    /// Initializer with injected time and id sources.
    pub fn with_sources(clock: Arc<dyn Clock>, ids: Arc<dyn IdSource>) -> Self {
        Self {
            config: SessionConfig::defaults(),
            clock,
            ids,
            _state: PhantomData,
        }
    }
}

impl Default for SessionInitializer<Unconfigured> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: InitializerState> SessionInitializer<S> {
    /// Merges `overrides` over the defaults and returns a not-yet-initialized
    /// initializer. Earlier configuration is discarded, not merged.
    pub fn configure<I, K>(self, overrides: I) -> SessionInitializer<Configured>
    where
        I: IntoIterator<Item = (K, ConfigValue)>,
        K: Into<String>,
    {
        let from = S::STATE;
        let config = SessionConfig::with_overrides(overrides);
        tracing::debug!(%from, keys = config.len(), "session configured");
        SessionInitializer {
            config,
            clock: self.clock,
            ids: self.ids,
            _state: PhantomData,
        }
    }

    pub fn state(&self) -> LifecycleState {
        S::STATE
    }

    fn transition<T: InitializerState>(self) -> SessionInitializer<T> {
        SessionInitializer {
            config: self.config,
            clock: self.clock,
            ids: self.ids,
            _state: PhantomData,
        }
    }
}

impl SessionInitializer<Configured> {
    pub fn initialize(self) -> SessionInitializer<Initialized> {
        tracing::debug!("session initializer initialized");
        self.transition()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl SessionInitializer<Initialized> {
    /// Already initialized; returns the initializer unchanged.
    pub fn initialize(self) -> Self {
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Creates a record with a fresh id, the current time and a snapshot of
    /// the configuration.
    pub fn create_session(&self) -> SessionRecord {
        stamp_record(&self.config, self.clock.as_ref(), self.ids.as_ref())
    }
}

impl<S: InitializerState> fmt::Debug for SessionInitializer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionInitializer")
            .field("state", &S::STATE)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
