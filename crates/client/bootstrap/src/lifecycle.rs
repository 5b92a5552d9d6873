//! Runtime-tagged session initializer.
//!
//! Same contract as [`crate::SessionInitializer`], but the lifecycle stage is a
//! value checked on every call. Suitable when the initializer is stored in a
//! long-lived field or driven from outside Rust, where the typestate cannot
//! follow it.
use std::sync::Arc;

use game_core::{ConfigValue, SessionConfig};

use crate::error::{LifecycleError, LifecycleState};
use crate::session::{Clock, IdSource, RandomIdSource, SessionRecord, SystemClock, stamp_record};

pub struct SessionLifecycle {
    state: LifecycleState,
    config: SessionConfig,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdSource>,
}

impl SessionLifecycle {
    pub fn new() -> Self {
        Self::with_sources(Arc::new(SystemClock), Arc::new(RandomIdSource))
    }

    pub fn with_sources(clock: Arc<dyn Clock>, ids: Arc<dyn IdSource>) -> Self {
        Self {
            state: LifecycleState::Unconfigured,
            config: SessionConfig::defaults(),
            clock,
            ids,
        }
    }

    /// Merges `overrides` over the defaults and marks the lifecycle as not yet
    /// initialized, even if it was initialized before.
    pub fn configure<I, K>(&mut self, overrides: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, ConfigValue)>,
        K: Into<String>,
    {
        self.config = SessionConfig::with_overrides(overrides);
        tracing::debug!(from = %self.state, keys = self.config.len(), "session configured");
        self.state = LifecycleState::Configured;
        self
    }

    /// Marks the lifecycle initialized. Idempotent.
    ///
    /// From `Unconfigured` this first runs `configure` with no overrides, so
    /// the state still passes through `Configured` and the session gets the
    /// plain defaults.
    pub fn initialize(&mut self) -> &mut Self {
        if self.state == LifecycleState::Unconfigured {
            tracing::debug!("initializing without configure, using default session config");
            self.configure(std::iter::empty::<(String, ConfigValue)>());
        }
        self.state = LifecycleState::Initialized;
        self
    }

    /// Creates a session record.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::NotInitialized`] unless `initialize` was
    /// called after the most recent `configure`.
    pub fn create_session(&self) -> Result<SessionRecord, LifecycleError> {
        if self.state != LifecycleState::Initialized {
            tracing::error!(state = %self.state, "session requested before initialize");
            return Err(LifecycleError::NotInitialized { state: self.state });
        }
        Ok(stamp_record(
            &self.config,
            self.clock.as_ref(),
            self.ids.as_ref(),
        ))
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Merged configuration, once one has been applied.
    pub fn config(&self) -> Option<&SessionConfig> {
        (self.state != LifecycleState::Unconfigured).then_some(&self.config)
    }
}

impl Default for SessionLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionLifecycle")
            .field("state", &self.state)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
