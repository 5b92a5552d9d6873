//! Builds the session, description source, and candidate list used by front-ends.
use std::sync::Arc;

use anyhow::Result;
use game_content::ContentFactory;
use game_core::{ConfigOverrides, MoveDescriptionSource, MoveList};

use crate::config::BootstrapConfig;
use crate::initializer::SessionInitializer;
use crate::session::{Clock, IdSource, RandomIdSource, SessionRecord, SystemClock};
use crate::sources::{ContentSourceFactory, DescriptionSourceFactory, EmbeddedSourceFactory};

/// Builder that assembles the session and its collaborators for clients.
///
/// This is the single place where the process-wide wiring happens; core
/// components receive their sources as parameters instead of reaching for
/// globals.
pub struct SetupBuilder {
    config: BootstrapConfig,
    source_factory: Arc<dyn DescriptionSourceFactory>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdSource>,
}

impl SetupBuilder {
    pub fn new(config: BootstrapConfig) -> Self {
        let source_factory: Arc<dyn DescriptionSourceFactory> = match &config.data_dir {
            Some(dir) => Arc::new(ContentSourceFactory::new(dir)),
            None => Arc::new(EmbeddedSourceFactory),
        };
        Self {
            config,
            source_factory,
            clock: Arc::new(SystemClock),
            ids: Arc::new(RandomIdSource),
        }
    }

    /// Provide a custom description source factory.
    pub fn source_factory(mut self, factory: impl DescriptionSourceFactory + 'static) -> Self {
        self.source_factory = Arc::new(factory);
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn id_source(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Assembles the setup.
    ///
    /// # Errors
    ///
    /// Fails when the overrides file exists but cannot be parsed. A failing
    /// description source is not an error: it is logged and the setup runs
    /// without descriptions.
    pub fn build(self) -> Result<ClientSetup> {
        let overrides = self.collect_overrides()?;

        let session = SessionInitializer::with_sources(self.clock, self.ids)
            .configure(overrides)
            .initialize()
            .create_session();

        let source = match self.source_factory.build() {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!("Move descriptions unavailable: {:#}. Continuing without.", e);
                None
            }
        };

        let candidates = if self.config.candidates.is_empty() {
            default_candidates(source.as_deref())
        } else {
            self.config.candidates.iter().cloned().collect()
        };
        tracing::debug!(candidates = candidates.len(), "candidate moves assembled");

        Ok(ClientSetup {
            config: self.config,
            session,
            source,
            candidates,
        })
    }

    /// File overrides first, then environment overrides on top.
    fn collect_overrides(&self) -> Result<ConfigOverrides> {
        let mut overrides = match &self.config.data_dir {
            Some(dir) => ContentFactory::new(dir).load_overrides()?,
            None => ConfigOverrides::new(),
        };
        overrides.extend(self.config.overrides.clone());
        Ok(overrides)
    }
}

/// Offers every row of the description table when no list was given.
///
/// Sources that cannot enumerate their rows offer nothing until the game state
/// supplies a list.
fn default_candidates(source: Option<&dyn MoveDescriptionSource>) -> MoveList {
    source
        .and_then(|source| source.known_moves())
        .map(|moves| moves.into_iter().collect())
        .unwrap_or_default()
}

/// Everything a client needs to start presenting moves.
pub struct ClientSetup {
    pub config: BootstrapConfig,
    pub session: SessionRecord,
    pub source: Option<Arc<dyn MoveDescriptionSource>>,
    pub candidates: MoveList,
}
