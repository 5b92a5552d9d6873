//! Factories for the move description source handed to front-ends.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use game_content::{ContentFactory, MoveTableLoader};
use game_core::MoveDescriptionSource;

/// Builds the description source wired into the resolver at startup.
///
/// `Ok(None)` means "run without descriptions"; moves then describe themselves.
pub trait DescriptionSourceFactory: Send + Sync {
    fn build(&self) -> Result<Option<Arc<dyn MoveDescriptionSource>>>;
}

/// Source factory that loads `moves.ron` from a data directory.
#[derive(Clone, Debug)]
pub struct ContentSourceFactory {
    data_dir: PathBuf,
}

impl ContentSourceFactory {
    /// # Arguments
    ///
    /// * `data_dir` - Path to directory containing `moves.ron`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl DescriptionSourceFactory for ContentSourceFactory {
    fn build(&self) -> Result<Option<Arc<dyn MoveDescriptionSource>>> {
        let table = ContentFactory::new(&self.data_dir).load_moves()?;
        tracing::info!(
            rows = table.len(),
            dir = %self.data_dir.display(),
            "move descriptions loaded"
        );
        Ok(Some(Arc::new(table)))
    }
}

/// Source factory backed by the move table bundled with `game-content`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedSourceFactory;

impl DescriptionSourceFactory for EmbeddedSourceFactory {
    fn build(&self) -> Result<Option<Arc<dyn MoveDescriptionSource>>> {
        let table = MoveTableLoader::embedded()?;
        tracing::info!(rows = table.len(), "bundled move descriptions loaded");
        Ok(Some(Arc::new(table)))
    }
}

/// Factory producing no source at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedSourceFactory;

impl DescriptionSourceFactory for DetachedSourceFactory {
    fn build(&self) -> Result<Option<Arc<dyn MoveDescriptionSource>>> {
        Ok(None)
    }
}
