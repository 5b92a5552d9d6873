//! Content factory for loading move and session data from a directory.

use std::path::{Path, PathBuf};

use game_core::{ConfigOverrides, MoveTable};

use crate::loaders::{LoadResult, MoveTableLoader, OverridesLoader};

/// Content factory that loads all content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── moves.ron
/// └── session.toml   (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const MOVES_FILE: &'static str = "moves.ron";
    pub const OVERRIDES_FILE: &'static str = "session.toml";

    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the move description table from `moves.ron`.
    pub fn load_moves(&self) -> LoadResult<MoveTable> {
        let path = self.data_dir.join(Self::MOVES_FILE);
        MoveTableLoader::load(&path)
    }

    /// Load session overrides from `session.toml`.
    ///
    /// A missing file means "no overrides" and yields an empty mapping.
    pub fn load_overrides(&self) -> LoadResult<ConfigOverrides> {
        let path = self.data_dir.join(Self::OVERRIDES_FILE);
        if !path.exists() {
            return Ok(ConfigOverrides::new());
        }
        OverridesLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
