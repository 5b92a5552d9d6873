//! Content loaders for reading move and session data from files.
//!
//! Move description tables are RON maps; session overrides are flat TOML tables.

pub mod factory;
pub mod moves;
pub mod overrides;

pub use factory::ContentFactory;
pub use moves::MoveTableLoader;
pub use overrides::OverridesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
