//! Move description table loader.

use std::collections::HashMap;
use std::path::Path;

use game_core::{MoveRecord, MoveTable};

use crate::loaders::{LoadResult, read_file};

/// Loader for move description tables from RON files.
///
/// The file is a map from move identifier to a record with optional `Event`
/// and `Action` fields:
///
/// ```text
/// #![enable(implicit_some)]
/// {
///     "draw": (Event: "Draw a card", Action: "Draw"),
///     "advance": (Action: "Move forward"),
/// }
/// ```
pub struct MoveTableLoader;

impl MoveTableLoader {
    /// Load a move table from a RON file.
    pub fn load(path: &Path) -> LoadResult<MoveTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load move table {}: {}", path.display(), e))
    }

    /// Parse a move table from RON text.
    pub fn parse(content: &str) -> LoadResult<MoveTable> {
        let rows: HashMap<String, MoveRecord> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse move table RON: {}", e))?;

        Ok(rows.into_iter().collect())
    }

    /// Loads the move table bundled with this crate.
    pub fn embedded() -> LoadResult<MoveTable> {
        Self::parse(include_str!("../../data/moves.ron"))
    }
}
