//! Read-only lookup capability for move description records.
//!
//! Sources may be backed by a loaded data file, a remote table that is still
//! arriving, or anything else able to answer "what is the record for this
//! move". Absence of a record is not an error; `SourceError` is reserved for
//! lookups that genuinely failed.
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{ErrorSeverity, GameError};
use crate::moves::Move;
use crate::record::MoveRecord;

/// Errors raised by a failing description lookup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The backing data is not available (not loaded, connection dropped).
    #[error("move description source is unavailable")]
    Unavailable,

    /// A record exists for the move but could not be interpreted.
    #[error("record for move '{mv}' is malformed: {reason}")]
    Malformed { mv: Move, reason: String },

    /// Any other backend failure.
    #[error("move description backend failed: {0}")]
    Backend(String),
}

impl GameError for SourceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SourceError::Unavailable | SourceError::Backend(_) => ErrorSeverity::Recoverable,
            SourceError::Malformed { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SourceError::Unavailable => "SOURCE_UNAVAILABLE",
            SourceError::Malformed { .. } => "SOURCE_MALFORMED_RECORD",
            SourceError::Backend(_) => "SOURCE_BACKEND",
        }
    }
}

/// Capability exposing description records keyed by move.
pub trait MoveDescriptionSource: Send + Sync {
    /// Looks up the record for `mv`.
    ///
    /// Returns `Ok(None)` when the source has no row for the move.
    fn record(&self, mv: &Move) -> Result<Option<MoveRecord>, SourceError>;

    /// Every move the source has a row for, if it can enumerate them.
    fn known_moves(&self) -> Option<Vec<Move>> {
        None
    }
}

impl<S: MoveDescriptionSource + ?Sized> MoveDescriptionSource for &S {
    fn record(&self, mv: &Move) -> Result<Option<MoveRecord>, SourceError> {
        (**self).record(mv)
    }

    fn known_moves(&self) -> Option<Vec<Move>> {
        (**self).known_moves()
    }
}

impl<S: MoveDescriptionSource + ?Sized> MoveDescriptionSource for Box<S> {
    fn record(&self, mv: &Move) -> Result<Option<MoveRecord>, SourceError> {
        (**self).record(mv)
    }

    fn known_moves(&self) -> Option<Vec<Move>> {
        (**self).known_moves()
    }
}

impl<S: MoveDescriptionSource + ?Sized> MoveDescriptionSource for Arc<S> {
    fn record(&self, mv: &Move) -> Result<Option<MoveRecord>, SourceError> {
        (**self).record(mv)
    }

    fn known_moves(&self) -> Option<Vec<Move>> {
        (**self).known_moves()
    }
}

/// In-memory description table keyed by move identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveTable {
    records: HashMap<Move, MoveRecord>,
}

impl MoveTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the record for `mv`, returning the previous one.
    pub fn insert(&mut self, mv: impl Into<Move>, record: MoveRecord) -> Option<MoveRecord> {
        self.records.insert(mv.into(), record)
    }

    pub fn get(&self, mv: &Move) -> Option<&MoveRecord> {
        self.records.get(mv)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the table's move identifiers in sorted order.
    pub fn moves(&self) -> Vec<Move> {
        let mut moves: Vec<_> = self.records.keys().cloned().collect();
        moves.sort();
        moves
    }
}

impl<M: Into<Move>> FromIterator<(M, MoveRecord)> for MoveTable {
    fn from_iter<I: IntoIterator<Item = (M, MoveRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(|(mv, rec)| (mv.into(), rec)).collect(),
        }
    }
}

impl MoveDescriptionSource for MoveTable {
    fn record(&self, mv: &Move) -> Result<Option<MoveRecord>, SourceError> {
        Ok(self.records.get(mv).cloned())
    }

    fn known_moves(&self) -> Option<Vec<Move>> {
        Some(self.moves())
    }
}
