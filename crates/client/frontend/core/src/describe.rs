//! Best-effort human-readable descriptions for moves.
//!
//! Description data arrives asynchronously and may be partial, so every lookup
//! stage is optional: the source may be missing, it may have no record for the
//! move, and the record may lack both fields. Each stage falls through to the
//! next, ending at the move identifier itself. Describing a move never fails.
use std::sync::Arc;

use game_core::{GameError, Move, MoveDescriptionSource, MoveRecord};

/// Resolves the display text for `mv`.
///
/// Priority: a non-empty `Event` field, then a non-empty `Action` field, then
/// the move identifier. Lookup errors are logged and treated as "no record".
pub fn describe(mv: &Move, source: Option<&dyn MoveDescriptionSource>) -> String {
    let record = source.and_then(|source| lookup_record(mv, source));

    record
        .as_ref()
        .and_then(MoveRecord::first_populated)
        .map(|(_, text)| text.to_string())
        .unwrap_or_else(|| mv.to_string())
}

fn lookup_record(mv: &Move, source: &dyn MoveDescriptionSource) -> Option<MoveRecord> {
    match source.record(mv) {
        Ok(record) => {
            if record.is_none() {
                tracing::trace!(%mv, "no description record");
            }
            record
        }
        Err(err) => {
            tracing::warn!(
                %mv,
                code = err.error_code(),
                "description lookup failed, falling back to move id: {}",
                err
            );
            None
        }
    }
}

/// Description resolver bound to an injected data source.
///
/// The source can be attached after construction, which models description
/// data that finishes loading after the move menu is already on screen.
#[derive(Clone, Default)]
pub struct MoveDescriptionResolver {
    source: Option<Arc<dyn MoveDescriptionSource>>,
}

impl MoveDescriptionResolver {
    pub fn new(source: Arc<dyn MoveDescriptionSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Resolver with no data source; every move describes itself.
    pub fn detached() -> Self {
        Self { source: None }
    }

    pub fn with_source(source: Option<Arc<dyn MoveDescriptionSource>>) -> Self {
        Self { source }
    }

    /// Attaches (or replaces) the data source.
    pub fn set_source(&mut self, source: Arc<dyn MoveDescriptionSource>) {
        self.source = Some(source);
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn describe(&self, mv: &Move) -> String {
        describe(mv, self.source.as_deref())
    }
}

impl std::fmt::Debug for MoveDescriptionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveDescriptionResolver")
            .field("has_source", &self.has_source())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{MoveTable, SourceError};

    struct FailingSource(SourceError);

    impl MoveDescriptionSource for FailingSource {
        fn record(&self, _mv: &Move) -> Result<Option<MoveRecord>, SourceError> {
            Err(self.0.clone())
        }
    }

    fn table() -> MoveTable {
        [
            (
                "draw",
                MoveRecord::default()
                    .with_event("Draw a card")
                    .with_action("Move"),
            ),
            ("advance", MoveRecord::default().with_action("Move forward")),
            ("unset", MoveRecord::default().with_event("").with_action("")),
            ("spaced", MoveRecord::default().with_event(" ").with_action("Move")),
            ("empty", MoveRecord::default()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn prefers_event_over_action() {
        assert_eq!(describe(&Move::from("draw"), Some(&table())), "Draw a card");
    }

    #[test]
    fn falls_back_to_action() {
        assert_eq!(
            describe(&Move::from("advance"), Some(&table())),
            "Move forward"
        );
    }

    #[test]
    fn falls_back_to_identifier_at_every_missing_stage() {
        let table = table();
        // no source
        assert_eq!(describe(&Move::from("draw"), None), "draw");
        // no record
        assert_eq!(describe(&Move::from("jump"), Some(&table)), "jump");
        // record without fields
        assert_eq!(describe(&Move::from("empty"), Some(&table)), "empty");
        // record with empty fields
        assert_eq!(describe(&Move::from("unset"), Some(&table)), "unset");
    }

    #[test]
    fn whitespace_event_is_returned_verbatim() {
        assert_eq!(describe(&Move::from("spaced"), Some(&table())), " ");
    }

    #[test]
    fn absorbs_source_errors() {
        let failing = FailingSource(SourceError::Unavailable);
        assert_eq!(describe(&Move::from("draw"), Some(&failing)), "draw");

        let malformed = FailingSource(SourceError::Malformed {
            mv: Move::from("draw"),
            reason: "unterminated quote".into(),
        });
        assert_eq!(describe(&Move::from("draw"), Some(&malformed)), "draw");
    }

    #[test]
    fn resolver_picks_up_late_source() {
        let mut resolver = MoveDescriptionResolver::detached();
        assert_eq!(resolver.describe(&Move::from("draw")), "draw");

        resolver.set_source(Arc::new(table()));
        assert!(resolver.has_source());
        assert_eq!(resolver.describe(&Move::from("draw")), "Draw a card");
    }
}
