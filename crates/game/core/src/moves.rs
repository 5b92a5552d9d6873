//! Move identifiers and ordered candidate lists.
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

/// Opaque identifier naming one selectable game action.
///
/// The identifier doubles as the fallback description of the move, so it is
/// kept as the exact string the game-state collaborator produced.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Move(String);

impl Move {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Move {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Move {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Move {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Move {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Ordered, duplicate-free sequence of candidate moves.
///
/// Order is presentation order and is never sorted. When built from an
/// iterator that repeats an identifier, only the first occurrence is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub const fn new() -> Self {
        Self { moves: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Returns the presentation index of `mv`, if it is a candidate.
    pub fn position(&self, mv: &Move) -> Option<usize> {
        self.moves.iter().position(|candidate| candidate == mv)
    }

    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl<M: Into<Move>> FromIterator<M> for MoveList {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let moves = iter
            .into_iter()
            .map(Into::into)
            .filter(|mv: &Move| seen.insert(mv.clone()))
            .collect();
        Self { moves }
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_presentation_order() {
        let list: MoveList = ["path-c", "path-a", "path-b"].into_iter().collect();
        let ids: Vec<_> = list.iter().map(Move::as_str).collect();
        assert_eq!(ids, ["path-c", "path-a", "path-b"]);
    }

    #[test]
    fn drops_repeated_identifiers_after_first_occurrence() {
        let list: MoveList = ["draw", "attack", "draw", "rest", "attack"]
            .into_iter()
            .collect();
        let ids: Vec<_> = list.iter().map(Move::as_str).collect();
        assert_eq!(ids, ["draw", "attack", "rest"]);
        assert_eq!(list.position(&Move::from("rest")), Some(2));
    }

    #[test]
    fn empty_list_has_no_candidates() {
        let list = MoveList::new();
        assert!(list.is_empty());
        assert!(!list.contains(&Move::from("draw")));
        assert_eq!(list.get(0), None);
    }
}
