//! Move selection state for the candidate menu.
//!
//! Selecting a move only records the player's current choice and notifies a
//! listener; it never commits the move. Committing is a separate step owned by
//! whoever supplied the listener, so players can browse and change their choice
//! freely before anything game-affecting happens.
use game_core::{Move, MoveList};

/// Receives selection events from [`MoveSelectionState`].
pub trait SelectionListener {
    /// Called synchronously, before `select` returns.
    ///
    /// `committed` is always `false` for events emitted by the selection state.
    fn on_select(&mut self, mv: &Move, committed: bool);
}

impl<F> SelectionListener for F
where
    F: FnMut(&Move, bool),
{
    fn on_select(&mut self, mv: &Move, committed: bool) {
        self(mv, committed)
    }
}

/// Whether the menu currently offers anything to pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionPhase {
    /// No candidates; no interactive affordance is exposed.
    Empty,
    /// At least one candidate.
    Selectable,
}

/// Result of a selection request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum SelectOutcome {
    /// The move became the current selection and the listener was notified.
    Selected,
    /// The move is not a current candidate (typically a stale UI event).
    /// Nothing changed and the listener was not called.
    Ignored,
}

impl SelectOutcome {
    pub const fn is_selected(self) -> bool {
        matches!(self, Self::Selected)
    }
}

/// Candidate list plus the player's current choice.
///
/// Invariant: when `selected` is set it is a member of `candidates`.
#[derive(Clone, Debug, Default)]
pub struct MoveSelectionState {
    candidates: MoveList,
    selected: Option<Move>,
}

impl MoveSelectionState {
    /// Creates an empty state with nothing to select.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidates<I, M>(candidates: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Move>,
    {
        let mut state = Self::new();
        state.initialize(candidates);
        state
    }

    /// Replaces the candidate list.
    ///
    /// The current selection survives only if it is still a candidate.
    /// An empty list is valid and puts the state in [`SelectionPhase::Empty`].
    pub fn initialize<I, M>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = M>,
        M: Into<Move>,
    {
        self.candidates = candidates.into_iter().collect();

        if let Some(previous) = &self.selected
            && !self.candidates.contains(previous)
        {
            tracing::debug!(%previous, "selection dropped, no longer a candidate");
            self.selected = None;
        }

        tracing::debug!(
            candidates = self.candidates.len(),
            selected = ?self.selected,
            "move candidates initialized"
        );
    }

    /// Selects `mv` if it is a candidate and notifies `listener` with
    /// `committed = false`. Unknown moves are ignored.
    pub fn select<L>(&mut self, mv: &Move, listener: &mut L) -> SelectOutcome
    where
        L: SelectionListener + ?Sized,
    {
        if !self.candidates.contains(mv) {
            tracing::debug!(%mv, "ignoring selection of non-candidate move");
            return SelectOutcome::Ignored;
        }

        self.selected = Some(mv.clone());
        tracing::debug!(%mv, "move selected");
        listener.on_select(mv, false);
        SelectOutcome::Selected
    }

    /// Selects the candidate at presentation `index`.
    ///
    /// Out-of-range indices are ignored like unknown moves.
    pub fn select_index<L>(&mut self, index: usize, listener: &mut L) -> SelectOutcome
    where
        L: SelectionListener + ?Sized,
    {
        match self.candidates.get(index).cloned() {
            Some(mv) => self.select(&mv, listener),
            None => {
                tracing::debug!(index, "ignoring selection of out-of-range index");
                SelectOutcome::Ignored
            }
        }
    }

    pub fn current_selection(&self) -> Option<&Move> {
        self.selected.as_ref()
    }

    pub fn candidates(&self) -> &MoveList {
        &self.candidates
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.candidates.is_empty() {
            SelectionPhase::Empty
        } else {
            SelectionPhase::Selectable
        }
    }

    /// True when the menu should expose an interactive affordance.
    pub fn is_interactive(&self) -> bool {
        self.phase() == SelectionPhase::Selectable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<(Move, bool)>,
    }

    impl SelectionListener for Recorder {
        fn on_select(&mut self, mv: &Move, committed: bool) {
            self.events.push((mv.clone(), committed));
        }
    }

    #[test]
    fn empty_list_exposes_nothing_to_select() {
        let state = MoveSelectionState::with_candidates(Vec::<Move>::new());
        assert_eq!(state.phase(), SelectionPhase::Empty);
        assert!(!state.is_interactive());
        assert_eq!(state.current_selection(), None);
    }

    #[test]
    fn selecting_each_candidate_updates_selection() {
        let moves = ["draw", "discard", "advance"];
        let mut state = MoveSelectionState::with_candidates(moves);
        let mut recorder = Recorder::default();

        for id in moves {
            let mv = Move::from(id);
            assert_eq!(state.select(&mv, &mut recorder), SelectOutcome::Selected);
            assert_eq!(state.current_selection(), Some(&mv));
        }
        assert_eq!(recorder.events.len(), 3);
    }

    #[test]
    fn listener_never_sees_committed_selection() {
        let mut state = MoveSelectionState::with_candidates(["draw"]);
        let mut seen = Vec::new();
        let mut listener = |mv: &Move, committed: bool| seen.push((mv.clone(), committed));

        let _ = state.select(&Move::from("draw"), &mut listener);
        let _ = state.select(&Move::from("draw"), &mut listener);

        assert_eq!(
            seen,
            vec![(Move::from("draw"), false), (Move::from("draw"), false)]
        );
    }

    #[test]
    fn unknown_move_is_a_silent_no_op() {
        let mut state = MoveSelectionState::with_candidates(["draw", "advance"]);
        let mut recorder = Recorder::default();

        assert_eq!(
            state.select(&Move::from("jump"), &mut recorder),
            SelectOutcome::Ignored
        );
        assert_eq!(state.current_selection(), None);

        let _ = state.select(&Move::from("advance"), &mut recorder);
        assert_eq!(
            state.select(&Move::from("jump"), &mut recorder),
            SelectOutcome::Ignored
        );
        assert_eq!(state.current_selection(), Some(&Move::from("advance")));
        assert_eq!(recorder.events.len(), 1);
    }

    #[test]
    fn select_on_empty_state_is_ignored() {
        let mut state = MoveSelectionState::new();
        let mut recorder = Recorder::default();
        assert_eq!(
            state.select(&Move::from("draw"), &mut recorder),
            SelectOutcome::Ignored
        );
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn reinitialize_drops_selection_missing_from_new_list() {
        let mut state = MoveSelectionState::with_candidates(["draw", "advance"]);
        let _ = state.select(&Move::from("draw"), &mut Recorder::default());

        state.initialize(["advance", "retreat"]);
        assert_eq!(state.current_selection(), None);
        assert_eq!(state.phase(), SelectionPhase::Selectable);
    }

    #[test]
    fn reinitialize_keeps_selection_still_offered() {
        let mut state = MoveSelectionState::with_candidates(["draw", "advance"]);
        let _ = state.select(&Move::from("advance"), &mut Recorder::default());

        state.initialize(["retreat", "advance"]);
        assert_eq!(state.current_selection(), Some(&Move::from("advance")));
    }

    #[test]
    fn reinitialize_with_empty_list_returns_to_empty() {
        let mut state = MoveSelectionState::with_candidates(["draw"]);
        let _ = state.select(&Move::from("draw"), &mut Recorder::default());

        state.initialize(Vec::<Move>::new());
        assert_eq!(state.phase(), SelectionPhase::Empty);
        assert_eq!(state.current_selection(), None);
    }

    #[test]
    fn select_index_follows_presentation_order() {
        let mut state = MoveSelectionState::with_candidates(["retreat", "draw"]);
        let mut recorder = Recorder::default();

        assert!(state.select_index(1, &mut recorder).is_selected());
        assert_eq!(state.current_selection(), Some(&Move::from("draw")));
        assert_eq!(state.select_index(5, &mut recorder), SelectOutcome::Ignored);
        assert_eq!(state.current_selection(), Some(&Move::from("draw")));
    }
}
