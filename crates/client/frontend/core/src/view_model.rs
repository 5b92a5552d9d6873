//! View-model snapshots of the move menu used by presentation layers.
use game_core::Move;

use crate::describe::MoveDescriptionResolver;
use crate::history::{SelectionEntry, SelectionHistory};
use crate::selection::MoveSelectionState;

/// High-level snapshot of the move menu.
#[derive(Clone, Debug)]
pub struct MoveMenu {
    pub entries: Vec<MoveMenuEntry>,
    /// False when there is nothing to select; renderers show no affordance.
    pub interactive: bool,
    pub recent: Vec<SelectionEntry>,
}

impl MoveMenu {
    pub fn from_state(state: &MoveSelectionState, resolver: &MoveDescriptionResolver) -> Self {
        let selected = state.current_selection();
        let entries = state
            .candidates()
            .iter()
            .enumerate()
            .map(|(index, mv)| MoveMenuEntry {
                index,
                mv: mv.clone(),
                description: resolver.describe(mv),
                selected: selected == Some(mv),
            })
            .collect();

        Self {
            entries,
            interactive: state.is_interactive(),
            recent: Vec::new(),
        }
    }

    /// Attaches the most recent selection events, newest first.
    pub fn with_history(mut self, history: &SelectionHistory, limit: usize) -> Self {
        self.recent = history.recent(limit).cloned().collect();
        self
    }

    pub fn selected(&self) -> Option<&MoveMenuEntry> {
        self.entries.iter().find(|entry| entry.selected)
    }
}

/// One row of the move menu in presentation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveMenuEntry {
    pub index: usize,
    pub mv: Move,
    pub description: String,
    pub selected: bool,
}
