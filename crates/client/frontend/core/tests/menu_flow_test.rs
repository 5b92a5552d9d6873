use std::sync::Arc;

use client_frontend_core::{
    MoveDescriptionResolver, MoveMenu, MoveSelectionState, SelectionHistory, SelectionPhase,
};
use game_core::{Move, MoveDescriptionSource, MoveRecord, MoveTable, SourceError};

struct DisconnectedTable;

impl MoveDescriptionSource for DisconnectedTable {
    fn record(&self, _mv: &Move) -> Result<Option<MoveRecord>, SourceError> {
        Err(SourceError::Unavailable)
    }
}

fn table() -> MoveTable {
    [
        ("draw", MoveRecord::default().with_event("Draw a card")),
        ("advance", MoveRecord::default().with_action("Move forward")),
        ("trade", MoveRecord::new(Some(String::new()), Some("Swap".into()))),
    ]
    .into_iter()
    .collect()
}

#[test]
fn menu_tracks_a_turn_of_selections() {
    let resolver = MoveDescriptionResolver::new(Arc::new(table()));
    let mut state = MoveSelectionState::new();
    let mut history = SelectionHistory::new(8);

    assert_eq!(state.phase(), SelectionPhase::Empty);
    assert!(!MoveMenu::from_state(&state, &resolver).interactive);

    state.initialize(["draw", "trade", "pass"]);
    assert!(state.select(&Move::from("trade"), &mut history).is_selected());
    assert!(!state.select(&Move::from("advance"), &mut history).is_selected());

    let menu = MoveMenu::from_state(&state, &resolver).with_history(&history, 5);
    let described: Vec<_> = menu.entries.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(described, ["Draw a card", "Swap", "pass"]);
    assert_eq!(menu.selected().map(|e| e.index), Some(1));
    assert_eq!(menu.recent.len(), 1);
    assert!(!menu.recent[0].committed);

    // New turn: the selection survives only while it is still offered.
    state.initialize(["draw", "advance"]);
    assert_eq!(state.current_selection(), None);
    assert!(state.select_index(1, &mut history).is_selected());
    assert_eq!(history.last().map(|e| e.mv.as_str()), Some("advance"));
}

#[test]
fn failing_source_falls_back_to_move_ids() {
    let resolver = MoveDescriptionResolver::new(Arc::new(DisconnectedTable));
    let state = MoveSelectionState::with_candidates(["draw", "advance"]);

    let menu = MoveMenu::from_state(&state, &resolver);
    let described: Vec<_> = menu.entries.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(described, ["draw", "advance"]);
}

#[test]
fn detached_resolver_uses_move_ids() {
    let mut resolver = MoveDescriptionResolver::detached();
    assert_eq!(resolver.describe(&Move::from("draw")), "draw");

    resolver.set_source(Arc::new(table()));
    assert_eq!(resolver.describe(&Move::from("draw")), "Draw a card");
}
