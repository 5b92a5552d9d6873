//! Trait describing a runnable client front-end.
use anyhow::Result;
use game_core::MoveList;

use crate::describe::MoveDescriptionResolver;

/// Everything a frontend needs to present the move menu.
///
/// Frontends own presentation and input only. They hand selection events to a
/// listener and never execute moves themselves.
#[derive(Clone, Debug)]
pub struct FrontendContext {
    pub resolver: MoveDescriptionResolver,
    pub candidates: MoveList,
    /// Session label shown in headers and logs.
    pub session_label: String,
}

/// Frontend abstraction for UI layers.
///
/// # Implementations
///
/// - `TerminalFrontend`: line-based terminal menu (tabletop-client)
///
/// # Example Implementation
///
/// ```no_run
/// use anyhow::Result;
/// use client_frontend_core::{Frontend, FrontendContext, MoveSelectionState};
///
/// struct FirstMoveFrontend;
///
/// impl Frontend for FirstMoveFrontend {
///     fn run(&mut self, context: FrontendContext) -> Result<()> {
///         let mut state = MoveSelectionState::with_candidates(context.candidates);
///         let _ = state.select_index(0, &mut |mv: &game_core::Move, _committed: bool| {
///             println!("picked {}", context.resolver.describe(mv));
///         });
///         Ok(())
///     }
/// }
/// ```
pub trait Frontend {
    /// Run the frontend until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal I/O error.
    fn run(&mut self, context: FrontendContext) -> Result<()>;
}
