//! Line-based terminal frontend.
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::Result;
use client_frontend_core::{
    Frontend, FrontendConfig, FrontendContext, MoveMenu, MoveSelectionState, SelectOutcome,
    SelectionHistory,
};
use game_core::Move;

/// Renders the move menu as numbered lines and reads one choice per line.
///
/// A line is either a 1-based menu number or a move id. `q`, `quit` or end of
/// input leaves the loop. Selections are recorded in the history and reported;
/// no move is ever executed.
pub struct TerminalFrontend<R, W> {
    input: R,
    output: W,
    config: FrontendConfig,
    history: SelectionHistory,
}

impl TerminalFrontend<StdinLock<'static>, Stdout> {
    /// Frontend bound to the process stdin/stdout.
    pub fn stdio(config: FrontendConfig) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), config)
    }
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub fn new(input: R, output: W, config: FrontendConfig) -> Self {
        let history = SelectionHistory::new(config.history.capacity);
        Self {
            input,
            output,
            config,
            history,
        }
    }

    pub fn history(&self) -> &SelectionHistory {
        &self.history
    }

    fn render(&mut self, menu: &MoveMenu) -> io::Result<()> {
        writeln!(self.output)?;
        for entry in &menu.entries {
            let marker = if entry.selected { '*' } else { ' ' };
            write!(
                self.output,
                "{} {:>2}. {}",
                marker,
                entry.index + 1,
                entry.description
            )?;
            if self.config.menu.show_move_ids && entry.description != entry.mv.as_str() {
                write!(self.output, " [{}]", entry.mv)?;
            }
            writeln!(self.output)?;
        }

        if !menu.recent.is_empty() {
            let recent: Vec<_> = menu.recent.iter().map(|e| e.mv.as_str()).collect();
            writeln!(self.output, "Recent: {}", recent.join(", "))?;
        }
        Ok(())
    }

    /// Reads the next non-blank line. `None` on end of input.
    fn read_choice(&mut self) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let choice = line.trim();
            if !choice.is_empty() {
                return Ok(Some(choice.to_string()));
            }
        }
    }
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn run(&mut self, context: FrontendContext) -> Result<()> {
        let FrontendContext {
            resolver,
            candidates,
            session_label,
        } = context;
        let mut state = MoveSelectionState::with_candidates(candidates);

        writeln!(self.output, "== {} ==", session_label)?;
        if !state.is_interactive() {
            writeln!(self.output, "No moves to choose from.")?;
            tracing::info!(session = %session_label, "no candidate moves; nothing to present");
            return Ok(());
        }

        loop {
            let menu = MoveMenu::from_state(&state, &resolver)
                .with_history(&self.history, self.config.history.shown);
            self.render(&menu)?;

            let Some(choice) = self.read_choice()? else {
                break;
            };
            if matches!(choice.as_str(), "q" | "quit") {
                break;
            }

            let outcome = match choice.parse::<usize>() {
                Ok(number) if number >= 1 => state.select_index(number - 1, &mut self.history),
                Ok(_) => SelectOutcome::Ignored,
                Err(_) => state.select(&Move::from(choice.as_str()), &mut self.history),
            };

            match (outcome, state.current_selection()) {
                (SelectOutcome::Selected, Some(mv)) => {
                    tracing::info!(session = %session_label, %mv, "move chosen");
                    writeln!(self.output, "Selected: {}", resolver.describe(mv))?;
                }
                _ => writeln!(self.output, "'{}' is not one of the offered moves.", choice)?,
            }
        }

        writeln!(self.output, "Bye.")?;
        tracing::info!(
            session = %session_label,
            selections = self.history.len(),
            "terminal frontend finished"
        );
        Ok(())
    }
}
