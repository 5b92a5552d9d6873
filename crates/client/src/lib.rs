//! Terminal client for the tabletop move picker.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ client-bootstrap (session, description source, candidates)
//!   └─→ TerminalFrontend (menu rendering and line input)
//! ```
//!
//! The frontend only reports selections; executing a move belongs to the
//! game that embeds the picker.

pub mod logging;
mod terminal;

pub use client_frontend_core::Frontend;
pub use terminal::TerminalFrontend;
