//! Cross-frontend primitives for presenting the move menu.
//!
//! Houses description resolution, selection state, selection history and the
//! menu view model that both the terminal client and future browser bindings
//! can reuse.
pub mod config;
pub mod describe;
pub mod frontend;
pub mod history;
pub mod selection;
pub mod view_model;

pub use config::{FrontendConfig, HistoryConfig, MenuConfig};
pub use describe::{MoveDescriptionResolver, describe};
pub use frontend::{Frontend, FrontendContext};
pub use history::{SelectionEntry, SelectionHistory};
pub use selection::{MoveSelectionState, SelectOutcome, SelectionListener, SelectionPhase};
pub use view_model::{MoveMenu, MoveMenuEntry};
