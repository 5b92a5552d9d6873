//! Errors surfaced by session bootstrapping.
use std::fmt;

use game_core::{ErrorSeverity, GameError};

/// Lifecycle stage of a session initializer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Unconfigured,
    Configured,
    Initialized,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LifecycleState::Unconfigured => "unconfigured",
            LifecycleState::Configured => "configured",
            LifecycleState::Initialized => "initialized",
        };
        write!(f, "{}", label)
    }
}

/// Misuse of the initializer lifecycle by the integrating code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("must initialize before creating a session instance (state: {state})")]
    NotInitialized { state: LifecycleState },
}

impl GameError for LifecycleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            LifecycleError::NotInitialized { .. } => "LIFECYCLE_NOT_INITIALIZED",
        }
    }
}
