//! Bootstrap configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::{ConfigOverrides, ConfigValue, Move, SessionConfig};

/// Configuration required to bootstrap a session and its move menu.
#[derive(Clone, Debug, Default)]
pub struct BootstrapConfig {
    /// Directory holding `moves.ron` / `session.toml`. `None` uses the
    /// bundled move table and no file overrides.
    pub data_dir: Option<PathBuf>,
    /// Label used for log directories; the client falls back to the launch time.
    pub log_label: Option<String>,
    /// Overrides from the environment, applied after file overrides.
    pub overrides: ConfigOverrides,
    /// Moves to offer. Empty means "every move in the description table".
    pub candidates: Vec<Move>,
}

impl BootstrapConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Data directory with `moves.ron` and `session.toml`
    /// - `GAME_SESSION_LABEL` - Log directory label (default: launch time)
    /// - `SESSION_DEBUG_MODE` - Override for `debugMode`
    /// - `SESSION_MAX_PLAYERS` - Override for `maxPlayers`
    /// - `SESSION_STARTING_POINTS` - Override for `startingPoints`
    /// - `CANDIDATE_MOVES` - Comma-separated move ids to offer
    pub fn from_env() -> Self {
        let mut config = Self {
            data_dir: env::var("CONTENT_DATA_DIR").ok().map(PathBuf::from),
            log_label: env::var("GAME_SESSION_LABEL").ok(),
            ..Self::default()
        };

        for (var, key) in [
            ("SESSION_DEBUG_MODE", SessionConfig::DEBUG_MODE),
            ("SESSION_MAX_PLAYERS", SessionConfig::MAX_PLAYERS),
            ("SESSION_STARTING_POINTS", SessionConfig::STARTING_POINTS),
        ] {
            if let Ok(raw) = env::var(var) {
                config
                    .overrides
                    .insert(key.to_string(), ConfigValue::parse_loose(&raw));
            }
        }

        if let Ok(raw) = env::var("CANDIDATE_MOVES") {
            config.candidates = parse_move_list(&raw);
        }

        config
    }
}

/// Splits a comma-separated list into moves, skipping blank entries.
pub fn parse_move_list(raw: &str) -> Vec<Move> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(Move::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_list_skips_blanks_and_trims() {
        let moves = parse_move_list(" draw, ,advance ,,retreat");
        assert_eq!(
            moves,
            vec![
                Move::from("draw"),
                Move::from("advance"),
                Move::from("retreat")
            ]
        );
    }

    #[test]
    fn empty_list_parses_to_nothing() {
        assert!(parse_move_list("").is_empty());
    }
}
