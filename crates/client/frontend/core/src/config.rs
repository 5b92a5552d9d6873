//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (terminal, browser bridge, etc.).

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub history: HistoryConfig,
    pub menu: MenuConfig,
}

impl FrontendConfig {
    pub const fn new(history: HistoryConfig, menu: MenuConfig) -> Self {
        Self { history, menu }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MOVE_HISTORY_CAPACITY` - Selection history size (default: 32)
    /// - `MOVE_HISTORY_SHOWN` - History rows shown under the menu (default: 3)
    /// - `SHOW_MOVE_IDS` - Show raw move ids next to descriptions (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("MOVE_HISTORY_CAPACITY") {
            config.history.capacity = capacity.max(1);
        }
        if let Some(shown) = read_env::<usize>("MOVE_HISTORY_SHOWN") {
            config.history.shown = shown;
        }
        if let Some(show) = read_env_bool("SHOW_MOVE_IDS") {
            config.menu.show_move_ids = show;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct HistoryConfig {
    pub capacity: usize,
    pub shown: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: 32,
            shown: 3,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MenuConfig {
    /// Append the move id after its description (useful while authoring data).
    pub show_move_ids: bool,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FrontendConfig::default();
        assert_eq!(config.history.capacity, 32);
        assert_eq!(config.history.shown, 3);
        assert!(!config.menu.show_move_ids);
    }

    #[test]
    fn bool_spellings() {
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
