//! Session configuration: a flat option map layered over fixed defaults.
use std::collections::BTreeMap;
use std::fmt;

/// Scalar value stored under a configuration key.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ConfigValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Parses a raw string (environment variable, CLI flag) into the most
    /// specific scalar it represents.
    ///
    /// Surrounding whitespace is dropped. Non-finite numbers (`nan`, `inf`)
    /// stay text since JSON cannot represent them.
    pub fn parse_loose(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            _ => {}
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::Int(value);
        }
        if let Ok(value) = trimmed.parse::<f64>()
            && value.is_finite()
        {
            return Self::Float(value);
        }
        Self::Text(trimmed.to_string())
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{}", value),
            Self::Int(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Caller-supplied partial mapping applied over the defaults.
pub type ConfigOverrides = BTreeMap<String, ConfigValue>;

/// Flat mapping of named session options.
///
/// Built by overlaying caller overrides onto [`SessionConfig::defaults`].
/// Unknown keys are preserved verbatim; no schema validation happens here.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SessionConfig {
    values: BTreeMap<String, ConfigValue>,
}

impl SessionConfig {
    pub const DEBUG_MODE: &'static str = "debugMode";
    pub const MAX_PLAYERS: &'static str = "maxPlayers";
    pub const STARTING_POINTS: &'static str = "startingPoints";

    // ===== defaults =====
    pub const DEFAULT_DEBUG_MODE: bool = false;
    pub const DEFAULT_MAX_PLAYERS: i64 = 4;
    pub const DEFAULT_STARTING_POINTS: i64 = 100;

    /// The fixed default mapping.
    pub fn defaults() -> Self {
        let mut values = BTreeMap::new();
        values.insert(
            Self::DEBUG_MODE.to_string(),
            ConfigValue::Bool(Self::DEFAULT_DEBUG_MODE),
        );
        values.insert(
            Self::MAX_PLAYERS.to_string(),
            ConfigValue::Int(Self::DEFAULT_MAX_PLAYERS),
        );
        values.insert(
            Self::STARTING_POINTS.to_string(),
            ConfigValue::Int(Self::DEFAULT_STARTING_POINTS),
        );
        Self { values }
    }

    /// Defaults with `overrides` applied on top. Override keys win.
    pub fn with_overrides<I, K>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, ConfigValue)>,
        K: Into<String>,
    {
        let mut config = Self::defaults();
        config.merge(overrides);
        config
    }

    /// Shallow overlay: each key in `overrides` replaces the existing value.
    pub fn merge<I, K>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, ConfigValue)>,
        K: Into<String>,
    {
        for (key, value) in overrides {
            self.values.insert(key.into(), value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `debugMode` as a boolean, or `None` when an override stored a
    /// non-boolean value under the key.
    pub fn debug_mode(&self) -> Option<bool> {
        self.get(Self::DEBUG_MODE).and_then(ConfigValue::as_bool)
    }

    pub fn max_players(&self) -> Option<i64> {
        self.get(Self::MAX_PLAYERS).and_then(ConfigValue::as_int)
    }

    pub fn starting_points(&self) -> Option<i64> {
        self.get(Self::STARTING_POINTS).and_then(ConfigValue::as_int)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SessionConfig::defaults();
        assert_eq!(config.debug_mode(), Some(false));
        assert_eq!(config.max_players(), Some(4));
        assert_eq!(config.starting_points(), Some(100));
        assert_eq!(config.len(), 3);
    }

    #[test]
    fn overrides_take_precedence_and_keep_unknown_keys() {
        let config = SessionConfig::with_overrides([
            ("maxPlayers", ConfigValue::Int(2)),
            ("theme", ConfigValue::from("dark")),
        ]);
        assert_eq!(config.max_players(), Some(2));
        assert_eq!(config.debug_mode(), Some(false));
        assert_eq!(config.starting_points(), Some(100));
        assert_eq!(config.get("theme"), Some(&ConfigValue::Text("dark".into())));
    }

    #[test]
    fn override_may_change_value_type() {
        let config = SessionConfig::with_overrides([("debugMode", ConfigValue::from("verbose"))]);
        assert_eq!(config.debug_mode(), None);
        assert_eq!(
            config.get(SessionConfig::DEBUG_MODE).and_then(ConfigValue::as_str),
            Some("verbose")
        );
    }

    #[test]
    fn loose_parsing_picks_most_specific_scalar() {
        assert_eq!(ConfigValue::parse_loose("TRUE"), ConfigValue::Bool(true));
        assert_eq!(ConfigValue::parse_loose(" 12 "), ConfigValue::Int(12));
        assert_eq!(ConfigValue::parse_loose("0.5"), ConfigValue::Float(0.5));
        assert_eq!(
            ConfigValue::parse_loose("forest"),
            ConfigValue::Text("forest".into())
        );
    }

    #[test]
    fn loose_parsing_trims_text() {
        assert_eq!(
            ConfigValue::parse_loose("  forest \n"),
            ConfigValue::Text("forest".into())
        );
    }

    #[test]
    fn non_finite_numbers_stay_text() {
        for raw in ["nan", "NaN", "inf", "-inf", "infinity"] {
            assert_eq!(ConfigValue::parse_loose(raw), ConfigValue::Text(raw.into()));
        }
        assert_eq!(ConfigValue::parse_loose("1e3"), ConfigValue::Float(1000.0));
    }
}
