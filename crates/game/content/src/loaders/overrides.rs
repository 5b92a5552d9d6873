//! Session override loader.

use std::path::Path;

use game_core::{ConfigOverrides, ConfigValue};

use crate::loaders::{LoadResult, read_file};

/// Loader for session option overrides from flat TOML tables.
pub struct OverridesLoader;

impl OverridesLoader {
    /// Load overrides from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a TOML file with top-level scalar keys
    pub fn load(path: &Path) -> LoadResult<ConfigOverrides> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load overrides {}: {}", path.display(), e))
    }

    /// Parse overrides from TOML text.
    ///
    /// Only scalar values are accepted; nested tables, arrays and datetimes are
    /// rejected so the resulting configuration stays a flat mapping.
    pub fn parse(content: &str) -> LoadResult<ConfigOverrides> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse overrides TOML: {}", e))?;

        table
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    toml::Value::Boolean(b) => ConfigValue::Bool(b),
                    toml::Value::Integer(i) => ConfigValue::Int(i),
                    toml::Value::Float(f) => ConfigValue::Float(f),
                    toml::Value::String(s) => ConfigValue::Text(s),
                    other => anyhow::bail!(
                        "Override '{}' must be a scalar, found {}",
                        key,
                        other.type_str()
                    ),
                };
                Ok((key, value))
            })
            .collect()
    }
}
