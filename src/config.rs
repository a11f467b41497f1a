//! Lookup configuration for template reuse
//!
//! Strict lookup makes a reuse of an undefined template fail with
//! [`TemplateError::NotDefined`](crate::TemplateError::NotDefined). Lenient
//! lookup skips the check entirely and the reuse renders nothing.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Behaviour switches for the template registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReuseConfig {
    /// Fail on reuse of an undefined template instead of rendering nothing
    pub strict_lookup: bool,
}

impl Default for ReuseConfig {
    fn default() -> Self {
        Self {
            strict_lookup: true,
        }
    }
}

/// TOML structure for deserializing configuration
#[derive(Deserialize, Default)]
#[serde(default)]
struct TomlConfig {
    lookup: TomlLookup,
}

#[derive(Deserialize)]
#[serde(default)]
struct TomlLookup {
    strict: bool,
}

impl Default for TomlLookup {
    fn default() -> Self {
        Self {
            strict: ReuseConfig::default().strict_lookup,
        }
    }
}

impl ReuseConfig {
    /// Create a new configuration with default values (strict lookup)
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for development builds: undefined templates are errors
    pub fn development() -> Self {
        Self::default().with_strict_lookup(true)
    }

    /// Configuration for production builds: the undefined check is skipped
    pub fn production() -> Self {
        Self::default().with_strict_lookup(false)
    }

    /// Set whether undefined templates fail the reuse
    pub fn with_strict_lookup(mut self, strict: bool) -> Self {
        self.strict_lookup = strict;
        self
    }

    /// Parse a configuration from a TOML string
    ///
    /// ```rust
    /// use reuse_template::ReuseConfig;
    ///
    /// let config = ReuseConfig::from_toml_str("[lookup]\nstrict = false").unwrap();
    /// assert!(!config.strict_lookup);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(source)?;
        Ok(Self {
            strict_lookup: parsed.lookup.strict,
        })
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert!(ReuseConfig::default().strict_lookup);
        assert_eq!(ReuseConfig::new(), ReuseConfig::development());
    }

    #[test]
    fn test_production_is_lenient() {
        assert!(!ReuseConfig::production().strict_lookup);
    }

    #[test]
    fn test_toml_missing_keys_use_defaults() {
        let config = ReuseConfig::from_toml_str("").unwrap();
        assert!(config.strict_lookup);

        let config = ReuseConfig::from_toml_str("[lookup]\n").unwrap();
        assert!(config.strict_lookup);
    }

    #[test]
    fn test_toml_lenient() {
        let config = ReuseConfig::from_toml_str("[lookup]\nstrict = false\n").unwrap();
        assert_eq!(config, ReuseConfig::production());
    }

    #[test]
    fn test_toml_parse_error() {
        let result = ReuseConfig::from_toml_str("[lookup]\nstrict = \"sometimes\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ReuseConfig::from_file(Path::new("/nonexistent/reuse.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
