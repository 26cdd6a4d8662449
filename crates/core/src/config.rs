//! Configuration for komposti.
//!
//! Configuration is merged from several sources, later ones winning:
//! 1. Default values
//! 2. A TOML document (`komposti.toml` or an inline string)
//! 3. Environment variables (`KOMPOSTI_*`)
//!
//! Config is read-only after construction.

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable overriding [`Config::nullable_policy`].
pub const ENV_NULLABLE_POLICY: &str = "KOMPOSTI_NULLABLE_POLICY";

/// Environment variable overriding [`Config::log_level`].
pub const ENV_LOG_LEVEL: &str = "KOMPOSTI_LOG_LEVEL";

// =============================================================================
// Nullable Policy
// =============================================================================

/// Which inputs a nullable lift treats as absent.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
///
/// use komposti_core::NullablePolicy;
///
/// assert_eq!(NullablePolicy::from_str("Falsy").ok(), Some(NullablePolicy::Falsy));
/// assert_eq!(NullablePolicy::default(), NullablePolicy::AbsentOnly);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NullablePolicy {
    /// Only a missing value is absent; `0`, `false` and `""` are present.
    #[default]
    AbsentOnly,
    /// Falsy values are rejected too, and keep their value on the left.
    Falsy,
}

impl NullablePolicy {
    /// The string form used in TOML and environment variables.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AbsentOnly => "absent-only",
            Self::Falsy => "falsy",
        }
    }
}

impl fmt::Display for NullablePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NullablePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "absent-only" | "absent" => Ok(Self::AbsentOnly),
            "falsy" => Ok(Self::Falsy),
            _ => Err(Error::invalid_config(
                "nullable_policy",
                format!("'{s}' is not one of absent-only, falsy"),
            )),
        }
    }
}

// =============================================================================
// Log Level
// =============================================================================

/// Default verbosity for the tracing subscriber installed by `telemetry::init`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The level as an `EnvFilter` directive.
    #[must_use]
    pub const fn as_directive(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_directive())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "ERROR" => Ok(Self::Error),
            "WARN" | "WARNING" => Ok(Self::Warn),
            "INFO" => Ok(Self::Info),
            "DEBUG" => Ok(Self::Debug),
            "TRACE" => Ok(Self::Trace),
            _ => Err(Error::invalid_config(
                "log_level",
                format!("'{s}' is not one of error, warn, info, debug, trace"),
            )),
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Library configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Policy used by `from_nullable_with` callers that take it from config.
    pub nullable_policy: NullablePolicy,

    /// Fallback level when `RUST_LOG` is not set.
    pub log_level: LogLevel,
}

impl Config {
    /// Create a config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigParse` if the document is not valid TOML or
    /// contains unknown keys or values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::config_parse("<inline>", e.to_string()))
    }

    /// Load a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigRead` if the file cannot be read and
    /// `Error::ConfigParse` if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config_read(path, e.to_string()))?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| Error::config_parse(path, e.to_string()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded komposti config");
        Ok(config)
    }

    /// Apply `KOMPOSTI_*` environment variables on top of this config.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if a variable holds an unknown value.
    pub fn with_env_overrides(self) -> Result<Self> {
        let vars = [ENV_NULLABLE_POLICY, ENV_LOG_LEVEL]
            .into_iter()
            .filter_map(|key| std::env::var(key).ok().map(|value| (key, value)));
        self.apply_overrides(vars)
    }

    /// Apply explicit `(variable, value)` overrides. Unrelated keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if a recognised key holds an unknown value.
    pub fn apply_overrides<I, K, V>(self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        overrides
            .into_iter()
            .try_fold(self, |config, (key, value)| match key.as_ref() {
                ENV_NULLABLE_POLICY => Ok(Self {
                    nullable_policy: value.as_ref().parse()?,
                    ..config
                }),
                ENV_LOG_LEVEL => Ok(Self {
                    log_level: value.as_ref().parse()?,
                    ..config
                }),
                _ => Ok(config),
            })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.nullable_policy, NullablePolicy::AbsentOnly);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_policy_parses_case_insensitively() {
        assert_eq!("FALSY".parse::<NullablePolicy>().unwrap(), NullablePolicy::Falsy);
        assert_eq!(
            "absent_only".parse::<NullablePolicy>().unwrap(),
            NullablePolicy::AbsentOnly
        );
        assert!("sometimes".parse::<NullablePolicy>().is_err());
    }

    #[test]
    fn test_log_level_round_trips_through_display() {
        let level: LogLevel = "Debug".parse().unwrap();
        assert_eq!(level, LogLevel::Debug);
        assert_eq!(level.to_string(), "debug");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("nullable_policy = \"falsy\"").unwrap();
        assert_eq!(config.nullable_policy, NullablePolicy::Falsy);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = Config::from_toml_str("colour = \"blue\"");
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"trace\"").unwrap();
        writeln!(file, "nullable_policy = \"absent-only\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.nullable_policy, NullablePolicy::AbsentOnly);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path().join("komposti.toml"));
        assert!(matches!(result, Err(Error::ConfigRead { .. })));
    }

    #[test]
    fn test_load_invalid_file_names_the_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "nullable_policy = \"sometimes\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(&err, Error::ConfigParse { path, .. } if path == file.path()));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let config = Config::from_toml_str("log_level = \"error\"")
            .and_then(|c| {
                c.apply_overrides([
                    (ENV_LOG_LEVEL, "warn"),
                    (ENV_NULLABLE_POLICY, "falsy"),
                    ("PATH", "/usr/bin"),
                ])
            })
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.nullable_policy, NullablePolicy::Falsy);
    }

    #[test]
    fn test_bad_override_is_an_error() {
        let result = Config::new().apply_overrides([(ENV_LOG_LEVEL, "loud")]);
        assert!(matches!(result, Err(Error::InvalidConfig { ref field, .. }) if field == "log_level"));
    }
}
