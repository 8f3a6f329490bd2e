//! Front-end configuration (`hotseat.toml`).

use derive_getters::Getters;
use derive_more::{Display, Error};
use hotseat_tictactoe::Seat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "hotseat.toml";

/// What to do when a name field is left blank at start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankNamePolicy {
    /// Keep the form open until both names are filled in.
    #[default]
    Reject,
    /// Fall back to the configured default names.
    Substitute,
}

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HotseatConfig {
    /// Policy for blank name fields.
    #[serde(default)]
    blank_names: BlankNamePolicy,

    /// Name used for a blank first field under `substitute`.
    #[serde(default = "default_first_name")]
    first_default_name: String,

    /// Name used for a blank second field under `substitute`.
    #[serde(default = "default_second_name")]
    second_default_name: String,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Where to write logs; discarded when absent.
    #[serde(default)]
    log_file: Option<PathBuf>,
}

fn default_first_name() -> String {
    "Player 1".to_string()
}

fn default_second_name() -> String {
    "Player 2".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for HotseatConfig {
    fn default() -> Self {
        Self {
            blank_names: BlankNamePolicy::default(),
            first_default_name: default_first_name(),
            second_default_name: default_second_name(),
            log_filter: default_log_filter(),
            log_file: None,
        }
    }
}

impl HotseatConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(blank_names = ?config.blank_names, "Config loaded");
        Ok(config)
    }

    /// Loads `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if present,
    /// else defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Turns the raw form input into the two names handed to the game.
    ///
    /// Names are trimmed. Blank names either fail or are replaced, depending
    /// on [`HotseatConfig::blank_names`].
    #[instrument(skip(self))]
    pub fn resolve_names(&self, first: &str, second: &str) -> Result<(String, String), NameError> {
        Ok((
            self.resolve_name(Seat::First, first)?,
            self.resolve_name(Seat::Second, second)?,
        ))
    }

    fn resolve_name(&self, seat: Seat, raw: &str) -> Result<String, NameError> {
        let name = raw.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
        match self.blank_names {
            BlankNamePolicy::Reject => Err(NameError::Blank(seat)),
            BlankNamePolicy::Substitute => Ok(match seat {
                Seat::First => self.first_default_name.clone(),
                Seat::Second => self.second_default_name.clone(),
            }),
        }
    }
}

/// A name field that could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    /// Field left blank under the `reject` policy.
    Blank(#[error(not(source))] Seat),
}

impl std::fmt::Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameError::Blank(seat) => write!(f, "Player {} name is required", seat.index() + 1),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(HotseatConfig::from_toml("").unwrap(), HotseatConfig::default());
    }

    #[test]
    fn test_reject_policy_names_missing_seat() {
        let config = HotseatConfig::default();
        assert_eq!(
            config.resolve_names("Ada", "   "),
            Err(NameError::Blank(Seat::Second))
        );
        assert_eq!(
            NameError::Blank(Seat::First).to_string(),
            "Player 1 name is required"
        );
    }

    #[test]
    fn test_substitute_policy_uses_defaults() {
        let config = HotseatConfig::from_toml(
            "blank_names = \"substitute\"\nsecond_default_name = \"Guest\"\n",
        )
        .unwrap();
        assert_eq!(
            config.resolve_names("", ""),
            Ok(("Player 1".to_string(), "Guest".to_string()))
        );
    }

    #[test]
    fn test_names_are_trimmed() {
        let config = HotseatConfig::default();
        assert_eq!(
            config.resolve_names("  Ada ", "Grace\t"),
            Ok(("Ada".to_string(), "Grace".to_string()))
        );
    }

    #[test]
    fn test_bad_policy_is_a_parse_error() {
        let err = HotseatConfig::from_toml("blank_names = \"maybe\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
