//! Bot configuration.
//!
//! Settings live in a TOML file; every field has a default so a missing
//! file means a stock console bot. The chat platform token is taken from
//! the environment only, never from the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default config location
pub const CONFIG_PATH: &str = "/etc/positor/config.toml";

/// Environment variable holding the chat platform token
pub const TOKEN_ENV: &str = "POSITOR_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Prefix that marks a line as a command
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,

    /// Channel identity used by the console transport
    #[serde(default = "default_channel_name")]
    pub channel_name: String,

    /// Optional ontology override table (TOML)
    #[serde(default)]
    pub ontology_path: Option<PathBuf>,
}

fn default_command_prefix() -> String {
    "!".to_string()
}

fn default_channel_name() -> String {
    "console".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            command_prefix: default_command_prefix(),
            channel_name: default_channel_name(),
            ontology_path: None,
        }
    }
}

impl BotConfig {
    /// Load from the given path, or the system default. A missing file
    /// falls back to defaults; a present-but-broken file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let explicit = path.is_some();
        let path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_PATH));

        if !path.exists() {
            if explicit {
                warn!("Config {} not found, using defaults", path.display());
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}

/// Chat platform token, if one is set. Only a real chat transport needs
/// it; console play works without.
pub fn transport_token() -> Option<String> {
    std::env::var(TOKEN_ENV).ok().filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = BotConfig::load(Some(Path::new("/nonexistent/positor.toml"))).unwrap();
        assert_eq!(config.command_prefix, "!");
        assert_eq!(config.channel_name, "console");
        assert!(config.ontology_path.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "command_prefix = \"?\"").unwrap();

        let config = BotConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.command_prefix, "?");
        assert_eq!(config.channel_name, "console");
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "command_prefix = [").unwrap();

        assert!(BotConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_full_file_round_trips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "command_prefix = \"!\"\nchannel_name = \"lobby\"\nontology_path = \"/etc/positor/terms.toml\""
        )
        .unwrap();

        let config = BotConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.channel_name, "lobby");
        assert_eq!(
            config.ontology_path,
            Some(PathBuf::from("/etc/positor/terms.toml"))
        );
    }
}
