//! Persistent configuration file management for cli-actions
//!
//! Manages the TOML configuration file stored in XDG-compliant locations.
//! Besides output defaults it holds progress bar paddings and, per command
//! marker, extra arguments appended to every invocation of that command.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persistent configuration file structure
///
/// Configuration precedence order (highest to lowest):
///
/// 1. CLI flags (`--output`, etc.)
/// 2. Environment variables (`CLI_ACTIONS_OUTPUT_FORMAT`, etc.)
/// 3. Config file
/// 4. Hardcoded defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Configuration file version for migration support
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub defaults: DefaultConfig,

    #[serde(default)]
    pub progress: ProgressConfig,

    /// Settings keyed by command marker (e.g. `--task`)
    #[serde(default)]
    pub commands: BTreeMap<String, CommandConfig>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DefaultConfig {
    /// Default output format (human or json)
    pub output_format: Option<String>,
}

/// Progress bar layout overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProgressConfig {
    pub name_padding: Option<usize>,
    pub number_padding: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CommandConfig {
    /// Arguments appended to every invocation of the command
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl ConfigFile {
    /// Create a new config with sensible defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: default_version(),
            defaults: DefaultConfig {
                output_format: Some("human".to_string()),
            },
            progress: ProgressConfig::default(),
            commands: BTreeMap::new(),
        }
    }

    /// Load config file from XDG config directory
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load config from `path`, falling back to defaults if it is absent
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        debug!(path = %path.display(), "loaded config file");
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config file to XDG config directory
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or file cannot be written
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save config to `path`, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get XDG-compliant config file path
    ///
    /// Returns `~/.config/cli-actions/config.toml` on Linux
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Failed to determine config directory")?;

        Ok(config_dir.join("cli-actions").join("config.toml"))
    }

    /// Extra arguments configured for `marker`
    #[must_use]
    pub fn extra_args_for(&self, marker: &str) -> &[String] {
        self.commands
            .get(marker)
            .map(|command| command.extra_args.as_slice())
            .unwrap_or_default()
    }

    /// Every marker with a non-empty list of extra arguments
    pub fn additional_args(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.commands
            .iter()
            .filter(|(_, command)| !command.extra_args.is_empty())
            .map(|(marker, command)| (marker.as_str(), command.extra_args.as_slice()))
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_defaults() {
        let config = ConfigFile::new();

        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.defaults.output_format, Some("human".to_string()));
        assert_eq!(config.progress, ProgressConfig::default());
        assert!(config.commands.is_empty());
    }

    #[test]
    fn test_parse_commands_table() {
        let config: ConfigFile = toml::from_str(
            r#"
            [progress]
            name_padding = 12

            [commands."--task"]
            extra_args = ["--delay-ms", "5"]

            [commands."--other"]
            "#,
        )
        .expect("Should parse");

        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.progress.name_padding, Some(12));
        assert_eq!(config.extra_args_for("--task"), ["--delay-ms", "5"]);
        assert!(config.extra_args_for("--other").is_empty());
        assert!(config.extra_args_for("--missing").is_empty());

        let markers: Vec<&str> = config.additional_args().map(|(m, _)| m).collect();
        assert_eq!(markers, vec!["--task"]);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = ConfigFile::new();
        config.progress.number_padding = Some(4);
        config.commands.insert(
            "--task".to_string(),
            CommandConfig {
                extra_args: vec!["--steps".to_string(), "3".to_string()],
            },
        );

        config.save_to(&path).expect("Should save");
        let loaded = ConfigFile::load_from(&path).expect("Should load");

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let loaded = ConfigFile::load_from(&temp_dir.path().join("absent.toml"))
            .expect("Should fall back to defaults");
        assert_eq!(loaded, ConfigFile::new());
    }

    #[test]
    fn test_load_invalid_file_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "progress = 5").expect("Should write");

        let error = ConfigFile::load_from(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_file_path() {
        let path = ConfigFile::config_file_path().expect("Should resolve config dir");
        assert!(path.ends_with("cli-actions/config.toml"));
    }
}
