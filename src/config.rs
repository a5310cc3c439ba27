//! Environment configuration for the cli-actions binary
//!
//! Values come from environment variables with sensible defaults. The config
//! file (see [`crate::config_file`]) only fills in what is left unset here.

use std::env;

/// Centralized configuration read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionsConfig {
    /// Default output format for CLI commands
    pub default_output_format: String,

    /// Fixed progress label width, if any
    pub name_padding: Option<usize>,

    /// Fixed progress number width, if any
    pub number_padding: Option<usize>,
}

impl ActionsConfig {
    /// Create a new configuration instance with values from environment variables
    /// or sensible defaults if not set
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_output_format: env::var("CLI_ACTIONS_OUTPUT_FORMAT")
                .unwrap_or_else(|_| "human".to_string()),

            name_padding: parse_env("CLI_ACTIONS_NAME_PADDING"),

            number_padding: parse_env("CLI_ACTIONS_NUMBER_PADDING"),
        }
    }
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 3] = [
        "CLI_ACTIONS_OUTPUT_FORMAT",
        "CLI_ACTIONS_NAME_PADDING",
        "CLI_ACTIONS_NUMBER_PADDING",
    ];

    #[test]
    #[serial]
    fn test_config_defaults() {
        for key in KEYS {
            env::remove_var(key);
        }

        let config = ActionsConfig::new();

        assert_eq!(config.default_output_format, "human");
        assert_eq!(config.name_padding, None);
        assert_eq!(config.number_padding, None);
    }

    #[test]
    #[serial]
    fn test_config_from_environment() {
        env::set_var("CLI_ACTIONS_OUTPUT_FORMAT", "json");
        env::set_var("CLI_ACTIONS_NAME_PADDING", "12");
        env::set_var("CLI_ACTIONS_NUMBER_PADDING", "not-a-number");

        let config = ActionsConfig::new();

        assert_eq!(config.default_output_format, "json");
        assert_eq!(config.name_padding, Some(12));
        assert_eq!(config.number_padding, None);

        for key in KEYS {
            env::remove_var(key);
        }
    }
}
