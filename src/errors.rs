//! Error type shared by every argument action and the progress renderer
//!
//! All variants are user-input validation failures. They are terminal for the
//! current parse: callers are expected to turn them into a usage error and exit
//! rather than attempt partial recovery.

use clap::error::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the argument actions and the progress renderer
#[derive(Debug, Error)]
pub enum ActionError {
    /// A value (or set of values) failed validation
    #[error("{0}")]
    InvalidArgument(String),

    /// A filepath that was required to exist is absent
    #[error("Filepath does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// Arguments were supplied before any recognized command marker
    #[error("Missing command: expected one of {expected} before '{token}'")]
    MissingCommand { token: String, expected: String },

    /// A command segment was rejected by its sub-parser
    #[error("Failed to parse command {command} (#{position}): {}", clap_summary(.cause))]
    SubParser {
        command: String,
        position: usize,
        cause: clap::Error,
    },

    /// Writing rendered output failed
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl ActionError {
    /// Build an `InvalidArgument` from anything printable
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// The clap error kind that best describes this failure
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) | Self::NotFound(_) => ErrorKind::ValueValidation,
            Self::MissingCommand { .. } => ErrorKind::MissingSubcommand,
            Self::SubParser { cause, .. } => cause.kind(),
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Convert into a clap usage error rendered against `cmd`
    ///
    /// Calling `.exit()` on the result prints the usage message and terminates
    /// with clap's usage exit status.
    pub fn into_usage_error(self, cmd: &mut clap::Command) -> clap::Error {
        let kind = self.kind();
        cmd.error(kind, self)
    }
}

/// First paragraph of a rendered clap error, without its `error:` prefix
///
/// Drops the usage block and the "For more information" footer so the message
/// can be nested inside another usage error.
#[must_use]
pub fn clap_summary(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let head = rendered.split("\n\n").next().unwrap_or_default().trim();
    head.strip_prefix("error: ").unwrap_or(head).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_path() {
        let error = ActionError::NotFound(PathBuf::from("/no/such/file"));
        assert_eq!(error.to_string(), "Filepath does not exist: /no/such/file");
        assert_eq!(error.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_missing_command_message() {
        let error = ActionError::MissingCommand {
            token: "--one".to_string(),
            expected: "--SUB".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Missing command"));
        assert!(message.contains("'--one'"));
        assert_eq!(error.kind(), ErrorKind::MissingSubcommand);
    }

    #[test]
    fn test_into_usage_error_keeps_message_and_kind() {
        let mut cmd = clap::Command::new("demo");
        let error = ActionError::invalid("\"chunks\" args must be a multiple of 2")
            .into_usage_error(&mut cmd);

        assert_eq!(error.kind(), ErrorKind::ValueValidation);
        assert!(error
            .to_string()
            .contains("\"chunks\" args must be a multiple of 2"));
    }

    fn steps_error(value: &str) -> clap::Error {
        clap::Command::new("--task")
            .arg(
                clap::Arg::new("steps")
                    .long("steps")
                    .value_parser(clap::value_parser!(u64)),
            )
            .try_get_matches_from(["--task", "--steps", value])
            .unwrap_err()
    }

    #[test]
    fn test_sub_parser_message_drops_nested_prefix_and_footer() {
        let cause = steps_error("many");
        assert_eq!(cause.kind(), ErrorKind::ValueValidation);

        let error = ActionError::SubParser {
            command: "--task".to_string(),
            position: 2,
            cause,
        };
        let message = error.to_string();
        assert!(message.starts_with("Failed to parse command --task (#2): invalid value 'many'"));
        assert!(!message.contains("error:"));
        assert!(!message.contains("For more information"));
        assert!(!message.contains('\n'));
        assert_eq!(error.kind(), ErrorKind::ValueValidation);
    }
}
