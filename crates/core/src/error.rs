use thiserror::Error;

use crate::money::Money;

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a tuition payment is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidAmount {
    #[error("Payment amount must be positive.")]
    NotPositive,

    #[error("Cannot pay more than the current balance of ${}", .balance)]
    ExceedsBalance { balance: Money },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Student with ID {} not found.", .id)]
    NotFound { id: String },

    #[error(transparent)]
    InvalidAmount(#[from] InvalidAmount),

    #[error("Invalid amount `{}`: please enter a valid positive number.", .0)]
    MalformedAmount(String),

    #[error("Unknown command `{}`. Expected one of: add, enroll, balance, pay, status, exit", .0)]
    UnknownCommand(String),

    #[error("Missing {} for command `{}`", .argument, .command)]
    MissingArgument { command: String, argument: String },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Invalid setting in config file at `{}`: {}", .path, .reason)]
    InvalidConfig { path: String, reason: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn not_found(id: &str) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    pub fn missing_argument(command: &str, argument: &str) -> Self {
        Self::MissingArgument {
            command: command.to_string(),
            argument: argument.to_string(),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn invalid_config(path: &str, reason: String) -> Self {
        Self::InvalidConfig {
            path: path.to_string(),
            reason,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    /// Whether the session can report this error and keep going.
    ///
    /// Lookup, payment and command-line errors never end a session; only
    /// configuration and terminal I/O failures do.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::InvalidAmount(_)
                | Self::MalformedAmount(_)
                | Self::UnknownCommand(_)
                | Self::MissingArgument { .. }
        )
    }
}
