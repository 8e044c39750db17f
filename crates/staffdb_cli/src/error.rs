//! CLI error type.

use staffdb_core::db::DbError;
use staffdb_core::{ConfigError, LoggingError, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    /// Console read/write failure.
    Io(std::io::Error),
    /// Menu selection is not an integer.
    InvalidSelection(String),
    /// Menu selection is an integer without an exercise.
    UnknownExercise(i64),
    /// Free-text answer has the wrong shape.
    InvalidInput(String),
    Config(ConfigError),
    Logging(LoggingError),
    Db(DbError),
    Repo(RepoError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console I/O failed: {err}"),
            Self::InvalidSelection(raw) => {
                write!(f, "exercise number must be an integer, got `{raw}`")
            }
            Self::UnknownExercise(number) => {
                write!(f, "no exercise numbered {number}; expected 1-9")
            }
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::InvalidSelection(_) | Self::UnknownExercise(_) | Self::InvalidInput(_) => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
