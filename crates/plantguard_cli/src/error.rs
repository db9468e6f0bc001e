use plantguard_core::{LoggingError, RecordKind, ReviewError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure of one CLI invocation.
#[derive(Debug)]
pub enum CliError {
    Logging(LoggingError),
    UnknownUser(String),
    RecordNotFound { kind: RecordKind, target: String },
    Review(ReviewError),
    Json(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "{err}"),
            Self::UnknownUser(email) => write!(f, "no user with email `{email}`"),
            Self::RecordNotFound { kind, target } => write!(f, "{kind} not found: {target}"),
            Self::Review(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "failed to encode output: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            Self::Review(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::UnknownUser(_) | Self::RecordNotFound { .. } => None,
        }
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<ReviewError> for CliError {
    fn from(value: ReviewError) -> Self {
        Self::Review(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
