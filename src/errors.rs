use reqwest::StatusCode;
use std::fmt;

/// Failure of a single API call.
#[derive(Debug)]
pub enum ClientError {
    /// Network unreachable, connection dropped, or an unreadable body.
    Transport(reqwest::Error),
    /// The server answered with a non-success status. `detail` carries the
    /// structured rejection message when the body had one.
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },
}

impl ClientError {
    pub fn rejected(status: StatusCode, detail: Option<String>) -> Self {
        Self::Rejected { status, detail }
    }

    /// The server's detail message, or the caller's generic fallback.
    pub fn detail_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Self::Rejected {
                detail: Some(detail),
                ..
            } => detail,
            _ => fallback,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "transport error: {err}"),
            Self::Rejected { status, detail } => match detail {
                Some(detail) => write!(f, "server rejected request ({status}): {detail}"),
                None => write!(f, "server rejected request ({status})"),
            },
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Rejected { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

/// Failure of a signup attempt, including the pre-network validation stage.
#[derive(Debug)]
pub enum SignupError {
    /// Caught before any network call; no speculation was applied.
    Validation(&'static str),
    Api(ClientError),
}

impl fmt::Display for SignupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(reason) => write!(f, "validation failed: {reason}"),
            Self::Api(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for SignupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(_) => None,
            Self::Api(err) => Some(err),
        }
    }
}

impl From<ClientError> for SignupError {
    fn from(err: ClientError) -> Self {
        Self::Api(err)
    }
}
