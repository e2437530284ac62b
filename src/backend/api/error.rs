use std::fmt;

/// Failure at the remote API boundary.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout, ...).
    Transport(reqwest::Error),
    /// The server answered with a non-success status.
    Status { status: u16, body: String },
    /// The body did not have the expected shape.
    Decode(serde_json::Error),
    /// The client could not be built from the configuration.
    Config(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "Network error: {err}"),
            Self::Status { status, body } if body.is_empty() => {
                write!(f, "Server returned HTTP {status}")
            }
            Self::Status { status, body } => write!(f, "Server returned HTTP {status}: {body}"),
            Self::Decode(err) => write!(f, "Unexpected response: {err}"),
            Self::Config(msg) => write!(f, "Invalid API configuration: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}
