use std::fmt::{self, Display};

/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The provider could not be reached, or the connection failed
    /// halfway.
    Network,
    /// The provider rejected the credentials.
    Authentication,
    /// The model provider is rate limited.
    RateLimitExceeded,
    /// The provider answered, but the response lacks an expected field
    /// (no choices, no content, unexpected role, undecodable body).
    MalformedResponse,
    /// Any other errors.
    Other,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Network => write!(f, "Network error"),
            ErrorKind::Authentication => write!(f, "Authentication failed"),
            ErrorKind::RateLimitExceeded => write!(f, "Rate limit exceeded"),
            ErrorKind::MalformedResponse => write!(f, "Malformed response"),
            ErrorKind::Other => write!(f, "Provider error"),
        }
    }
}

/// Raised when a configuration value is missing or invalid.
///
/// This is a startup failure and is never retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigError {
    var: &'static str,
    reason: &'static str,
}

impl ConfigError {
    /// Creates an error about the setting `var`.
    #[inline]
    pub fn new(var: &'static str, reason: &'static str) -> Self {
        Self { var, reason }
    }

    /// Returns the name of the offending setting.
    #[inline]
    pub fn var(&self) -> &'static str {
        self.var
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.var, self.reason)
    }
}

impl std::error::Error for ConfigError {}
