use std::error::Error as StdError;
use std::fmt::{self, Display};

use recipe_chat_model::{ErrorKind, ModelProviderError, Role};

/// Error returned by [`Chef::advance`](crate::Chef::advance).
///
/// Nothing is recovered locally: when this is returned, no turn was
/// appended and no partial transcript exists.
#[derive(Debug)]
pub enum Error {
    /// The provider call failed. The provider's error is kept unchanged.
    Provider(Box<dyn ModelProviderError>),
    /// The provider replied as someone other than the assistant.
    UnexpectedRole(Role),
}

impl Error {
    /// Returns the kind of this error.
    ///
    /// A reply with an unexpected role counts as a malformed response.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Provider(err) => err.kind(),
            Error::UnexpectedRole(_) => ErrorKind::MalformedResponse,
        }
    }
}

impl From<Box<dyn ModelProviderError>> for Error {
    #[inline]
    fn from(err: Box<dyn ModelProviderError>) -> Self {
        Error::Provider(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Provider(err) => write!(f, "model provider failed: {err}"),
            Error::UnexpectedRole(role) => {
                write!(f, "model provider replied as `{role}`")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Provider(err) => Some(err.as_ref()),
            Error::UnexpectedRole(_) => None,
        }
    }
}
