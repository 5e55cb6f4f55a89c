//! Error type definitions for specification construction

use std::borrow::Cow;
use thiserror::Error;

/// Error returned when a specification cannot be constructed
///
/// There are exactly two failure kinds: a required input was not supplied,
/// or a supplied input violates a structural invariant (sign, range, length,
/// table membership).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required field was absent
    #[error("{name} must be present")]
    NullArgument {
        /// Name of the missing field
        name: &'static str,
    },

    /// A present value violates an invariant
    #[error("{context}: {message}")]
    InvalidArgument {
        /// The value or constructor that rejected the input
        context: &'static str,
        /// Why the input was rejected
        message: Cow<'static, str>,
    },
}

/// Result type for specification construction
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a `NullArgument` error
    pub fn null(name: &'static str) -> Self {
        Error::NullArgument { name }
    }

    /// Shorthand to create an `InvalidArgument` error
    pub fn invalid<M: Into<Cow<'static, str>>>(context: &'static str, message: M) -> Self {
        Error::InvalidArgument {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an `InvalidArgument` error
    ///
    /// `NullArgument` errors already name their field and are returned unchanged.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidArgument { message, .. } => Self::InvalidArgument { context, message },
            other => other,
        }
    }

    /// True for `NullArgument`
    pub fn is_null_argument(&self) -> bool {
        matches!(self, Self::NullArgument { .. })
    }

    /// True for `InvalidArgument`
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
