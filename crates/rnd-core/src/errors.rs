//! Error types for rndkit.
//!
//! Every failure in the toolkit is an invalid argument detected up front:
//! there are no I/O errors, no partial results and nothing transient.  The
//! reason is carried as a closed [`ErrorKind`] so callers can branch on it
//! without parsing messages.

use std::fmt;

use thiserror::Error;

/// The reason an argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Two inputs that must have the same length do not.
    DimensionMismatch,
    /// A lower bound exceeds its upper bound, or the target cannot be
    /// reached from the bounds.
    InfeasibleBounds,
    /// An index vector is not a bijection on `0..n`.
    MalformedPermutation,
}

impl ErrorKind {
    /// Short lowercase name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::DimensionMismatch => "dimension mismatch",
            ErrorKind::InfeasibleBounds => "infeasible bounds",
            ErrorKind::MalformedPermutation => "malformed permutation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error type used throughout rndkit.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An argument violated a precondition.
    #[error("invalid argument ({kind}): {message}")]
    InvalidArgument {
        /// Why the argument was rejected.
        kind: ErrorKind,
        /// Human-readable detail.
        message: String,
    },
}

impl Error {
    /// Build an [`Error::InvalidArgument`].
    pub fn invalid_argument(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            kind,
            message: message.into(),
        }
    }

    /// The reason this error was raised.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument { kind, .. } => *kind,
        }
    }

    /// The human-readable detail, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::InvalidArgument { message, .. } => message,
        }
    }
}

/// Shorthand `Result` type used throughout rndkit.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return an [`Error::InvalidArgument`] of the given kind if `$cond` is false.
///
/// # Example
/// ```
/// use rnd_core::{ensure, errors::{ErrorKind, Result}};
/// fn positive(x: f64) -> Result<f64> {
///     ensure!(x > 0.0, ErrorKind::InfeasibleBounds, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert_eq!(positive(-1.0).unwrap_err().kind(), ErrorKind::InfeasibleBounds);
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::invalid_argument(
                $kind,
                format!($($msg)*),
            ));
        }
    };
}

/// Return an [`Error::InvalidArgument`] of the given kind immediately.
///
/// # Example
/// ```
/// use rnd_core::{fail, errors::{ErrorKind, Result}};
/// fn always_err() -> Result<()> {
///     fail!(ErrorKind::DimensionMismatch, "lengths {} and {} differ", 1, 2);
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($kind:expr, $($msg:tt)*) => {
        return Err($crate::errors::Error::invalid_argument(
            $kind,
            format!($($msg)*),
        ))
    };
}
