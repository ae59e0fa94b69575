//! Failure values produced by running an [`Effect`](super::Effect).
//!
//! A failed run never unwinds. The deferred operation returns
//! `Err(Failure)` and every combinator inspects that tag explicitly, so a
//! failure travels up an `and_then` chain until a `recover` or `retry`
//! intercepts it or it reaches the caller of `run`.

use std::error::Error;
use std::sync::Arc;

/// The underlying error attached to an ordinary failure.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// The failure half of a run's outcome.
///
/// # Examples
///
/// ```rust
/// use effio::effect::Failure;
///
/// let failure = Failure::new("boom");
/// assert_eq!(failure.message(), "boom");
/// assert_eq!(format!("{failure}"), "boom");
///
/// let exhausted = Failure::retry_exhausted(3, "boom");
/// assert_eq!(exhausted.message(), "boom");
/// assert_eq!(exhausted.attempts(), Some(3));
/// assert_eq!(
///     format!("{exhausted}"),
///     "retry budget exhausted after 3 attempt(s): boom"
/// );
/// ```
#[derive(Debug, Clone, thiserror::Error)]
pub enum Failure {
    /// An ordinary failure raised by `fail`, `raise`, or a failing primitive.
    #[error("{message}")]
    Raised {
        /// Human readable description of what went wrong.
        message: String,
        /// The error reported by the primitive, if any.
        #[source]
        cause: Option<Cause>,
    },
    /// Terminal failure synthesized once a retry budget has been spent.
    #[error("retry budget exhausted after {attempts} attempt(s): {message}")]
    RetryExhausted {
        /// How many times the retried effect was executed.
        attempts: usize,
        /// The message of the last underlying failure.
        message: String,
    },
}

impl Failure {
    /// Creates an ordinary failure with no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self::Raised {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates an ordinary failure wrapping the error that caused it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::Failure;
    /// use std::error::Error;
    ///
    /// let io_error = std::io::Error::other("disk on fire");
    /// let failure = Failure::with_cause("could not write", io_error);
    /// assert_eq!(failure.message(), "could not write");
    /// assert_eq!(failure.source().map(|e| e.to_string()).as_deref(), Some("disk on fire"));
    /// ```
    pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Raised {
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    /// Creates the terminal failure reported by an exhausted retry.
    pub fn retry_exhausted(attempts: usize, message: impl Into<String>) -> Self {
        Self::RetryExhausted {
            attempts,
            message: message.into(),
        }
    }

    /// Returns the carried message.
    ///
    /// For [`Failure::RetryExhausted`] this is the message of the last
    /// underlying failure, without the exhaustion prefix used by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::Raised { message, .. } | Self::RetryExhausted { message, .. } => message,
        }
    }

    /// Returns the number of attempts made if this is a retry exhaustion.
    pub const fn attempts(&self) -> Option<usize> {
        match self {
            Self::Raised { .. } => None,
            Self::RetryExhausted { attempts, .. } => Some(*attempts),
        }
    }

    /// Returns `true` if this failure was produced by an exhausted retry.
    pub const fn is_retry_exhausted(&self) -> bool {
        matches!(self, Self::RetryExhausted { .. })
    }
}

impl Default for Failure {
    /// An ordinary failure with an empty message.
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl From<std::io::Error> for Failure {
    fn from(error: std::io::Error) -> Self {
        Self::Raised {
            message: error.to_string(),
            cause: Some(Arc::new(error)),
        }
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

static_assertions::assert_impl_all!(Failure: Send, Sync, Clone, Error);
