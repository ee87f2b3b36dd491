use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Display};

/// An error whose displayed message is replaced by a domain-specific one.
///
/// The original error stays reachable through [`Error::source`] and
/// [`DomainError::cause`], so its identity and any backtrace it captured
/// are preserved.
///
/// # Examples
///
/// ```
/// use std::error::Error;
/// use notify_rail::DomainError;
///
/// let io = std::io::Error::other("ENOENT");
/// let err = DomainError::new("Cannot read email template", io);
///
/// assert_eq!(err.to_string(), "Cannot read email template");
/// assert_eq!(err.source().unwrap().to_string(), "ENOENT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError<E> {
    message: Cow<'static, str>,
    cause: E,
}

impl<E> DomainError<E> {
    #[inline]
    pub fn new<M: Into<Cow<'static, str>>>(message: M, cause: E) -> Self {
        Self { message: message.into(), cause }
    }

    /// The domain message shown to callers.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The original error.
    #[inline]
    pub fn cause(&self) -> &E {
        &self.cause
    }

    #[inline]
    pub fn into_cause(self) -> E {
        self.cause
    }

    #[inline]
    pub fn map_cause<F, G>(self, f: F) -> DomainError<G>
    where
        F: FnOnce(E) -> G,
    {
        DomainError { message: self.message, cause: f(self.cause) }
    }
}

impl<E> Display for DomainError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl<E: Error + 'static> Error for DomainError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}
