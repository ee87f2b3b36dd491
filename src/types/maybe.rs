#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::outcome::Outcome;

/// Presence or legitimate absence of a value.
///
/// `Maybe` is used where a lookup may find nothing without that being an
/// error, e.g. an optional configuration section. It converts into an
/// [`Outcome`] once the caller decides absence should fail.
///
/// # Examples
///
/// ```
/// use notify_rail::{Maybe, Outcome};
///
/// let port: Maybe<u16> = Maybe::present(25);
/// assert_eq!(port.map(|p| p + 1).get_or_else(0), 26);
///
/// let missing: Maybe<u16> = Maybe::absent();
/// assert_eq!(missing.ok_or("no port"), Outcome::Failure("no port"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Maybe<T> {
    Present(T),
    Absent,
}

impl<T> Maybe<T> {
    #[inline]
    pub fn present(value: T) -> Self {
        Self::Present(value)
    }

    #[inline]
    pub fn absent() -> Self {
        Self::Absent
    }

    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[must_use]
    #[inline]
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Transforms a present value. `f` is never invoked on `Absent`.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(f(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Returns the value, or `default` when absent.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    #[inline]
    pub fn get_or_else_with<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => f(),
        }
    }

    /// Invokes exactly one of the two functions.
    #[inline]
    pub fn fold<R, FA, FP>(self, on_absent: FA, on_present: FP) -> R
    where
        FA: FnOnce() -> R,
        FP: FnOnce(T) -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Turns absence into a failure.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error),
        }
    }

    /// Turns absence into a lazily built failure.
    #[inline]
    pub fn ok_or_else<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(f()),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}
