#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two-variant container carrying either a success value or a failure.
///
/// `Outcome<T, E>` is the value every safe-wrap adapter produces. It is a
/// genuine sum type: a caller can only reach the success value by matching
/// (or through a combinator), never by reading a field that happens to be
/// unset.
///
/// Outcomes are never mutated in place. Every combinator consumes `self`
/// and returns a fresh value.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure type
///
/// # Examples
///
/// ```
/// use notify_rail::Outcome;
///
/// let ok = Outcome::<i32, &str>::success(20).map(|v| v + 1);
/// assert_eq!(ok.get_or_else(0), 21);
///
/// let failed = Outcome::<i32, &str>::failure("boom").map(|v| v + 1);
/// assert_eq!(failed.get_or_else(0), 0);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a success value.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a failure.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` for `Success`.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Transforms the success value. `f` is never invoked on a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use notify_rail::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::failure("nope");
    /// let mapped = failed.map(|_| -> i32 { unreachable!() });
    /// assert_eq!(mapped, Outcome::Failure("nope"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the failure, leaving a success untouched.
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains a dependent step that may itself fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use notify_rail::Outcome;
    ///
    /// fn half(v: i32) -> Outcome<i32, &'static str> {
    ///     if v % 2 == 0 { Outcome::success(v / 2) } else { Outcome::failure("odd") }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).and_then(half), Outcome::Success(4));
    /// assert_eq!(Outcome::success(7).and_then(half), Outcome::Failure("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recovers from a failure with another outcome.
    #[inline]
    pub fn or_else<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => f(error),
        }
    }

    /// Returns the success value, or `default` on failure.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes a fallback from the failure.
    #[inline]
    pub fn get_or_else_with<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Collapses the outcome by invoking exactly one of the two functions.
    ///
    /// # Examples
    ///
    /// ```
    /// use notify_rail::Outcome;
    ///
    /// let label = Outcome::<u16, &str>::success(200)
    ///     .fold(|e| format!("error: {e}"), |v| format!("status {v}"));
    /// assert_eq!(label, "status 200");
    /// ```
    #[inline]
    pub fn fold<R, FE, FS>(self, on_failure: FE, on_success: FS) -> R
    where
        FE: FnOnce(E) -> R,
        FS: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Pairs two outcomes. The left failure wins when both failed.
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success((a, b)),
            (Self::Failure(e), _) => Outcome::Failure(e),
            (Self::Success(_), Outcome::Failure(e)) => Outcome::Failure(e),
        }
    }

    /// Runs `f` on a borrowed failure, passing the outcome through unchanged.
    #[inline]
    pub fn inspect_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Extracts the success value, if any.
    #[must_use]
    #[inline]
    pub fn success_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the failure, if any.
    #[must_use]
    #[inline]
    pub fn failure_value(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows the contents.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Builds an outcome from a standard `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Converts into a standard `Result` so `?` can be used at the edges.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
