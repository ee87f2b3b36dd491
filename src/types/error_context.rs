use std::borrow::Cow;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use core::fmt::{self, Display};

/// A single piece of context attached to a failure as it travels outward.
///
/// Pipeline steps push a message naming what they were doing; tags and
/// metadata carry categorical and key-value details for log filtering.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Message(Cow<'static, str>),
    Tag(Cow<'static, str>),
    Metadata { key: Cow<'static, str>, value: String },
}

impl ErrorContext {
    /// Creates a free-form message context.
    #[inline]
    pub fn new<S: Into<Cow<'static, str>>>(message: S) -> Self {
        Self::Message(message.into())
    }

    /// Creates a categorical tag, rendered as `[tag]`.
    #[inline]
    pub fn tag<S: Into<Cow<'static, str>>>(tag: S) -> Self {
        Self::Tag(tag.into())
    }

    /// Creates a `key=value` metadata entry.
    #[inline]
    pub fn metadata<K, V>(key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<String>,
    {
        Self::Metadata { key: key.into(), value: value.into() }
    }

    /// Renders the context as a human-readable message.
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::Message(msg) => Cow::Borrowed(msg.as_ref()),
            Self::Tag(tag) => Cow::Owned(format!("[{}]", tag)),
            Self::Metadata { key, value } => Cow::Owned(format!("{}={}", key, value)),
        }
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
