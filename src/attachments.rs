//! Inbound request shape and the pure transforms over its file list.
//!
//! Nothing here can fail: records that are not clean are dropped, missing
//! fields get sentinel values, and a missing file list is an empty one.

use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Maybe;

/// Scan tag a file must carry to be attached.
pub const CLEAN_SCAN: &str = "clean";
/// Filename used when a descriptor has no `originalname`.
pub const UNKNOWN_ORIGINALNAME: &str = "unknown originalname";
/// Path used when a descriptor has no `path`.
pub const UNKNOWN_PATH: &str = "unknown path";

/// An uploaded file as described by the upload middleware.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDescriptor {
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::text"))]
    pub originalname: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::text"))]
    pub path: Option<String>,
    /// Opaque status tag written by the virus scanner.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::text"))]
    pub scan: Option<String>,
}

impl FileDescriptor {
    pub fn new<N: Into<String>, P: Into<String>>(originalname: N, path: P) -> Self {
        Self { originalname: Some(originalname.into()), path: Some(path.into()), scan: None }
    }

    pub fn with_scan<S: Into<String>>(mut self, scan: S) -> Self {
        self.scan = Some(scan.into());
        self
    }

    pub fn is_clean(&self) -> bool {
        self.scan.as_deref() == Some(CLEAN_SCAN)
    }
}

/// A file ready to be attached to an outgoing email.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRecord {
    pub filename: String,
    pub path: String,
}

/// Session cookie carried by the request.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookie {
    #[cfg_attr(feature = "serde", serde(rename = "sessionID"))]
    pub session_id: String,
}

/// The request-like object the pipeline works from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Anything other than a list of descriptors reads as no file list.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::files"))]
    pub files: Option<Vec<FileDescriptor>>,
    pub cookie: Option<Cookie>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(mut self, files: Vec<FileDescriptor>) -> Self {
        self.files = Some(files);
        self
    }

    pub fn with_session<S: Into<String>>(mut self, session_id: S) -> Self {
        self.cookie = Some(Cookie { session_id: session_id.into() });
        self
    }

    /// The session identifier, when the request carries a cookie.
    pub fn session_id(&self) -> Maybe<&str> {
        Maybe::from_option(self.cookie.as_ref().map(|c| c.session_id.as_str()))
    }
}

/// The request carried no session cookie to look the recipient up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingSession;

impl Display for MissingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("request has no session identifier")
    }
}

impl std::error::Error for MissingSession {}

/// Keeps only records whose scan tag is exactly `"clean"`, in order.
pub fn filter_clean(files: &[FileDescriptor]) -> Vec<&FileDescriptor> {
    files.iter().filter(|file| file.is_clean()).collect()
}

/// Maps descriptors to attachments, substituting sentinels for missing fields.
pub fn to_attachments<'a, I>(files: I) -> Vec<AttachmentRecord>
where
    I: IntoIterator<Item = &'a FileDescriptor>,
{
    files
        .into_iter()
        .map(|file| AttachmentRecord {
            filename: file.originalname.clone().unwrap_or_else(|| UNKNOWN_ORIGINALNAME.to_owned()),
            path: file.path.clone().unwrap_or_else(|| UNKNOWN_PATH.to_owned()),
        })
        .collect()
}

/// `filter_clean` then `to_attachments` over the request's file list.
pub fn attachments_from_request(request: &Request) -> Vec<AttachmentRecord> {
    match &request.files {
        Some(files) => to_attachments(filter_clean(files)),
        None => Vec::new(),
    }
}

/// A file list is worth processing when it is non-empty.
pub fn legit_files(files: &[FileDescriptor]) -> bool {
    !files.is_empty()
}

/// Whether the request carries a file list worth processing at all.
pub fn valid_files_on_request(request: &Request) -> bool {
    request.files.as_deref().is_some_and(legit_files)
}

/// Deserializers that read malformed upload metadata as missing.
#[cfg(feature = "serde")]
mod lenient {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    use super::FileDescriptor;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Either<T> {
        Expected(T),
        Other(IgnoredAny),
    }

    fn expected<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Ok(match Option::<Either<T>>::deserialize(deserializer)? {
            Some(Either::Expected(value)) => Some(value),
            Some(Either::Other(_)) | None => None,
        })
    }

    pub(super) fn files<'de, D>(deserializer: D) -> Result<Option<Vec<FileDescriptor>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        expected(deserializer)
    }

    pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        expected(deserializer)
    }
}
