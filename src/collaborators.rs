//! Narrow interfaces to the collaborators the pipeline drives.
//!
//! The pipeline never reaches for a data store, filesystem, template engine
//! or mail transport directly. Each one is a trait here, implemented for
//! plain closures as well, and handed to the pipeline at construction.
//!
//! | Collaborator | Shape |
//! |---|---|
//! | [`RecipientLookup`] | `session id -> future Outcome<D, BoxError>` |
//! | [`TemplateSource`] | `(path, encoding, Callback<String, _>)` |
//! | [`Renderer`] | `(template, data) -> Result<String, BoxError>` |
//! | [`ConfigAccessor`] | `has(key)` / `get(key)` |
//! | [`TransportFactory`] | `TransportConfig -> handle` |
//! | [`Transport`] | `(MailOptions, Callback<I, _>)` |

use core::fmt::{self, Display};
use core::future::Future;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::async_ext::Callback;
use crate::attachments::AttachmentRecord;
use crate::error::BoxError;
use crate::types::{Maybe, Outcome};

/// Looks up the recipient for a session.
pub trait RecipientLookup<D> {
    fn lookup(&self, session_id: &str) -> impl Future<Output = Outcome<D, BoxError>>;
}

impl<D, F, Fut> RecipientLookup<D> for F
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Outcome<D, BoxError>>,
{
    fn lookup(&self, session_id: &str) -> impl Future<Output = Outcome<D, BoxError>> {
        self(session_id.to_owned())
    }
}

/// Reads a template, reporting through a callback.
pub trait TemplateSource {
    fn read_file(&self, path: &str, encoding: &str, done: Callback<String, BoxError>);
}

impl<F> TemplateSource for F
where
    F: Fn(&str, &str, Callback<String, BoxError>),
{
    fn read_file(&self, path: &str, encoding: &str, done: Callback<String, BoxError>) {
        self(path, encoding, done)
    }
}

/// What the renderer receives: the recipient record plus the attachment list.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateData<D> {
    pub recipient: D,
    pub attachments: Vec<AttachmentRecord>,
}

/// Renders a template with data. May fail, or panic.
pub trait Renderer<D> {
    fn render(&self, template: &str, data: &TemplateData<D>) -> Result<String, BoxError>;
}

impl<D, F> Renderer<D> for F
where
    F: Fn(&str, &TemplateData<D>) -> Result<String, BoxError>,
{
    fn render(&self, template: &str, data: &TemplateData<D>) -> Result<String, BoxError> {
        self(template, data)
    }
}

/// Read access to configuration.
///
/// `get` on a key for which `has` is false is expected to fail.
pub trait ConfigAccessor<V> {
    fn has(&self, key: &str) -> bool;
    fn get(&self, key: &str) -> Result<V, BoxError>;
}

/// In-memory [`ConfigAccessor`].
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig<V> {
    entries: HashMap<String, V>,
}

impl<V> MapConfig<V> {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    pub fn with<K: Into<String>>(mut self, key: K, value: V) -> Self {
        self.entries.insert(key.into(), value);
        self
    }
}

impl<V> Default for MapConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> ConfigAccessor<V> for MapConfig<V> {
    fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &str) -> Result<V, BoxError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| Box::new(ConfigKeyMissing(key.to_owned())) as BoxError)
    }
}

/// A configuration key was read without being present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigKeyMissing(pub String);

impl Display for ConfigKeyMissing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "configuration property \"{}\" is not defined", self.0)
    }
}

impl std::error::Error for ConfigKeyMissing {}

/// Looks a value up with `has` first, so a missing key is `Absent`.
///
/// A `get` that fails after `has` reported presence is logged and also
/// treated as `Absent`.
pub fn optional_setting<V, C>(config: &C, key: &str) -> Maybe<V>
where
    C: ConfigAccessor<V> + ?Sized,
{
    if !config.has(key) {
        return Maybe::Absent;
    }
    match config.get(key) {
        Ok(value) => Maybe::Present(value),
        Err(error) => {
            tracing::warn!(key, %error, "configuration reported a key it could not read");
            Maybe::Absent
        },
    }
}

/// Connection and envelope settings for the email service.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailService {
    pub host: String,
    pub port: u16,
    pub from: String,
    pub to: String,
    pub subject: String,
}

/// The email service section of the configuration, if any.
pub fn email_service<C>(config: &C, key: &str) -> Maybe<EmailService>
where
    C: ConfigAccessor<EmailService> + ?Sized,
{
    optional_setting(config, key)
}

/// Settings a transport is created from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub host: String,
    pub port: u16,
    pub secure: bool,
}

impl TransportConfig {
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
}

/// Plain (non-TLS) transport settings for `host:port`.
pub fn create_transport<H: Into<String>>(host: H, port: u16) -> TransportConfig {
    TransportConfig { host: host.into(), port, secure: false }
}

/// Everything a single send needs.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailOptions {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub attachments: Vec<AttachmentRecord>,
}

pub fn create_mail_options(
    from: impl Into<String>,
    to: impl Into<String>,
    subject: impl Into<String>,
    html: impl Into<String>,
    attachments: Vec<AttachmentRecord>,
) -> MailOptions {
    MailOptions {
        from: from.into(),
        to: to.into(),
        subject: subject.into(),
        html: html.into(),
        attachments,
    }
}

/// Creates transport handles.
pub trait TransportFactory<H> {
    fn create_transport(&self, config: TransportConfig) -> H;
}

impl<H, F> TransportFactory<H> for F
where
    F: Fn(TransportConfig) -> H,
{
    fn create_transport(&self, config: TransportConfig) -> H {
        self(config)
    }
}

/// A transport handle. `send_mail` reports through a callback; its success
/// payload `I` is passed through untouched.
pub trait Transport<I> {
    fn send_mail(&self, options: MailOptions, done: Callback<I, BoxError>);
}

impl<I, F> Transport<I> for F
where
    F: Fn(MailOptions, Callback<I, BoxError>),
{
    fn send_mail(&self, options: MailOptions, done: Callback<I, BoxError>) {
        self(options, done)
    }
}
