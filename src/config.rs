//! Pipeline settings.
//!
//! Everything here has a default matching the conventional deployment, so
//! `PipelineConfig::default()` is usually all a caller needs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPLATE_PATH: &str = "./templates/email.html";
pub const DEFAULT_ENCODING: &str = "utf-8";
pub const DEFAULT_SERVICE_KEY: &str = "emailService";

/// Where the pipeline reads its template from and which configuration key
/// holds the email service section.
///
/// # Examples
///
/// ```
/// use notify_rail::PipelineConfig;
///
/// let config = PipelineConfig::default().with_template_path("/srv/mail/welcome.html");
/// assert_eq!(config.template_path, "/srv/mail/welcome.html");
/// assert_eq!(config.service_key, "emailService");
/// assert!(!config.secure);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub template_path: String,
    pub encoding: String,
    pub service_key: String,
    /// Whether transports are created with TLS from the start.
    pub secure: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            template_path: DEFAULT_TEMPLATE_PATH.to_owned(),
            encoding: DEFAULT_ENCODING.to_owned(),
            service_key: DEFAULT_SERVICE_KEY.to_owned(),
            secure: false,
        }
    }
}

impl PipelineConfig {
    pub fn with_template_path<S: Into<String>>(mut self, path: S) -> Self {
        self.template_path = path.into();
        self
    }

    pub fn with_encoding<S: Into<String>>(mut self, encoding: S) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_service_key<S: Into<String>>(mut self, key: S) -> Self {
        self.service_key = key.into();
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
}
