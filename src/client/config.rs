//! Connection defaults shared by every call a client makes.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{AppSid, BaseUrl, ValidationError};

use super::{ReqwestTransport, UnifonicClient, UnifonicError};

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// `User-Agent` sent with every request: `<name>/<version> (rust <rustc version>)`.
///
/// The Rust version is the compiler that built this crate.
pub const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (rust ",
    env!("UNIFONIC_RUSTC_VERSION"),
    ")"
);

/// Environment variable read by [`UnifonicClientBuilder::from_env`] for the AppSid.
pub const APP_SID_ENV: &str = "UNIFONIC_APP_SID";

/// Environment variable read by [`UnifonicClientBuilder::from_env`] for the base URL.
pub const BASE_URL_ENV: &str = "UNIFONIC_BASE_URL";

#[derive(Debug, Clone)]
/// Immutable settings of a built [`UnifonicClient`].
pub struct ClientConfig {
    base_url: BaseUrl,
    app_sid: AppSid,
    timeout: Duration,
    user_agent: String,
}

impl ClientConfig {
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn app_sid(&self) -> &AppSid {
        &self.app_sid
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[derive(Debug, Clone)]
/// Builder for [`UnifonicClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct UnifonicClientBuilder {
    app_sid: AppSid,
    base_url: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl UnifonicClientBuilder {
    /// Create a builder with the production base URL and the 60 second timeout.
    pub fn new(app_sid: AppSid) -> Self {
        Self {
            app_sid,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Create a builder from `UNIFONIC_APP_SID` and, if set, `UNIFONIC_BASE_URL`.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ValidationError> {
        let app_sid = lookup(APP_SID_ENV).ok_or(ValidationError::Missing {
            variable: APP_SID_ENV,
        })?;
        let mut builder = Self::new(AppSid::new(app_sid)?);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
            builder = builder.base_url(base_url);
        }
        Ok(builder)
    }

    /// Override the base URL. It is validated by [`Self::build`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the timeout applied to each request as a whole.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`UnifonicClient`].
    ///
    /// Errors:
    /// - [`UnifonicError::Validation`] if the base URL is empty or malformed,
    /// - [`UnifonicError::Transport`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<UnifonicClient, UnifonicError> {
        let base_url = BaseUrl::parse(self.base_url.as_deref().unwrap_or(BaseUrl::DEFAULT))?;
        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned());

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(user_agent.as_str())
            .build()
            .map_err(|err| UnifonicError::Transport(Box::new(err)))?;

        tracing::debug!(
            base_url = %base_url.as_url(),
            timeout_ms = self.timeout.as_millis() as u64,
            "built Unifonic client"
        );

        Ok(UnifonicClient {
            config: Arc::new(ClientConfig {
                base_url,
                app_sid: self.app_sid,
                timeout: self.timeout,
                user_agent,
            }),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}
