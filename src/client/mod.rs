//! Client layer: sends requests and applies the response envelope contract.

mod config;

use std::borrow::Cow;
use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{Span, debug, instrument, warn};
use url::Url;

use crate::domain::{AppSid, Method, Request, ValidationError};
use crate::transport::{decode_envelope, normalize_error_body};

pub use config::{
    APP_SID_ENV, BASE_URL_ENV, ClientConfig, DEFAULT_TIMEOUT, USER_AGENT, UnifonicClientBuilder,
};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        method: Method,
        url: Url,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        method: Method,
        url: Url,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let request = match method {
                Method::Get => self.client.get(url).query(&params),
                Method::Post => self.client.post(url).form(&params),
            };
            let response = request.send().await?;
            let status = response.status().as_u16();
            // Content-Type is not trusted; JSON bodies arrive labelled `text/html`.
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`UnifonicClient`].
///
/// Neither kind is retried by the client.
pub enum UnifonicError {
    /// Unifonic answered with `success: false`.
    ///
    /// `code` and `message` are copied from the envelope as-is.
    #[error("API error {code:?}: {message:?}")]
    Api {
        code: Option<i64>,
        message: Option<String>,
    },

    /// Network, timeout, or undecodable response body.
    #[error("error retrieving response: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// A constructor rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl UnifonicError {
    /// `true` when the request was aborted by the client timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(source) => source
                .downcast_ref::<reqwest::Error>()
                .is_some_and(reqwest::Error::is_timeout),
            _ => false,
        }
    }
}

#[derive(Clone)]
/// Unifonic REST client.
///
/// Holds the immutable [`ClientConfig`] and a pooled HTTP client. Cloning is
/// cheap and clones share the connection pool, so one instance can serve
/// concurrent tasks.
///
/// Every request carries the configured `AppSid` parameter, the configured
/// timeout (60 seconds unless overridden), and [`USER_AGENT`].
pub struct UnifonicClient {
    config: Arc<ClientConfig>,
    http: Arc<dyn HttpTransport>,
}

impl UnifonicClient {
    /// Create a client for the production base URL (`http://api.unifonic.com/rest/`).
    ///
    /// For more customization, use [`UnifonicClient::builder`].
    pub fn new(app_sid: impl Into<String>) -> Result<Self, UnifonicError> {
        Self::builder(AppSid::new(app_sid)?).build()
    }

    /// Create a client for a custom base URL.
    ///
    /// An empty or malformed URL fails here rather than on the first call.
    pub fn with_base_url(
        app_sid: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, UnifonicError> {
        Self::builder(AppSid::new(app_sid)?)
            .base_url(base_url)
            .build()
    }

    /// Start building a client with custom settings.
    pub fn builder(app_sid: AppSid) -> UnifonicClientBuilder {
        UnifonicClientBuilder::new(app_sid)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute one request and unwrap the response envelope into `T`.
    ///
    /// Returns the envelope's `data`, or `T::default()` when a successful
    /// envelope carries none.
    ///
    /// Errors:
    /// - [`UnifonicError::Api`] when the envelope says `success: false`, whatever the HTTP status,
    /// - [`UnifonicError::Transport`] for network failures, timeouts, and bodies that are not a
    ///   valid envelope.
    /// - [`UnifonicError::Validation`] if the resource resolves outside the base URL; nothing
    ///   is sent in that case.
    #[instrument(
        name = "unifonic_request",
        skip(self, request),
        fields(
            http.method = %request.method(),
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
        )
    )]
    pub async fn execute<T>(&self, request: Request) -> Result<T, UnifonicError>
    where
        T: DeserializeOwned + Default,
    {
        let url = self.config.base_url().join(request.resource())?;
        Span::current().record("http.url", url.as_str());

        let mut params = Vec::with_capacity(request.params().len() + 1);
        params.push((
            AppSid::FIELD.to_owned(),
            self.config.app_sid().as_str().to_owned(),
        ));
        params.extend(request.params().iter().cloned());

        let response = self
            .http
            .send(request.method(), url, params)
            .await
            .map_err(UnifonicError::Transport)?;
        Span::current().record("http.status_code", response.status);
        debug!(
            status = response.status,
            bytes = response.body.len(),
            "received response"
        );

        let body = normalize_error_body(response.status, &response.body);
        if matches!(body, Cow::Owned(_)) {
            warn!(
                status = response.status,
                "stripped empty data fragment from error response"
            );
        }

        let envelope =
            decode_envelope::<T>(&body).map_err(|err| UnifonicError::Transport(Box::new(err)))?;

        if !envelope.success {
            debug!(error_code = ?envelope.error_code, "request rejected by API");
            return Err(UnifonicError::Api {
                code: envelope.error_code,
                message: envelope.message,
            });
        }

        Ok(envelope.data.unwrap_or_default())
    }
}
