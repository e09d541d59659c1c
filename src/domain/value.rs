use url::Url;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Unifonic application identifier (`AppSid`).
///
/// Found under "Dev Tools" in the Unifonic console. Sent with every request.
///
/// Invariant: non-empty after trimming.
pub struct AppSid(String);

impl AppSid {
    /// Parameter name used by Unifonic (`AppSid`).
    pub const FIELD: &'static str = "AppSid";

    /// Create a validated [`AppSid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// The identifier is a credential; keep it out of logs and panic messages.
impl std::fmt::Debug for AppSid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AppSid(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Root URL every [`Resource`] is resolved against.
///
/// Invariant: absolute `http`/`https` URL whose path ends with `/`.
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Legacy production endpoint. Plain HTTP; override it to use TLS.
    pub const DEFAULT: &'static str = "http://api.unifonic.com/rest/";

    /// Parse and normalize a base URL.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, ValidationError> {
        let input = input.as_ref().trim();
        if input.is_empty() {
            return Err(ValidationError::Empty { field: "base_url" });
        }

        let invalid = |reason: String| ValidationError::InvalidBaseUrl {
            input: input.to_owned(),
            reason,
        };

        let mut url = Url::parse(input).map_err(|err| invalid(err.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_owned()));
        }
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self(url))
    }

    /// Borrow the normalized URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Resolve `resource` beneath this base URL.
    ///
    /// Fails if the result would leave the base URL's origin or path, so the
    /// `AppSid` is never sent anywhere else.
    pub fn join(&self, resource: &Resource) -> Result<Url, ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidResource {
            input: resource.as_str().to_owned(),
            reason,
        };

        let joined = self
            .0
            .join(resource.as_str())
            .map_err(|err| invalid(err.to_string()))?;
        if joined.origin() != self.0.origin() || !joined.path().starts_with(self.0.path()) {
            return Err(invalid(format!("resolves outside of {}", self.0)));
        }
        Ok(joined)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// API resource path relative to the base URL, such as `Messages/Send`.
///
/// Invariant: non-empty after trimming, relative, with no leading `/` and no
/// dot segments, so it always resolves beneath the base URL's path.
pub struct Resource(String);

impl Resource {
    const FIELD: &'static str = "resource";

    /// Create a validated [`Resource`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim().trim_start_matches(['/', '\\']);
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let invalid = |reason: &str| ValidationError::InvalidResource {
            input: trimmed.to_owned(),
            reason: reason.to_owned(),
        };

        if Url::parse(trimmed).is_ok() {
            return Err(invalid("absolute URLs are not allowed"));
        }
        let path = trimmed.split(['?', '#']).next().unwrap_or_default();
        if path.split(['/', '\\']).any(is_dot_segment) {
            return Err(invalid("dot segments are not allowed"));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the relative path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// `%2e` counts as a dot when URLs are normalized.
fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
    )
}
