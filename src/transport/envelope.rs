use std::borrow::Cow;

use serde::Deserialize;
use serde::de::{DeserializeOwned, Error as DeError};
use serde_json::value::RawValue;

use crate::domain::ResponseEnvelope;

/// Fragment Unifonic appends to error bodies even when no payload exists.
const EMPTY_DATA_FRAGMENT: &str = ",\"data\":[]";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON envelope: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data payload: {0}")]
    Data(#[source] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeJson {
    success: TransportFlag,
    #[serde(default)]
    error_code: Option<TransportCode>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Box<RawValue>>,
}

/// Boolean sent either as a JSON bool or as the string `"true"`/`"false"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TransportFlag(bool);

impl<'de> Deserialize<'de> for TransportFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bool(bool),
            String(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bool(value) => Ok(Self(value)),
            Repr::String(value) if value.trim().eq_ignore_ascii_case("true") => Ok(Self(true)),
            Repr::String(value) if value.trim().eq_ignore_ascii_case("false") => Ok(Self(false)),
            Repr::String(value) => Err(D::Error::custom(format!(
                "expected success flag to be a boolean, got {value:?}"
            ))),
        }
    }
}

/// Error code sent either as a JSON integer or as a string holding one.
///
/// Strings that are not integers decode to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TransportCode(Option<i64>);

impl<'de> Deserialize<'de> for TransportCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed.trim().parse::<i64>().ok()))
            }
            Some(b'-' | b'0'..=b'9') => token
                .parse::<i64>()
                .map(|code| Self(Some(code)))
                .map_err(|_| D::Error::custom("expected error code to be an integer")),
            _ => Err(D::Error::custom(
                "expected error code to be JSON string or integer",
            )),
        }
    }
}

/// Strip the `,"data":[]` fragment from error responses (status >= 400).
///
/// Success bodies are returned untouched; the replacement is a literal match,
/// not a JSON rewrite.
pub fn normalize_error_body(status: u16, body: &str) -> Cow<'_, str> {
    if status >= 400 && body.contains(EMPTY_DATA_FRAGMENT) {
        Cow::Owned(body.replace(EMPTY_DATA_FRAGMENT, ""))
    } else {
        Cow::Borrowed(body)
    }
}

/// Decode a response body into a [`ResponseEnvelope`].
///
/// The payload is only decoded into `T` when `success` is true, so a failed
/// envelope with an unexpected `data` shape still yields its code and message.
pub fn decode_envelope<T>(body: &str) -> Result<ResponseEnvelope<T>, TransportError>
where
    T: DeserializeOwned,
{
    let parsed: EnvelopeJson = serde_json::from_str(body)?;
    let success = parsed.success.0;

    let data = match parsed.data {
        Some(raw) if success => {
            Some(serde_json::from_str::<T>(raw.get()).map_err(TransportError::Data)?)
        }
        _ => None,
    };

    Ok(ResponseEnvelope {
        success,
        error_code: parsed.error_code.and_then(|code| code.0),
        message: parsed.message,
        data,
    })
}
