//! Uniform result of a completed round trip.
//!
//! Every call that reaches the platform produces an [`Envelope`], whatever
//! the status code. A 2xx response carries the decoded value; anything else
//! carries an [`ErrorPayload`]. Exactly one of the two is present, and
//! [`Envelope::is_success`] tells which.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use bytes::Bytes;
//! use lockstep_core::{Envelope, ErrorPayload, Response};
//!
//! let response = Response::new(404, HashMap::new(), Bytes::from(r#"{"message":"not found"}"#));
//! let envelope: Envelope = Envelope::from_response(response);
//!
//! assert!(!envelope.is_success());
//! assert_eq!(envelope.status(), 404);
//! assert_eq!(envelope.error().and_then(ErrorPayload::message).as_deref(), Some("not found"));
//! ```

use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{ContentType, Response};

/// Why a response body could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    /// JSON path of the offending field, empty when the whole body failed.
    pub path: String,
    /// Description of the problem.
    pub message: String,
    /// Declared `Content-Type` of the response, if any.
    pub content_type: Option<String>,
    /// Raw body, lossily converted to text.
    pub body: String,
}

impl DecodeFailure {
    fn new(message: impl Into<String>, content_type: Option<&str>, body: &[u8]) -> Self {
        Self {
            path: String::new(),
            message: message.into(),
            content_type: content_type.map(str::to_string),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    fn from_error(error: crate::Error, content_type: Option<&str>, body: &[u8]) -> Self {
        match error {
            crate::Error::JsonDeserialization { path, message } => Self {
                path: if path == "." { String::new() } else { path },
                ..Self::new(message, content_type, body)
            },
            other => Self::new(other.to_string(), content_type, body),
        }
    }
}

impl fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "could not decode response body: {}", self.message)
        } else {
            write!(
                f,
                "could not decode response body at '{}': {}",
                self.path, self.message
            )
        }
    }
}

/// The failure side of an [`Envelope`].
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorPayload {
    /// The decoded body of a non-2xx response.
    Body(Value),
    /// The body could not be decoded; synthesized by the SDK.
    Decode(DecodeFailure),
}

impl ErrorPayload {
    /// The decoded platform error body, if there is one.
    #[must_use]
    pub const fn as_body(&self) -> Option<&Value> {
        match self {
            Self::Body(value) => Some(value),
            Self::Decode(_) => None,
        }
    }

    /// The decode failure, if the SDK synthesized this payload.
    #[must_use]
    pub const fn as_decode_failure(&self) -> Option<&DecodeFailure> {
        match self {
            Self::Decode(failure) => Some(failure),
            Self::Body(_) => None,
        }
    }

    /// Returns `true` if the SDK could not decode the response body.
    #[must_use]
    pub const fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Best-effort human readable message.
    ///
    /// Looks for a `message`, `title` or `detail` string in a JSON object
    /// body, uses a plain string body verbatim, and falls back to the
    /// decode failure description.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Body(Value::String(text)) if !text.is_empty() => Some(text.clone()),
            Self::Body(Value::Object(fields)) => ["message", "title", "detail"]
                .iter()
                .find_map(|key| fields.get(*key).and_then(Value::as_str))
                .map(str::to_string),
            Self::Body(_) => None,
            Self::Decode(failure) => Some(failure.to_string()),
        }
    }

    /// Decode the platform error body into a caller-provided type.
    ///
    /// Returns `None` when there is no decoded body to work from.
    pub fn decode<E: DeserializeOwned>(&self) -> Option<crate::Result<E>> {
        self.as_body()
            .map(|value| crate::from_json_value(value.clone()))
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body(value) => write!(f, "{value}"),
            Self::Decode(failure) => write!(f, "{failure}"),
        }
    }
}

/// Result of one request against the platform.
///
/// `T` is the type the success body is decoded into; it defaults to
/// [`serde_json::Value`].
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T = Value> {
    status: u16,
    headers: HashMap<String, String>,
    outcome: Result<T, ErrorPayload>,
}

impl<T> Envelope<T> {
    /// A successful envelope.
    #[must_use]
    pub fn success(status: u16, value: T) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            outcome: Ok(value),
        }
    }

    /// A failed envelope.
    #[must_use]
    pub fn failure(status: u16, error: ErrorPayload) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            outcome: Err(error),
        }
    }

    /// Attach response headers.
    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// `true` when the status was 2xx and the body decoded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// HTTP status code received from the platform.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single response header by name, ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The decoded value, set only on success.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }

    /// The error payload, set only on failure.
    #[must_use]
    pub fn error(&self) -> Option<&ErrorPayload> {
        self.outcome.as_ref().err()
    }

    /// Consume into the decoded value, if any.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.outcome.ok()
    }

    /// Consume into a `Result` for `?`-style handling.
    pub fn into_result(self) -> Result<T, ErrorPayload> {
        self.outcome
    }

    /// Transform the success value, keeping status and headers.
    pub fn map<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        Envelope {
            status: self.status,
            headers: self.headers,
            outcome: self.outcome.map(f),
        }
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Classify a raw transport response.
    ///
    /// Never fails: a body that cannot be decoded under its declared content
    /// type, or a success body that does not match `T`, becomes a failed
    /// envelope carrying [`ErrorPayload::Decode`] with the status preserved.
    #[must_use]
    pub fn from_response(response: Response<Bytes>) -> Self {
        let content_type = response.header("content-type").map(str::to_string);
        let (status, headers, body) = response.into_parts();
        let content_type = content_type.as_deref();

        let outcome = match (is_success_status(status), decode_body(content_type, &body)) {
            (true, Ok(value)) => crate::from_json_value::<T>(value).map_err(|err| {
                ErrorPayload::Decode(DecodeFailure::from_error(err, content_type, &body))
            }),
            (false, Ok(value)) => Err(ErrorPayload::Body(value)),
            (_, Err(failure)) => Err(ErrorPayload::Decode(failure)),
        };

        Self {
            status,
            headers,
            outcome,
        }
    }
}

const fn is_success_status(status: u16) -> bool {
    status >= 200 && status < 300
}

fn decode_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, DecodeFailure> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    match ContentType::classify(content_type) {
        Some(ContentType::Json) => crate::from_json::<Value>(body)
            .map_err(|err| DecodeFailure::from_error(err, content_type, body)),
        Some(ContentType::PlainText) => std::str::from_utf8(body)
            .map(|text| Value::String(text.to_string()))
            .map_err(|err| {
                DecodeFailure::new(
                    format!("body is not valid UTF-8: {err}"),
                    content_type,
                    body,
                )
            }),
        None => Err(DecodeFailure::new(
            format!(
                "unsupported content type '{}'",
                content_type.unwrap_or_default()
            ),
            content_type,
            body,
        )),
    }
}
