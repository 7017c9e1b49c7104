//! Body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Body encodings the SDK knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// Plain text content type (`text/plain`).
    PlainText,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::PlainText => "text/plain",
        }
    }

    /// Classify a declared `Content-Type` header value.
    ///
    /// A missing header is treated as JSON, the platform's only response
    /// encoding. `application/json`, `text/json` and any `+json` suffix are
    /// JSON; any other `text/*` type is plain text. Everything else is
    /// unsupported and yields `None`.
    #[must_use]
    pub fn classify(header: Option<&str>) -> Option<Self> {
        let Some(header) = header else {
            return Some(Self::Json);
        };
        let mime = header
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if mime.is_empty()
            || mime == "application/json"
            || mime == "text/json"
            || mime.ends_with("+json")
        {
            Some(Self::Json)
        } else if mime.starts_with("text/") {
            Some(Self::PlainText)
        } else {
            None
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use lockstep_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Payment { #[serde(rename = "paymentId")] payment_id: String }
///
/// let payment = Payment { payment_id: "abc123".to_string() };
/// let bytes = to_json(&payment).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"paymentId":"abc123"}"#);
/// ```
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so the error names the exact field that
/// failed (e.g., "records[2].paymentDate").
///
/// # Errors
///
/// Returns an error if JSON deserialization fails.
///
/// # Example
///
/// ```
/// use lockstep_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Country { alpha2: String }
///
/// let bytes = br#"{"alpha2":"NZ"}"#;
/// let country: Country = from_json(bytes).expect("deserialize");
/// assert_eq!(country, Country { alpha2: "NZ".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

/// Deserialize an already-parsed JSON value with path-aware error messages.
///
/// # Errors
///
/// Returns an error if the value does not match `T`.
pub fn from_json_value<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}
