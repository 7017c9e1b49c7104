//! Error types for the Lockstep SDK.
//!
//! Only failures that prevent a complete HTTP round trip are represented
//! here. A response with any status code, including 4xx and 5xx, is an
//! [`Envelope`](crate::Envelope), never an [`Error`].

use derive_more::{Display, Error, From};

/// Failure to complete a request against the platform.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Network/connection errors (DNS, refused connection, broken stream).
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// No response arrived before the configured timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The request could not be built.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "results[0].paymentId").
        path: String,
        /// Error message.
        message: String,
    },

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if the round trip itself failed (connection, TLS or timeout).
    ///
    /// The other variants describe a request that was never sent.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Tls(_) | Self::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::Timeout;
        assert_eq!(err.to_string(), "request timeout");

        let err = Error::connection("failed to connect");
        assert_eq!(err.to_string(), "connection error: failed to connect");

        let err = Error::tls("bad certificate");
        assert_eq!(err.to_string(), "TLS error: bad certificate");

        let err = Error::json_deserialization("paymentId", "invalid type: integer");
        assert_eq!(
            err.to_string(),
            "JSON deserialization error at 'paymentId': invalid type: integer"
        );
    }

    #[test]
    fn error_is_timeout() {
        assert!(Error::Timeout.is_timeout());
        assert!(!Error::connection("refused").is_timeout());
    }

    #[test]
    fn error_is_connection() {
        assert!(Error::connection("failed").is_connection());
        assert!(!Error::Timeout.is_connection());
    }

    #[test]
    fn error_is_transport() {
        assert!(Error::connection("refused").is_transport());
        assert!(Error::tls("handshake").is_transport());
        assert!(Error::Timeout.is_transport());
        assert!(!Error::invalid_request("bad header").is_transport());
        assert!(!Error::json_deserialization("", "eof").is_transport());
    }

    #[test]
    fn error_from_url_parse() {
        let err: Error = url::Url::parse("not a url").expect_err("invalid").into();
        assert!(matches!(err, Error::InvalidUrl(_)));
        assert!(!err.is_transport());
    }
}
