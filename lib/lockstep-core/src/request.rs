//! HTTP request building.
//!
//! Use [`Request::builder`] to construct requests with headers, query parameters, and bodies.
//!
//! # Example
//!
//! ```
//! use lockstep_core::{Request, Method};
//! use bytes::Bytes;
//!
//! let url = "https://api.lockstep.io/api/v1/Payments/query".parse().unwrap();
//! let request = Request::<Bytes>::builder(Method::Get, url)
//!     .header("Accept", "application/json")
//!     .header("accept", "application/problem+json")
//!     .query_pairs([("pageSize".to_string(), "50".to_string())])
//!     .build();
//!
//! assert_eq!(request.headers().len(), 1);
//! assert_eq!(request.header("ACCEPT"), Some("application/problem+json"));
//! ```

use std::collections::HashMap;

use bytes::Bytes;

use crate::Method;

/// An HTTP request with method, URL, headers, and optional body.
#[derive(Debug, Clone)]
pub struct Request<B = Bytes> {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<B>,
}

impl<B> Request<B> {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: url::Url) -> RequestBuilder<B> {
        RequestBuilder::new(method, url)
    }

    /// Rebuild a request from its parts.
    #[must_use]
    pub fn from_parts(
        method: Method,
        url: url::Url,
        headers: HashMap<String, String>,
        body: Option<B>,
    ) -> Self {
        Self {
            method,
            url,
            headers,
            body,
        }
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name, ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, url::Url, HashMap<String, String>, Option<B>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder<B = Bytes> {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<B>,
}

impl<B> RequestBuilder<B> {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header, replacing any header whose name differs only in case.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, name.into(), value.into());
        self
    }

    /// Sets multiple headers; later entries win, names compared ignoring case.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        for (name, value) in headers {
            set_header(&mut self.headers, name, value);
        }
        self
    }

    /// Appends multiple query parameters to the URL.
    ///
    /// An empty iterator leaves the URL untouched, so no bare `?` is emitted.
    #[must_use]
    pub fn query_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut pairs = pairs.into_iter().peekable();
        if pairs.peek().is_none() {
            return self;
        }
        {
            let mut query = self.url.query_pairs_mut();
            for (name, value) in pairs {
                query.append_pair(&name, &value);
            }
        }
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request<B> {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

/// Insert `name: value`, dropping any header whose name matches ignoring ASCII case.
///
/// HTTP header names are case-insensitive, so `api-key` must replace `Api-Key`
/// rather than travel next to it.
pub fn set_header(headers: &mut HashMap<String, String>, name: String, value: String) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
    headers.insert(name, value);
}

impl RequestBuilder<Bytes> {
    /// Set a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json<T: serde::Serialize + ?Sized>(self, value: &T) -> crate::Result<Self> {
        let body = crate::to_json(value)?;
        Ok(self
            .header("Content-Type", crate::ContentType::Json.as_str())
            .body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(path: &str) -> url::Url {
        url::Url::parse("https://api.lockstep.io")
            .and_then(|base| base.join(path))
            .expect("valid URL")
    }

    #[test]
    fn request_builder_basic() {
        let request = Request::<Bytes>::builder(Method::Get, url("/api/v1/Payments/abc123"))
            .header("Accept", "application/json")
            .build();

        assert_eq!(request.method(), Method::Get);
        assert_eq!(
            request.url().as_str(),
            "https://api.lockstep.io/api/v1/Payments/abc123"
        );
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert!(request.body().is_none());
    }

    #[test]
    fn request_builder_with_query() {
        let pairs = vec![
            ("pageSize".to_string(), "50".to_string()),
            ("pageNumber".to_string(), "2".to_string()),
        ];
        let request = Request::<Bytes>::builder(Method::Get, url("/api/v1/Payments/query"))
            .query_pairs(pairs)
            .build();

        assert_eq!(
            request.url().as_str(),
            "https://api.lockstep.io/api/v1/Payments/query?pageSize=50&pageNumber=2"
        );
    }

    #[test]
    fn header_names_differing_in_case_replace_each_other() {
        let defaults = vec![
            ("Api-Key".to_string(), "default-key".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        let request = Request::<Bytes>::builder(Method::Get, url("/api/v1/Payments/abc123"))
            .headers(defaults)
            .headers(vec![("api-key".to_string(), "override-key".to_string())])
            .header("ACCEPT", "text/plain")
            .build();

        assert_eq!(request.headers().len(), 2);
        assert_eq!(request.header("Api-Key"), Some("override-key"));
        assert_eq!(request.headers().get("api-key").map(String::as_str), Some("override-key"));
        assert!(!request.headers().contains_key("Api-Key"));
        assert_eq!(request.header("accept"), Some("text/plain"));
    }

    #[test]
    fn request_builder_empty_query_pairs_leave_url_untouched() {
        let request = Request::<Bytes>::builder(Method::Get, url("/api/v1/Reports/riskrates"))
            .query_pairs(Vec::new())
            .build();

        assert_eq!(request.url().query(), None);
        assert!(!request.url().as_str().ends_with('?'));
    }

    #[test]
    fn request_builder_query_pairs_repeat_keys() {
        let pairs = vec![
            ("Buckets".to_string(), "0".to_string()),
            ("Buckets".to_string(), "30".to_string()),
        ];
        let request = Request::<Bytes>::builder(Method::Get, url("/api/v1/Reports/aging"))
            .query_pairs(pairs)
            .build();

        assert_eq!(request.url().query(), Some("Buckets=0&Buckets=30"));
    }

    #[test]
    fn request_builder_json() {
        let request = Request::builder(Method::Post, url("/api/v1/Payments"))
            .json(&serde_json::json!([{ "referenceCode": "PAY-1" }]))
            .expect("json")
            .build();

        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(
            request.body().map(|body| body.to_vec()),
            Some(br#"[{"referenceCode":"PAY-1"}]"#.to_vec())
        );
    }

    #[test]
    fn request_round_trips_through_parts() {
        let request = Request::<Bytes>::builder(Method::Delete, url("/api/v1/Contacts/c1"))
            .header("Api-Key", "secret")
            .build();

        let (method, url, headers, body) = request.into_parts();
        let rebuilt = Request::from_parts(method, url, headers, body);

        assert_eq!(rebuilt.method(), Method::Delete);
        assert_eq!(rebuilt.header("Api-Key"), Some("secret"));
    }
}
